mod transaction;

pub use self::transaction::{ConsolidateTransactionsQuery, FindCategoryTransactions, StatusFilter};
