mod transaction;

pub use self::transaction::{
    CategoryTransactionsPayload, CategoryTransactionsResponse, ConsolidatedTransactionsResponse,
    TransactionResponse,
};
