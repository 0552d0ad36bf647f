mod category;
pub mod requests;
pub mod responses;

pub use self::category::TransactionCategory;
