mod backend;
mod consolidate;

pub use self::backend::TransactionBackendClient;
pub use self::consolidate::ConsolidatedTransactionService;
