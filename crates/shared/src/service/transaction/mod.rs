mod query;

pub use self::query::TransactionLookupService;
