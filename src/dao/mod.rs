/// Output records produced by the stored procedures.
pub mod models;
/// Procedure-call abstraction and its database backends.
pub mod quiz_store;
/// Storage abstraction layer for database operations.
pub mod storage;
