mod config;
mod error;
mod store;

pub use config::MySqlConfig;
pub use error::{MySqlDaoError, MySqlResult};
pub use store::MySqlQuizStore;
