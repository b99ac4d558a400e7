pub mod asana_client;
pub mod logger;

pub use asana_client::AsanaClientError;
pub use logger::LoggerError;
