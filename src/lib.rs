mod core;
pub mod config;
pub mod fetcher;
pub mod report;

pub use crate::config::FetchArgs;
pub use crate::core::errors::{ConnectionError, FetchError, QueryError};
pub use crate::core::target::ConnectionTarget;
pub use crate::fetcher::mongo::{MongoConnector, MongoSession};
pub use crate::fetcher::{
    CollectionHandle, Connection, Connector, DatabaseHandle, DocumentFetcher, FetchRequest, Session,
};
pub use crate::report::Reporter;

pub type Document = serde_json::Map<String, serde_json::Value>;
