use bson::doc;
use futures_util::stream::TryStreamExt;
use mongodb::Client;

use super::{Connector, Session};
use crate::core::document::from_bson;
use crate::core::errors::{ConnectionError, QueryError};
use crate::core::target::ConnectionTarget;
use crate::{Document, FetchError};

/// Connects through the official MongoDB driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl Connector for MongoConnector {
    type Session = MongoSession;

    async fn connect(&self, target: &ConnectionTarget) -> Result<MongoSession, FetchError> {
        let client = Client::with_uri_str(target.as_str())
            .await
            .map_err(|e| ConnectionError(e.to_string()))?;

        // The driver connects lazily; a ping forces server selection and authentication.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ConnectionError(e.to_string()))?;

        Ok(MongoSession { client })
    }
}

#[derive(Debug)]
pub struct MongoSession {
    client: Client,
}

impl Session for MongoSession {
    async fn find_all(&self, database: &str, collection: &str) -> Result<Vec<Document>, FetchError> {
        let coll = self
            .client
            .database(database)
            .collection::<bson::Document>(collection);
        let cursor = coll
            .find(doc! {})
            .await
            .map_err(|e| QueryError(e.to_string()))?;
        let raw: Vec<bson::Document> = cursor
            .try_collect()
            .await
            .map_err(|e| QueryError(e.to_string()))?;
        Ok(raw.iter().map(from_bson).collect())
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}
