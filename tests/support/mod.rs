#![allow(dead_code)]


use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use docfetch::{
    ConnectionError, ConnectionTarget, Connector, Document, FetchError, QueryError, Session,
};
use serde_json::Value;

pub fn document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Counts what the pipeline asked of the transport.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    connects: Arc<AtomicUsize>,
    finds: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl Probe {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fault {
    #[default]
    None,
    Connect,
    Find,
}

/// In-memory transport with an injectable failure point.
#[derive(Debug, Clone, Default)]
pub struct FakeConnector {
    collections: HashMap<(String, String), Vec<Document>>,
    fault: Fault,
    probe: Probe,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(
        mut self,
        database: &str,
        collection: &str,
        docs: impl IntoIterator<Item = Document>,
    ) -> Self {
        self.collections.insert(
            (database.to_string(), collection.to_string()),
            docs.into_iter().collect(),
        );
        self
    }

    pub fn failing(mut self, fault: Fault) -> Self {
        self.fault = fault;
        self
    }

    pub fn probe(&self) -> Probe {
        self.probe.clone()
    }
}

impl Connector for FakeConnector {
    type Session = FakeSession;

    async fn connect(&self, target: &ConnectionTarget) -> Result<FakeSession, FetchError> {
        self.probe.connects.fetch_add(1, Ordering::SeqCst);
        if self.fault == Fault::Connect {
            return Err(ConnectionError(format!("{target} is unreachable")).into());
        }
        Ok(FakeSession {
            collections: self.collections.clone(),
            fail_find: self.fault == Fault::Find,
            probe: self.probe.clone(),
        })
    }
}

#[derive(Debug)]
pub struct FakeSession {
    collections: HashMap<(String, String), Vec<Document>>,
    fail_find: bool,
    probe: Probe,
}

impl Session for FakeSession {
    async fn find_all(&self, database: &str, collection: &str) -> Result<Vec<Document>, FetchError> {
        self.probe.finds.fetch_add(1, Ordering::SeqCst);
        if self.fail_find {
            return Err(QueryError("connection reset mid-read".into()).into());
        }
        Ok(self
            .collections
            .get(&(database.to_string(), collection.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn close(self) {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
    }
}
