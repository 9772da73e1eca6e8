use std::future::Future;
use std::io::Write;

use tracing::{debug, info, warn};

use crate::core::target::ConnectionTarget;
use crate::report::Reporter;
use crate::{Document, FetchError};

pub mod mongo;

/// Opens sessions against a document service.
pub trait Connector {
    type Session: Session;

    /// Returns only once the service has answered; a lazy handle is not a connection.
    fn connect(
        &self,
        target: &ConnectionTarget,
    ) -> impl Future<Output = Result<Self::Session, FetchError>> + Send;
}

/// A live session owned by exactly one [`Connection`].
pub trait Session: Send + Sync {
    /// Runs an unfiltered query and drains every matching document.
    fn find_all(
        &self,
        database: &str,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Document>, FetchError>> + Send;

    fn close(self) -> impl Future<Output = ()> + Send;
}

/// An open connection. Consumed by [`Connection::close`].
pub struct Connection<S: Session> {
    session: S,
    target: ConnectionTarget,
}

impl<S: Session> Connection<S> {
    pub async fn open<C>(connector: &C, target: &ConnectionTarget) -> Result<Self, FetchError>
    where
        C: Connector<Session = S>,
    {
        debug!(uri = %target, "connecting");
        let session = connector.connect(target).await?;
        info!(uri = %target, "connected successfully to server");
        Ok(Self {
            session,
            target: target.clone(),
        })
    }

    /// Selecting a database never fails; a missing one reads as empty.
    pub fn database<'a>(&'a self, name: &'a str) -> DatabaseHandle<'a, S> {
        DatabaseHandle {
            connection: self,
            name,
        }
    }

    pub async fn close(self) {
        debug!(uri = %self.target, "closing connection");
        self.session.close().await;
    }
}

pub struct DatabaseHandle<'a, S: Session> {
    connection: &'a Connection<S>,
    name: &'a str,
}

impl<'a, S: Session> DatabaseHandle<'a, S> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn collection(&self, name: &'a str) -> CollectionHandle<'a, S> {
        CollectionHandle {
            connection: self.connection,
            database: self.name,
            name,
        }
    }
}

pub struct CollectionHandle<'a, S: Session> {
    connection: &'a Connection<S>,
    database: &'a str,
    name: &'a str,
}

impl<S: Session> CollectionHandle<'_, S> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.name)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Document>, FetchError> {
        let docs = self
            .connection
            .session
            .find_all(self.database, self.name)
            .await?;
        debug!(ns = %self.namespace(), count = docs.len(), "fetched documents");
        Ok(docs)
    }
}

/// What a single run reads.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub target: ConnectionTarget,
    pub database: String,
    pub collection: String,
}

/// Runs connect, select, fetch, report and close as one straight-line pipeline.
pub struct DocumentFetcher<C> {
    connector: C,
}

impl<C: Connector> DocumentFetcher<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub async fn connect(
        &self,
        target: &ConnectionTarget,
    ) -> Result<Connection<C::Session>, FetchError> {
        Connection::open(&self.connector, target).await
    }

    /// Returns the number of documents reported.
    ///
    /// When `connect` fails nothing else runs. Otherwise the connection is
    /// closed exactly once, whether the fetch and report succeeded or not.
    pub async fn run<W: Write>(
        &self,
        request: &FetchRequest,
        reporter: &mut Reporter<W>,
    ) -> Result<usize, FetchError> {
        let connection = self.connect(&request.target).await?;
        let outcome = fetch_and_report(&connection, request, reporter).await;
        if let Err(e) = &outcome {
            warn!(error = %e, "fetch aborted, releasing connection");
        }
        connection.close().await;
        outcome
    }
}

async fn fetch_and_report<S: Session, W: Write>(
    connection: &Connection<S>,
    request: &FetchRequest,
    reporter: &mut Reporter<W>,
) -> Result<usize, FetchError> {
    let database = connection.database(&request.database);
    let collection = database.collection(&request.collection);
    let docs = collection.fetch_all().await?;
    reporter.report(&docs)?;
    Ok(docs.len())
}
