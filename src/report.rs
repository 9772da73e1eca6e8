use std::io::{self, Stdout, Write};

use crate::{Document, FetchError};

pub const REPORT_PREFIX: &str = "Found documents => ";

/// Writes fetched documents as a human-readable dump.
pub struct Reporter<W> {
    out: W,
}

impl Reporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn report(&mut self, docs: &[Document]) -> Result<(), FetchError> {
        let body = serde_json::to_string_pretty(docs)?;
        writeln!(self.out, "{REPORT_PREFIX}{body}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
