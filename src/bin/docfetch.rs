use std::process::ExitCode;

use clap::Parser;
use docfetch::config::load_dotenv;
use docfetch::{DocumentFetcher, FetchArgs, MongoConnector, Reporter};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before logging starts, so RUST_LOG can come from the file too.
    let env_file_error = load_dotenv();
    init_logging();
    if let Some(e) = env_file_error {
        debug!(error = %e, "ignoring unusable .env file");
    }

    let request = FetchArgs::parse().into_request();
    let fetcher = DocumentFetcher::new(MongoConnector);
    let mut reporter = Reporter::stdout();

    match fetcher.run(&request, &mut reporter).await {
        Ok(count) => {
            info!(
                count,
                ns = %format!("{}.{}", request.database, request.collection),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
