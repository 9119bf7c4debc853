use bakeshop::application::engine::PurchaseEngine;
use bakeshop::domain::ports::CatalogBox;
use bakeshop::infrastructure::in_memory::InMemoryCatalog;
use bakeshop::interfaces::csv::catalog_reader::CatalogReader;
use bakeshop::interfaces::terminal::session::TerminalSession;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog CSV file (optional). If omitted, uses the built-in bakery catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated processing delay per purchase attempt, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    processing_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr so stdout stays clean for the session.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let catalog = if let Some(path) = cli.catalog {
        // Load the catalog from a CSV file
        let file = File::open(path).into_diagnostic()?;
        let products = CatalogReader::new(file)
            .products()
            .collect::<Result<Vec<_>, _>>()
            .into_diagnostic()?;
        InMemoryCatalog::try_new(products).into_diagnostic()?
    } else {
        // Use the built-in catalog
        InMemoryCatalog::builtin()
    };

    let catalog: CatalogBox = Box::new(catalog);
    let engine = PurchaseEngine::with_delay(
        catalog,
        Duration::from_millis(cli.processing_delay_ms),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = TerminalSession::new(engine, stdin.lock(), stdout.lock());
    session.run().await.into_diagnostic()?;

    Ok(())
}
