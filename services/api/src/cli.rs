use crate::commands::{run_batch, run_catalog, run_diagnose, BatchArgs, CatalogArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jouzukan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Jouzukan",
    about = "Score quiz answers into a personality profile and archetype",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Diagnose a single answer set given on the command line
    Diagnose(DiagnoseArgs),
    /// Diagnose every respondent in an answer-sheet CSV export
    Batch(BatchArgs),
    /// Print the question battery or the archetype encyclopedia
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Batch(args) => run_batch(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
