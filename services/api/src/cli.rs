use crate::commands::{
    run_batch, run_documents_review, run_evaluate, BatchArgs, DocumentsReviewArgs, EvaluateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use proposal_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Proposal Screening Service",
    about = "Run and exercise the initiative proposal screening service from the command line",
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
    /// Screen a single proposal from a JSON file, or the built-in sample
    Evaluate(EvaluateArgs),
    /// Screen every proposal row in a CSV export
    Batch(BatchArgs),
    /// Supporting-document utilities
    Documents {
        #[command(subcommand)]
        command: DocumentsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DocumentsCommand {
    /// Run the upload heuristics against local files before submitting them
    Review(DocumentsReviewArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
        Command::Documents {
            command: DocumentsCommand::Review(args),
        } => run_documents_review(args),
    }
}
