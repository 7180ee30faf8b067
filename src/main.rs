mod api;
mod config;
mod render;
mod session;


use clap::{Parser, Subcommand};
use lifecycle::{ComplaintsState, LifecycleError};

use crate::api::{ApiError, HttpComplaintsApi};
use crate::config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Timeouts};
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api client setup failed: {0}")]
    Api(#[from] ApiError),
    #[error("cannot submit: {0}")]
    Lifecycle(#[from] LifecycleError),
    #[error("{0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "complaints", about = "List and submit complaints")]
struct Cli {
    #[arg(long, env = "COMPLAINTS_BASE_URL", default_value = lifecycle::endpoints::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "COMPLAINTS_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "COMPLAINTS_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print every complaint.
    List,
    /// Submit a complaint, then print the refreshed list.
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ClientConfig::new(
        &cli.base_url,
        Timeouts { request_secs: cli.request_timeout_secs, connect_secs: cli.connect_timeout_secs },
    );
    tracing::info!(base_url = %config.base_url, "complaints client starting");

    let api = HttpComplaintsApi::new(&config)?;
    let mut session = Session::start(api).await;

    let refused = match cli.command {
        Command::List => None,
        Command::Submit { title, body } => {
            let draft = session.draft_mut();
            draft.title = title;
            draft.body = body;
            session.submit().await.err()
        }
    };

    let (output, result) = report(session.state(), refused);
    print!("{output}");
    result
}

/// Render the final state and decide the exit result.
///
/// The list is rendered even when the submit was refused, so the user still
/// sees the snapshot and the reason.
fn report(state: &ComplaintsState, refused: Option<LifecycleError>) -> (String, Result<(), CliError>) {
    let output = render::render(state);
    let result = match (refused, state.error_message()) {
        (Some(e), _) => Err(e.into()),
        (None, Some(message)) => Err(CliError::Failed(message.to_owned())),
        (None, None) => Ok(()),
    };
    (output, result)
}
