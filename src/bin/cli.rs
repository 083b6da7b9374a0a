//! questionkv CLI Client
//!
//! Command-line interface for the questionkv gRPC API.

use clap::{ArgAction, Parser, Subcommand};
use questionkv::client::{render_table, QuestionClient};
use questionkv::config::DEFAULT_GRPC_LISTEN;
use questionkv::model::{Filter, Question};
use questionkv::QuestionError;
use tracing_subscriber::{fmt, EnvFilter};

/// questionkv CLI
#[derive(Parser, Debug)]
#[command(name = "questionkv-cli")]
#[command(about = "Questions client tool")]
#[command(version)]
struct Args {
    /// gRPC server address
    #[arg(short, long, env = "LISTEN", default_value = DEFAULT_GRPC_LISTEN)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add or update question
    Upsert {
        /// ID of the question (0 creates a new one)
        #[arg(long, default_value_t = 0)]
        id: u64,

        /// Text of the question
        #[arg(short, long, default_value = "")]
        text: String,

        /// Flag of activity
        #[arg(short, long, default_value_t = true, default_missing_value = "true",
              num_args = 0..=1, action = ArgAction::Set)]
        active: bool,

        /// Is it a good answer?
        #[arg(short, long, default_value_t = true, default_missing_value = "true",
              num_args = 0..=1, action = ArgAction::Set)]
        good: bool,
    },

    /// Show list of questions
    List {
        /// Limit of questions
        #[arg(short, long, default_value_t = 100)]
        limit: i32,

        /// Offset from the start
        #[arg(short, long, default_value_t = 0)]
        offset: i32,

        /// Show only active or disabled questions
        #[arg(short, long, default_value_t = true, default_missing_value = "true",
              num_args = 0..=1, action = ArgAction::Set)]
        active: bool,
    },

    /// Show one question
    View {
        /// Id of a question
        #[arg(long)]
        id: u64,
    },

    /// Delete one question
    Delete {
        /// Id of a question
        #[arg(long)]
        id: u64,
    },
}

#[tokio::main]
async fn main() {
    // Quiet by default so only the table reaches the terminal
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let mut client = QuestionClient::connect(&args.server)
        .await
        .map_err(|e| context("couldn't connect to the server", e))?;

    match args.command {
        Commands::Upsert {
            id,
            text,
            active,
            good,
        } => {
            let question = Question::new(text, active, good).with_id(id);
            let saved = client
                .upsert(question)
                .await
                .map_err(|e| context("couldn't send a question", e))?;
            print!("{}", render_table(&[saved]));
        }

        Commands::List {
            limit,
            offset,
            active,
        } => {
            let filter = Filter {
                is_active: active,
                limit,
                offset,
                ignore_ids: Vec::new(),
            };
            let questions = client
                .list(filter)
                .await
                .map_err(|e| context("couldn't fetch a list of questions", e))?;
            print!("{}", render_table(&questions));
        }

        Commands::View { id } => {
            let question = client
                .view(id)
                .await
                .map_err(|e| context("unable to fetch a question", e))?;
            print!("{}", render_table(&[question]));
        }

        Commands::Delete { id } => {
            client
                .delete(id)
                .await
                .map_err(|e| context("unable to delete a question", e))?;
            println!("Question {} was deleted successfully", id);
        }
    }

    Ok(())
}

fn context(action: &str, err: QuestionError) -> String {
    format!("{}: {}", action, err)
}
