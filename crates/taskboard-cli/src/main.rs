/*
[INPUT]:  CLI arguments, task store address from flag or environment
[OUTPUT]: Rendered task board and exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, commands, or rendering
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::Confirm;
use taskboard_adapter::{ClientConfig, TaskStoreClient};
use taskboard_cli::TaskBoard;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "TaskBoard command-line client")]
struct Cli {
    /// Task store base URL; overrides TASKBOARD_API_URL
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the task board
    List,
    /// Create a task
    Add {
        /// Title of the new task
        title: String,
    },
    /// Flip a task's completion flag
    Toggle {
        /// Task id as shown by `list`
        id: i64,
    },
    /// Delete a task
    Rm {
        /// Task id as shown by `list`
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let client = match &args.api_url {
        Some(url) => TaskStoreClient::with_config_and_base_url(ClientConfig::default(), url)
            .context("invalid --api-url")?,
        None => TaskStoreClient::from_env().context("invalid TASKBOARD_API_URL")?,
    };
    debug!(base_url = %client.base_url(), "using task store");

    let mut board = TaskBoard::connect(client).await;

    match args.command {
        Command::List => {}
        Command::Add { title } => {
            board.set_draft_title(title);
            board.submit_draft().await;
        }
        Command::Toggle { id } => {
            board.toggle(id).await;
        }
        Command::Rm { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete task {id}?"))
                    .default(false)
                    .interact()
                    .context("read confirmation")?;
                if !confirmed {
                    return Ok(());
                }
            }
            board.delete(id).await;
        }
    }

    render_board(&board);

    if let Some(message) = board.last_error() {
        return Err(anyhow!("{message}"));
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn render_board(board: &TaskBoard) {
    if board.tasks().is_empty() {
        println!("{}", style("No tasks yet. Create your first one!").dim());
        return;
    }

    for task in board.tasks() {
        let marker = if task.completed {
            style("[x]").green()
        } else {
            style("[ ]").cyan()
        };
        let title = if task.completed {
            style(task.title.as_str()).dim()
        } else {
            style(task.title.as_str())
        };
        println!(
            "{:>4}  {} {}  {}",
            style(task.id).bold(),
            marker,
            title,
            style(task.created_at.as_str()).dim()
        );
    }
}
