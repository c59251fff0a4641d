use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;
use tasklist::config::{self, FILE_ENV};
use tasklist::{Console, TaskManager, TaskStore};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - keep a prioritized task list in a JSON file")]
#[command(version)]
struct Cli {
    /// Path to the task file (default: config file, then ./tasks.json)
    #[arg(short, long, env = FILE_ENV)]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Print all tasks
    View,

    /// Add a task, prompting for anything not given
    Add {
        /// Task title
        #[arg(short, long)]
        title: Option<String>,

        /// Task priority, e.g. High, Medium, Low
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Delete a task by its number, prompting if omitted
    Delete {
        /// 1-based task number as shown by `view`
        number: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing on stderr so logs never interleave with prompts
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config_path = config::default_config_path();
    let path = config::resolve_storage_path(cli.file, config_path.as_deref())?;
    debug!(path = ?path, "Resolved storage path");

    let store = TaskStore::new(path);
    let mut manager = TaskManager::open(store, Console::stdio())?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => manager.run()?,
        Commands::View => manager.view()?,
        Commands::Add { title, priority } => {
            manager.add_with(title, priority)?;
        }
        Commands::Delete { number } => {
            match number {
                Some(n) => manager.delete_input(&n)?,
                None => manager.delete()?,
            };
        }
    }

    Ok(())
}
