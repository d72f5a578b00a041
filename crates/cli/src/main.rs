use std::{
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use formdesk_core::RecordStore;
use formdesk_types::DEFAULT_DB_FILE_NAME;

mod add;
mod feedback;
mod list;
mod register;
mod render;

#[derive(Clone, Debug)]
pub struct Context {
    pub db_path: PathBuf,
}

impl Context {
    pub fn new(db_path: PathBuf) -> Self {
        Context { db_path }
    }

    /// Open the record store for the lifetime of one command
    fn open_store(&self) -> Result<RecordStore, String> {
        let database_url = self
            .db_path
            .to_str()
            .ok_or_else(|| format!("Database path is not valid UTF-8: {}", self.db_path.display()))?;
        RecordStore::open(database_url).map_err(|e| e.to_string())
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "FormDesk - Customer registration and feedback forms", long_about = None)]
struct Opts {
    /// Path to the SQLite file holding customer records (default: ./customers.db)
    #[arg(
        long = "db-path",
        short = 'd',
        global = true,
        env = "FORMDESK_DB_PATH",
        default_value = DEFAULT_DB_FILE_NAME
    )]
    db_path: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
enum Command {
    /// Fill in the customer registration form interactively
    Register(register::RegisterCommand),
    /// Register a single customer from command line flags
    Add(add::AddCommand),
    /// List registered customers
    List(list::ListCommand),
    /// Fill in the feedback form and print it
    Feedback(feedback::FeedbackCommand),
}

fn main() {
    // Environment first, so FORMDESK_DB_PATH from .env reaches clap
    load_env_file(Path::new("."));

    let opts: Opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            process::exit(e.exit_code());
        }
    };

    init_tracing();

    let ctx = Context::new(opts.db_path.clone());

    if let Err(e) = handle_command(opts, &ctx) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Load environment variables from a .env file in `dir`
fn load_env_file(dir: &Path) {
    let env_file_path = dir.join(".env");

    match dotenvy::from_path(&env_file_path) {
        Ok(_) => {}
        Err(e) if e.not_found() => {
            // .env file not found is fine, just continue silently
        }
        Err(e) => {
            eprintln!(
                "Warning: Failed to load .env file at {}: {}",
                env_file_path.display(),
                e
            );
        }
    }
}

fn handle_command(opts: Opts, ctx: &Context) -> Result<(), String> {
    match opts.command {
        Command::Register(cmd) => with_store(ctx, |store| cmd.execute(store)),
        Command::Add(cmd) => with_store(ctx, |store| cmd.execute(store)),
        Command::List(cmd) => with_store(ctx, |store| cmd.execute(store)),
        Command::Feedback(cmd) => cmd.execute(),
    }
}

/// Run `f` against a store opened for this process and close it afterwards,
/// whatever `f` returned.
fn with_store<F>(ctx: &Context, f: F) -> Result<(), String>
where
    F: FnOnce(&mut RecordStore) -> Result<(), String>,
{
    let mut store = ctx.open_store()?;
    let result = f(&mut store);
    store.close();
    result
}
