#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::future::Future;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rollbook::lens::students::{StudentAddArgs, StudentRollArgs, StudentUpdateArgs};
use rollbook::{OutputFormat, RollbookConfig};
use tracing::{info, Level};

mod commands;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path; without it only ROLLBOOK_* environment variables are read
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    /// Output format: plain, table, markdown, json, json-pretty, json-line, psv
    #[clap(short, long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Defaults to `demo`
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed ten sample students, list, update one, delete one, list again.
    Demo,

    /// Create the students table if it does not exist.
    Init,

    /// Add a student, replacing any existing record with the same roll number.
    Add(StudentAddArgs),

    /// List all students ordered by roll number.
    List,

    /// Show one student.
    Get(StudentRollArgs),

    /// Update the marks of a student.
    Update(StudentUpdateArgs),

    /// Delete a student.
    Delete(StudentRollArgs),

    /// Show the resolved configuration and database status.
    Config,
}

fn dispatch(config: &RollbookConfig, command: Commands, output_format: OutputFormat) -> Result<()> {
    match command {
        Commands::Demo => commands::demo::run(config, output_format),
        Commands::Init => commands::init::run(config),
        Commands::Add(args) => commands::add::run(config, args),
        Commands::List => commands::list::run(config, output_format),
        Commands::Get(args) => commands::get::run(config, args, output_format),
        Commands::Update(args) => commands::update::run(config, args),
        Commands::Delete(args) => commands::delete::run(config, args),
        Commands::Config => commands::config::run(config, output_format),
    }
}

/// Wait for the command task, or for `shutdown` to fire first
///
/// An interrupt writes the exit notice to `out` and counts as success. A
/// shutdown future that fails is ignored and the task is awaited instead.
async fn run_until_interrupted<T, S, W>(task: T, shutdown: S, out: &mut W) -> ExitCode
where
    T: Future<Output = Result<Result<()>, tokio::task::JoinError>>,
    S: Future<Output = std::io::Result<()>>,
    W: Write,
{
    tokio::select! {
        result = task => match result {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(e)) => {
                eprintln!("ERROR: {}", e);
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("ERROR: command task failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(()) = shutdown => {
            info!("received Ctrl+C, abandoning the running command");
            let _ = writeln!(out, "\n[✘] Interrupted. Exiting...");
            let _ = out.flush();
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match RollbookConfig::new(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("ERROR: failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let command = cli.command.unwrap_or(Commands::Demo);
    let output_format = cli.format;

    // The command runs on a blocking thread so Ctrl+C can cut it short.
    let exit_code = runtime.block_on(async move {
        let task = tokio::task::spawn_blocking(move || dispatch(&config, command, output_format));
        run_until_interrupted(task, tokio::signal::ctrl_c(), &mut std::io::stdout()).await
    });

    // Do not wait for an interrupted command to finish
    runtime.shutdown_background();
    exit_code
}
