//! RFP Desk CLI - Extract RFP documents and ask questions about them.

use anyhow::Context;
use clap::Parser;
use rfpdesk_cli::app;
use rfpdesk_cli::commands;
use rfpdesk_cli::repl;
use rfpdesk_cli::{Cli, Command, Config, Formatter, OutputFormat};
use rfpdesk_domain::traits::DocumentPersistence;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, then apply environment and flag overrides
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    config.apply_env();
    if let Some(storage) = cli.storage {
        config.storage_file = storage;
    }

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Table };
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            let assistant = app::build_assistant(&config)?;
            repl::run_repl(&assistant, &config, &formatter)?;
        }
        Some(Command::Upload(args)) => {
            let assistant = app::build_assistant(&config)?;
            let mut session = assistant.open_session()?;
            commands::execute_upload(&args.files, &assistant, &mut session, &formatter)?;
        }
        Some(Command::Ask(args)) => {
            let assistant = app::build_assistant(&config)?;
            let mut session = assistant.open_session()?;
            commands::execute_ask(&args.text(), &assistant, &mut session, &formatter)?;
        }
        Some(Command::List) => {
            let documents = app::open_store(&config).load()?;
            commands::execute_list(&documents, &formatter)?;
        }
        Some(Command::Show(args)) => {
            let documents = app::open_store(&config).load()?;
            commands::execute_show(args.id, &documents, &formatter)?;
        }
        Some(Command::Clear(args)) => {
            commands::execute_clear(args, &app::open_store(&config), &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
