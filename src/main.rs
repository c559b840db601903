use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use money_moves::audit::AuditLogger;
use money_moves::cli::{
    handle_add, handle_delete, handle_export, handle_history, handle_list, handle_show,
    handle_summary, AddArgs, ExportFormat,
};
use money_moves::config::{MoneyPaths, Settings};
use money_moves::models::TransactionKind;
use money_moves::services::Ledger;
use money_moves::storage::open_ledger_storage;

#[derive(Parser)]
#[command(
    name = "money-moves",
    version,
    about = "Track your everyday expenses",
    long_about = "Money Moves records income and expenses in a local ledger and \
                  keeps a running net balance. Run without a command to open the \
                  interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Record income
    Income(AddArgs),

    /// Record an expense
    Expense(AddArgs),

    /// List all transactions in the order they were added
    #[command(alias = "ls")]
    List,

    /// Show one transaction
    Show {
        /// Transaction ID (full or short form)
        id: String,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (full or short form)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show total income, total expense and net balance
    Summary,

    /// Export the ledger
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MoneyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    let command = cli.command.unwrap_or(Commands::Tui);

    if let Commands::Config = command {
        print_config(&paths, &settings);
        return Ok(());
    }
    if let Commands::History { count } = command {
        handle_history(&audit, count)?;
        return Ok(());
    }

    let storage = open_ledger_storage(&paths)?;
    let mut ledger = Ledger::hydrate(Box::new(storage)).with_audit(audit);

    match command {
        Commands::Tui => money_moves::tui::run_tui(&mut ledger, &settings)?,
        Commands::Income(args) => handle_add(&mut ledger, &settings, TransactionKind::Income, args)?,
        Commands::Expense(args) => {
            handle_add(&mut ledger, &settings, TransactionKind::Expense, args)?
        }
        Commands::List => handle_list(&ledger, &settings)?,
        Commands::Show { id } => handle_show(&ledger, &settings, &id)?,
        Commands::Delete { id, force } => handle_delete(&mut ledger, &settings, &id, force)?,
        Commands::Summary => handle_summary(&ledger, &settings)?,
        Commands::Export { format, output } => handle_export(&ledger, format, output)?,
        Commands::History { .. } | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &MoneyPaths, settings: &Settings) {
    println!("Money Moves Configuration");
    println!("=========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Theme:           {:?}", settings.theme);
}
