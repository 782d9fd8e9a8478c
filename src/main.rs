use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    format_category_list, handle_clear_command, handle_expense_command, handle_income_command,
    handle_summary_command, run_shell, ExpenseCommands, IncomeCommands,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::logging::init_tracing;
use budget_tracker::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Keeps a running income total and a list of categorized expenses \
                  in a JSON file, and prints a summary of where the money went."
)]
struct Cli {
    /// Ledger file to use
    #[arg(short, long, global = true, env = "BUDGET_FILE")]
    file: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// List the built-in expense categories
    Categories,

    /// Show the budget summary
    Summary {
        /// Also export the summary to this text file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reset income to zero and delete all expenses
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Start an interactive session
    #[command(alias = "ui")]
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write a settings file with default values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BudgetPaths::new(cli.file);

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&mut open_store(&paths)?, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut open_store(&paths)?, cmd)?,
        Some(Commands::Categories) => print!("{}", format_category_list()),
        Some(Commands::Summary { output }) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_summary_command(&open_store(&paths)?, &settings, output)?
        }
        Some(Commands::Clear { yes }) => handle_clear_command(
            &mut open_store(&paths)?,
            yes,
            &mut io::stdin().lock(),
            &mut io::stdout(),
        )?,
        Some(Commands::Shell) => {
            let settings = Settings::load_or_create(&paths)?;
            run_shell(
                &mut open_store(&paths)?,
                &settings,
                io::stdin().lock(),
                io::stdout(),
            )?;
        }
        Some(Commands::Config { init }) => show_config(&paths, init)?,
        None => {
            println!("Budget Tracker - income and expense record-keeping");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget shell' to start an interactive session.");
        }
    }

    Ok(())
}

fn open_store(paths: &BudgetPaths) -> Result<LedgerStore> {
    Ok(LedgerStore::open(paths.ledger_file())?)
}

/// Print the resolved configuration. `init` writes default settings,
/// replacing whatever file is there, even one that no longer parses.
fn show_config(paths: &BudgetPaths, init: bool) -> Result<()> {
    let settings = if init {
        let settings = Settings::default();
        settings.save(paths)?;
        println!("Wrote {}", paths.settings_file().display());
        println!();
        settings
    } else {
        Settings::load_or_create(paths)?
    };

    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Ledger file:   {}", paths.ledger_file().display());
    println!("Settings file: {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Export extension: {}", settings.export_extension);
    Ok(())
}
