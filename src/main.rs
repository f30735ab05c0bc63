use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use spendwise::cli::{
    handle_expense_command, handle_export_command, handle_income_command,
    handle_project_command, handle_savings_command, handle_subscription_command,
    handle_summary_command, ExportArgs, IncomeCommands, LineItemCommands, ProjectArgs,
    SavingsArgs,
};
use spendwise::config::{paths::SpendwisePaths, settings::Settings};
use spendwise::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal budgeting calculator",
    long_about = "Spendwise works out how much you can spend each month, week and day \
                  after expenses, subscriptions and savings, and projects how your \
                  savings could grow."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Paycheck, income mode, income samples and extra income
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Monthly expenses
    #[command(subcommand, alias = "exp")]
    Expense(LineItemCommands),

    /// Monthly subscriptions
    #[command(subcommand, alias = "sub")]
    Subscription(LineItemCommands),

    /// Set or show the savings goal
    Savings(SavingsArgs),

    /// Show spending money per month, week and day
    Summary,

    /// Project savings growth
    Project(ProjectArgs),

    /// Export inputs, summary and projection
    Export(ExportArgs),

    /// Delete all budget data
    Reset {
        /// Skip the confirmation notice
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SpendwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let Some(command) = cli.command else {
        println!("Spendwise - personal budgeting calculator");
        println!();
        println!("Run 'spendwise --help' for usage information.");
        println!("Run 'spendwise summary' to see your budget.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("Spendwise Configuration");
        println!("=======================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol:        {}", settings.currency_symbol);
        println!("  Default return profile: {}", settings.default_return_profile);
        println!("  Default horizon:        {} years", settings.default_horizon_years);
        return Ok(());
    }

    let mut store = open_file_store(&paths)?;

    match command {
        Commands::Income(cmd) => handle_income_command(&mut store, &settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&mut store, &settings, cmd)?,
        Commands::Subscription(cmd) => handle_subscription_command(&mut store, &settings, cmd)?,
        Commands::Savings(args) => handle_savings_command(&mut store, &settings, args)?,
        Commands::Summary => handle_summary_command(&store, &settings)?,
        Commands::Project(args) => handle_project_command(&store, &settings, args)?,
        Commands::Export(args) => handle_export_command(&store, &settings, args)?,
        Commands::Reset { yes } => {
            if yes {
                store.reset();
                println!("All budget data has been deleted.");
            } else {
                println!("This deletes every income, expense, subscription and savings goal.");
                println!("Run 'spendwise reset --yes' to confirm.");
            }
        }
        Commands::Config => {} // handled above
    }

    Ok(())
}
