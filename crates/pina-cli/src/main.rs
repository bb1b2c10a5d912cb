use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pina")]
#[command(about = "Pina CLI - LPNM pineapple storefront core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with Pine-Bot on stdin/stdout
    Chat,
    /// Print the menu entries offered to a role
    Menu {
        /// Role to inspect (farmer or admin)
        #[arg(long, default_value = "farmer")]
        role: String,
    },
    /// Print the screen a navigation action lands on
    Route {
        /// Current screen token (e.g. "home")
        #[arg(long, default_value = "welcome")]
        from: String,
        /// Action token (e.g. "gotoproduct")
        #[arg(long)]
        action: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => commands::chat::run()?,
        Commands::Menu { role } => commands::menu::run(&role)?,
        Commands::Route { from, action } => commands::route::run(&from, &action)?,
    }

    Ok(())
}
