use anyhow::Result;
use clap::{Parser, Subcommand};

use onboard_cli::config::{paths::OnboardPaths, settings::Settings};
use onboard_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "onboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based account sign-up and sign-in front end",
    long_about = "onboard-cli renders a sign-in screen and a two-step sign-up \
                  wizard with client-side validation in the terminal. Account \
                  creation is simulated with a fixed delay; nothing is sent \
                  anywhere and no form data is persisted."
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

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OnboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("onboard-cli Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Email debounce:       {} ms", settings.email_debounce_ms);
            println!("  Create account delay: {} ms", settings.create_account_delay_ms);
            println!("  Redirect delay:       {} ms", settings.redirect_delay_ms);
            println!("  Tick rate:            {} ms", settings.tick_rate_ms);
        }
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
    }

    Ok(())
}
