//! MotivateNow CLI binary.
//!
//! This binary provides command-line access to MotivateNow:
//! - Generate a motivational quote
//! - Render a quote as an image
//! - Browse quotes interactively

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_config, run_interactive, run_quote, run_visualize};

    // Load .env before any provider reads the API key
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    motivate::init_telemetry(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Quote {
            theme,
            style,
            concepts,
            json,
        } => run_quote(&config, theme, style, concepts, json).await,

        Commands::Visualize { quote, out } => run_visualize(&config, quote, out).await,

        Commands::Interactive => run_interactive(&config).await,
    };

    motivate::shutdown_telemetry();
    result?;
    Ok(())
}
