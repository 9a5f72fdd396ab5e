//! Command handlers.

use std::path::{Path, PathBuf};

use motivate::{
    ImageRequest, JsonError, MotivateConfig, MotivateResult, QuoteRequest, QuoteResult, Shell,
    ShellCommand, fallback_quote, image_generator, live_session, quote_generator, random_style,
    render_quote, resolve_theme, save_image_to,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

/// Load configuration from `path`, or from the default locations.
pub fn load_config(path: Option<&Path>) -> MotivateResult<MotivateConfig> {
    match path {
        Some(path) => MotivateConfig::from_file(path),
        None => MotivateConfig::load(),
    }
}

fn print_quote(result: &QuoteResult, json: bool) -> MotivateResult<()> {
    if json {
        let text = serde_json::to_string_pretty(result)
            .map_err(|e| JsonError::new(format!("Failed to serialize quote: {}", e)))?;
        println!("{}", text);
    } else {
        println!("{}", render_quote(result));
        if !result.main_words.is_empty() {
            println!("Key words: {}", result.main_words.join(", "));
        }
    }
    Ok(())
}

/// Generate and print one quote, or the fallback quote if generation fails.
#[instrument(skip(config))]
pub async fn run_quote(
    config: &MotivateConfig,
    theme: Option<String>,
    style: Option<String>,
    concepts: Vec<String>,
    json: bool,
) -> MotivateResult<()> {
    let generator = quote_generator(config)?;

    let request = {
        let mut rng = rand::rng();
        QuoteRequest::new(
            resolve_theme(theme.as_deref(), &concepts, &mut rng),
            style.unwrap_or_else(|| random_style(&mut rng)),
        )
    };

    let result = match generator.generate(&request).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Quote generation failed, using fallback");
            eprintln!("Could not fetch a new quote. Showing a classic instead.");
            fallback_quote()
        }
    };

    print_quote(&result, json)
}

/// Generate an image for `quote` and write it to `out`.
#[instrument(skip(config, quote))]
pub async fn run_visualize(config: &MotivateConfig, quote: String, out: PathBuf) -> MotivateResult<()> {
    let generator = image_generator(config)?;
    let image = generator.generate(&ImageRequest::new(quote)).await?;
    let bytes = save_image_to(&image, &out)?;
    info!(bytes, path = %out.display(), "Image written");
    println!("Saved {} bytes to {}", bytes, out.display());
    Ok(())
}

/// Run the line-oriented shell until `q` or end of input.
///
/// A first quote is fetched before the prompt appears.
pub async fn run_interactive(config: &MotivateConfig) -> MotivateResult<()> {
    let mut shell = Shell::new(live_session(config)?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", shell.execute(&ShellCommand::NextQuote).await);
    println!("Press Enter for a new quote, ? for help.");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                break;
            }
        };

        let Some(command) = ShellCommand::parse(&line) else {
            println!("Unknown command \"{}\". Type ? for help.", line.trim());
            continue;
        };

        println!("{}", shell.execute(&command).await);
        if command == ShellCommand::Quit {
            break;
        }
    }

    Ok(())
}
