//! Line-oriented interactive shell over a [`Session`].

use std::path::PathBuf;

use motivate_core::{QuoteRequest, QuoteResult};
use motivate_interface::{ImageProvider, TextProvider};
use tracing::debug;

use crate::{DEFAULT_DOWNLOAD_NAME, QuoteOutcome, Session, ThemeSelection, random_style};

/// Shell usage, printed by `?`.
pub const HELP: &str = "\
Commands:
  <Enter>        new quote
  v              visualize the current quote
  s              print share text
  d [path]       download the current image
  h              quote history
  i              visualization history
  t [text]       set (or clear) a custom theme
  c <concept>    toggle a concept
  ?              this help
  q              quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Fetch a new quote
    NextQuote,
    /// Generate an image for the current quote
    Visualize,
    /// Print share text
    Share,
    /// Save the current image
    Download(Option<PathBuf>),
    /// Print quote history
    QuoteHistory,
    /// Print visualization history
    VisualizationHistory,
    /// Set or clear the custom theme
    SetTheme(Option<String>),
    /// Toggle a concept
    ToggleConcept(String),
    /// Print usage
    Help,
    /// Leave the shell
    Quit,
}

impl ShellCommand {
    /// Parse a line of input, or `None` if it is not a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use motivate::ShellCommand;
    ///
    /// assert_eq!(ShellCommand::parse(""), Some(ShellCommand::NextQuote));
    /// assert_eq!(
    ///     ShellCommand::parse("t  hard times "),
    ///     Some(ShellCommand::SetTheme(Some("hard times".into())))
    /// );
    /// assert_eq!(ShellCommand::parse("x"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        let command = match head {
            "" => Self::NextQuote,
            "v" => Self::Visualize,
            "s" => Self::Share,
            "d" => Self::Download(argument.map(PathBuf::from)),
            "h" => Self::QuoteHistory,
            "i" => Self::VisualizationHistory,
            "t" => Self::SetTheme(argument),
            "c" => Self::ToggleConcept(argument?),
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Render a quote with its emojis.
pub fn render_quote(result: &QuoteResult) -> String {
    if result.emojis.is_empty() {
        format!("\"{}\"", result.quote)
    } else {
        format!("\"{}\"  {}", result.quote, result.emojis.join(" "))
    }
}

/// A session plus the user's theme preferences.
#[derive(Debug)]
pub struct Shell<T, I> {
    session: Session<T, I>,
    selection: ThemeSelection,
}

impl<T: TextProvider, I: ImageProvider> Shell<T, I> {
    /// Shell with no theme preferences.
    pub fn new(session: Session<T, I>) -> Self {
        Self {
            session,
            selection: ThemeSelection::default(),
        }
    }

    /// The wrapped session.
    pub fn session(&self) -> &Session<T, I> {
        &self.session
    }

    /// Current theme preferences.
    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    /// The next quote request, with theme and style resolved.
    pub fn next_request(&self) -> QuoteRequest {
        let mut rng = rand::rng();
        QuoteRequest::new(self.selection.resolve(&mut rng), random_style(&mut rng))
    }

    /// Run one command and return the text to show.
    pub async fn execute(&mut self, command: &ShellCommand) -> String {
        debug!(?command, "Shell command");
        match command {
            ShellCommand::NextQuote => {
                let request = self.next_request();
                match self.session.next_quote(&request).await {
                    QuoteOutcome::Generated(result) => render_quote(&result),
                    QuoteOutcome::Fallback { result, error } => format!(
                        "Could not fetch a new quote after {} attempt(s). Please try again later.\n{}",
                        error.attempts(),
                        render_quote(&result)
                    ),
                }
            }
            ShellCommand::Visualize => match self.session.visualize().await {
                Ok(image) => format!(
                    "Image ready ({} characters). Use `d` to download it.",
                    image.image_url().len()
                ),
                Err(e) => format!("Could not generate an image: {}", e),
            },
            ShellCommand::Share => self
                .session
                .share_text()
                .unwrap_or_else(|| "No quote to share yet.".to_string()),
            ShellCommand::Download(path) => {
                let path = path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_NAME));
                match self.session.save_image(&path) {
                    Ok(bytes) => format!("Saved {} bytes to {}", bytes, path.display()),
                    Err(e) => format!("Could not save the image: {}", e),
                }
            }
            ShellCommand::QuoteHistory => {
                let history = self.session.quote_history();
                if history.is_empty() {
                    "No quotes yet.".to_string()
                } else {
                    history
                        .iter()
                        .enumerate()
                        .map(|(i, q)| format!("{:>3}. {}", i + 1, render_quote(q)))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            ShellCommand::VisualizationHistory => {
                let history = self.session.visualization_history();
                if history.is_empty() {
                    "No images yet.".to_string()
                } else {
                    history
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            format!(
                                "{:>3}. \"{}\" ({} characters)",
                                i + 1,
                                entry.quote(),
                                entry.image_url().len()
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            ShellCommand::SetTheme(theme) => {
                self.selection.set_custom(theme.clone());
                match self.selection.custom() {
                    Some(theme) => format!("Theme set to \"{}\".", theme),
                    None => "Custom theme cleared.".to_string(),
                }
            }
            ShellCommand::ToggleConcept(name) => match self.selection.toggle_concept(name) {
                Some((concept, true)) => format!("Concept {} on.", concept),
                Some((concept, false)) => format!("Concept {} off.", concept),
                None => format!(
                    "Unknown concept \"{}\". Choose from: {}",
                    name,
                    crate::CONCEPTS.join(", ")
                ),
            },
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => "Goodbye.".to_string(),
        }
    }
}
