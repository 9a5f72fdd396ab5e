//! In-memory MotivateNow session state.

use std::collections::VecDeque;
use std::path::Path;

use motivate_core::{
    DataUri, ImageRequest, ImageResult, QuoteRequest, QuoteResult, VisualizationEntry,
};
use motivate_error::{
    GenerationError, MotivateResult, SessionError, SessionErrorKind, StorageError,
    StorageErrorKind,
};
use motivate_flows::{ImageGenerator, QuoteGenerator};
use motivate_interface::{ImageProvider, TextProvider};
use tracing::{debug, info, instrument, warn};

/// Quote shown when generation fails.
pub const FALLBACK_QUOTE: &str =
    "The journey of a thousand miles begins with a single step. - Lao Tzu";

/// File name offered for downloaded images.
pub const DEFAULT_DOWNLOAD_NAME: &str = "motivate-now-quote.png";

/// The fallback quote with its emojis and main words.
///
/// # Examples
///
/// ```
/// let fallback = motivate::fallback_quote();
/// assert!(fallback.quote.ends_with("Lao Tzu"));
/// assert_eq!(fallback.emojis, vec!["🚀", "🌟"]);
/// ```
pub fn fallback_quote() -> QuoteResult {
    QuoteResult {
        quote: FALLBACK_QUOTE.to_string(),
        emojis: vec!["🚀".to_string(), "🌟".to_string()],
        main_words: ["journey", "thousand", "single", "step"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Text copied to the clipboard when sharing `quote`.
pub fn share_text_for(quote: &str) -> String {
    format!("\"{}\" - Get your daily inspiration from MotivateNow!", quote)
}

/// What [`Session::next_quote`] produced.
#[derive(Debug, Clone)]
pub enum QuoteOutcome {
    /// A freshly generated quote
    Generated(QuoteResult),
    /// Generation failed; the fallback quote is shown instead
    Fallback {
        /// The fallback quote
        result: QuoteResult,
        /// Why generation failed
        error: GenerationError,
    },
}

impl QuoteOutcome {
    /// The quote now on display.
    pub fn result(&self) -> &QuoteResult {
        match self {
            QuoteOutcome::Generated(result) => result,
            QuoteOutcome::Fallback { result, .. } => result,
        }
    }

    /// True when the fallback quote is on display.
    pub fn is_fallback(&self) -> bool {
        matches!(self, QuoteOutcome::Fallback { .. })
    }
}

/// One user's quotes, images and histories.
///
/// Histories are kept most recent first and are never trimmed.
#[derive(Debug)]
pub struct Session<T, I> {
    quotes: QuoteGenerator<T>,
    images: ImageGenerator<I>,
    current_quote: Option<QuoteResult>,
    current_image: Option<ImageResult>,
    quote_history: VecDeque<QuoteResult>,
    visualization_history: VecDeque<VisualizationEntry>,
}

impl<T: TextProvider, I: ImageProvider> Session<T, I> {
    /// Empty session around two generators.
    pub fn new(quotes: QuoteGenerator<T>, images: ImageGenerator<I>) -> Self {
        Self {
            quotes,
            images,
            current_quote: None,
            current_image: None,
            quote_history: VecDeque::new(),
            visualization_history: VecDeque::new(),
        }
    }

    /// Quote on display.
    pub fn current_quote(&self) -> Option<&QuoteResult> {
        self.current_quote.as_ref()
    }

    /// Image on display.
    pub fn current_image(&self) -> Option<&ImageResult> {
        self.current_image.as_ref()
    }

    /// Generated quotes, most recent first.
    pub fn quote_history(&self) -> &VecDeque<QuoteResult> {
        &self.quote_history
    }

    /// Generated images with their quotes, most recent first.
    pub fn visualization_history(&self) -> &VecDeque<VisualizationEntry> {
        &self.visualization_history
    }

    /// The quote generator.
    pub fn quote_generator(&self) -> &QuoteGenerator<T> {
        &self.quotes
    }

    /// The image generator.
    pub fn image_generator(&self) -> &ImageGenerator<I> {
        &self.images
    }

    /// Replace the current quote with a new one.
    ///
    /// The current image is cleared first. On failure the fallback quote is
    /// shown and history is left alone.
    #[instrument(skip(self))]
    pub async fn next_quote(&mut self, request: &QuoteRequest) -> QuoteOutcome {
        self.current_image = None;

        match self.quotes.generate(request).await {
            Ok(result) => {
                debug!(quote = %result.quote, "New quote");
                self.quote_history.push_front(result.clone());
                self.current_quote = Some(result.clone());
                QuoteOutcome::Generated(result)
            }
            Err(error) => {
                warn!(error = %error, "Showing fallback quote");
                let result = fallback_quote();
                self.current_quote = Some(result.clone());
                QuoteOutcome::Fallback { result, error }
            }
        }
    }

    /// Generate an image for the current quote.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionErrorKind::NothingToVisualize`] when no quote is
    /// on display, or with the generator's error. A failed attempt leaves the
    /// previous image on display.
    #[instrument(skip(self))]
    pub async fn visualize(&mut self) -> MotivateResult<ImageResult> {
        let quote = self
            .current_quote
            .as_ref()
            .map(|q| q.quote.clone())
            .ok_or_else(|| SessionError::new(SessionErrorKind::NothingToVisualize))?;

        let image = self.images.generate(&ImageRequest::new(quote.clone())).await?;

        self.visualization_history
            .push_front(VisualizationEntry::new(quote, &image));
        self.current_image = Some(image.clone());
        Ok(image)
    }

    /// Share text for the current quote.
    pub fn share_text(&self) -> Option<String> {
        self.current_quote
            .as_ref()
            .map(|q| share_text_for(&q.quote))
    }

    /// Write the current image to `path`, creating parent directories.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Fails with [`SessionErrorKind::NothingToDownload`] when no image is
    /// on display, or as [`save_image_to`] does.
    pub fn save_image(&self, path: impl AsRef<Path>) -> MotivateResult<usize> {
        let image = self
            .current_image
            .as_ref()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NothingToDownload))?;
        save_image_to(image, path)
    }
}

/// Decode `image` and write it to `path`, creating parent directories.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Fails if the image reference is not a base64 data URI or if the file
/// cannot be written.
#[instrument(skip(image, path), fields(path = %path.as_ref().display()))]
pub fn save_image_to(image: &ImageResult, path: impl AsRef<Path>) -> MotivateResult<usize> {
    let bytes = DataUri::parse(image.image_url())?.decode()?;

    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }
    std::fs::write(path, &bytes).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(bytes = bytes.len(), "Image saved");
    Ok(bytes.len())
}
