//! Themes, styles and concepts offered to the quote generator.

use rand::{Rng, seq::IndexedRandom};

/// Themes picked at random when the user names none.
pub const THEMES: [&str; 20] = [
    "success",
    "perseverance",
    "hard work",
    "discipline",
    "consistency",
    "self-belief",
    "resilience",
    "overcoming adversity",
    "growth mindset",
    "ambition",
    "dreams",
    "goals",
    "focus",
    "determination",
    "courage",
    "innovation",
    "leadership",
    "positivity",
    "gratitude",
    "mindfulness",
];

/// Writing styles, one picked at random per quote.
pub const STYLES: [&str; 14] = [
    "inspirational",
    "concise",
    "profound",
    "poetic",
    "direct",
    "metaphorical",
    "powerful",
    "uplifting",
    "thought-provoking",
    "witty",
    "philosophical",
    "encouraging",
    "visionary",
    "reflective",
];

/// Concepts the user can toggle on to steer the theme.
pub const CONCEPTS: [&str; 6] = [
    "Discipline",
    "Hard Work",
    "Consistency",
    "Success",
    "Failure",
    "Growth",
];

/// Pick the theme for the next quote.
///
/// Precedence: trimmed custom text, then the selected concepts joined with
/// ", ", then a random entry of [`THEMES`].
///
/// # Examples
///
/// ```
/// use motivate::resolve_theme;
///
/// let mut rng = rand::rng();
/// assert_eq!(resolve_theme(Some("  grit  "), &[], &mut rng), "grit");
///
/// let concepts = vec!["Discipline".to_string(), "Growth".to_string()];
/// assert_eq!(resolve_theme(None, &concepts, &mut rng), "Discipline, Growth");
/// ```
pub fn resolve_theme<R: Rng + ?Sized>(
    custom: Option<&str>,
    concepts: &[String],
    rng: &mut R,
) -> String {
    if let Some(custom) = custom.map(str::trim).filter(|c| !c.is_empty()) {
        return custom.to_string();
    }
    if !concepts.is_empty() {
        return concepts.join(", ");
    }
    THEMES.choose(rng).copied().unwrap_or(THEMES[0]).to_string()
}

/// Pick a random entry of [`STYLES`].
pub fn random_style<R: Rng + ?Sized>(rng: &mut R) -> String {
    STYLES.choose(rng).copied().unwrap_or(STYLES[0]).to_string()
}

/// The user's theme preferences between quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    custom: Option<String>,
    concepts: Vec<String>,
}

impl ThemeSelection {
    /// Set or clear the custom theme text.
    pub fn set_custom(&mut self, custom: Option<String>) {
        self.custom = custom.filter(|c| !c.trim().is_empty());
    }

    /// Custom theme text, if any.
    pub fn custom(&self) -> Option<&str> {
        self.custom.as_deref()
    }

    /// Selected concepts, in selection order.
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    /// Toggle a concept from [`CONCEPTS`], matched case-insensitively.
    ///
    /// Returns the canonical name and whether it is now selected, or `None`
    /// if `name` is not a known concept.
    pub fn toggle_concept(&mut self, name: &str) -> Option<(&'static str, bool)> {
        let canonical = CONCEPTS
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(name.trim()))?;

        if let Some(index) = self.concepts.iter().position(|c| c == canonical) {
            self.concepts.remove(index);
            Some((canonical, false))
        } else {
            self.concepts.push(canonical.to_string());
            Some((canonical, true))
        }
    }

    /// Resolve the theme for the next quote.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        resolve_theme(self.custom(), &self.concepts, rng)
    }
}
