use thiserror::Error;

/// Errors produced while establishing or reading the theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme was read before any scope was established with `set_theme`.
    #[error("theme scope missing: call `set_theme` at the composition root before reading the theme")]
    MissingThemeScope,

    /// A theme config could not be parsed.
    #[error("malformed theme config: {0}")]
    Config(#[from] serde_json::Error),
}
