use std::sync::{Arc, LazyLock};

use gpui::{Global, Rgba};
use serde::{Deserialize, Serialize};

use crate::{ThemeError, deserializers::de_color};

/// A fill color together with the color that stays legible on top of it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ColorPair {
    /// Surface or fill color.
    #[serde(deserialize_with = "de_color")]
    pub base: Rgba,
    /// Color for content drawn on top of `base`.
    #[serde(deserialize_with = "de_color")]
    pub on: Rgba,
}

impl ColorPair {
    pub const fn new(base: Rgba, on: Rgba) -> Self {
        Self { base, on }
    }
}

/// The full set of semantic color slots every palette defines.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColorTokens {
    /// Main brand color.
    pub primary: ColorPair,
    /// Supporting accent color.
    pub secondary: ColorPair,
    /// Errors and destructive actions.
    pub danger: ColorPair,
    /// Success and confirmation.
    pub success: ColorPair,
    /// Alerts and warnings.
    pub warning: ColorPair,
    /// Informational.
    pub info: ColorPair,

    pub background: ColorPair,
    /// Cards, sheets and modals.
    pub surface: ColorPair,

    /// Default body text.
    #[serde(deserialize_with = "de_color")]
    pub text: Rgba,
    /// Hints, captions and weak text.
    #[serde(deserialize_with = "de_color")]
    pub text_muted: Rgba,
    /// Text on very dark backgrounds.
    #[serde(deserialize_with = "de_color")]
    pub text_inverse: Rgba,

    #[serde(deserialize_with = "de_color")]
    pub border: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub border_strong: Rgba,

    pub disabled: ColorPair,

    /// Modal and sheet backdrops.
    #[serde(deserialize_with = "de_color")]
    pub overlay: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub shadow: Rgba,
}

/// Selects which palette of a [`ThemeConfig`] is active.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Returns the opposite kind.
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

/// A light and a dark palette. Immutable once constructed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

macro_rules! generate_builtin_configs {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLock<ThemeConfig> = LazyLock::new(|| {
                ThemeConfig::from_json(include_str!($path))
                    .unwrap_or_else(|err| panic!("built-in theme config {}: {err}", $path))
            });
        )+
    };
}

generate_builtin_configs!(["../themes/default.json", DEFAULT_THEME_CONFIG]);

impl ThemeConfig {
    /// The palettes bundled with this crate.
    pub fn builtin() -> &'static ThemeConfig {
        &DEFAULT_THEME_CONFIG
    }

    /// Parses a config from its JSON representation.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<ThemeConfig, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn tokens(&self, kind: ThemeKind) -> &ColorTokens {
        match kind {
            ThemeKind::Light => &self.light,
            ThemeKind::Dark => &self.dark,
        }
    }
}

/// The theme state visible to every component: which palette is active and
/// the config it comes from.
///
/// Installed as a gpui global. It is never edited in place; switching themes
/// replaces the whole value.
#[derive(Debug, Clone)]
pub struct ActiveTheme {
    pub kind: ThemeKind,
    pub config: Arc<ThemeConfig>,
}

impl ActiveTheme {
    pub fn new(kind: ThemeKind, config: impl Into<Arc<ThemeConfig>>) -> Self {
        Self {
            kind,
            config: config.into(),
        }
    }

    /// The palette selected by `kind`.
    pub fn tokens(&self) -> &ColorTokens {
        self.config.tokens(self.kind)
    }

    /// A new state sharing this config but selecting another palette.
    pub fn with_kind(&self, kind: ThemeKind) -> Self {
        Self {
            kind,
            config: Arc::clone(&self.config),
        }
    }
}

impl Global for ActiveTheme {}
