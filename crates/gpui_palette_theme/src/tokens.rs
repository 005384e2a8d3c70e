#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::{ColorToken, ColorTokens};

/// Names a slot of [`ColorTokens`].
///
/// Use `get()` to read the slot's value from a palette.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn get(&self, tokens: &ColorTokens) -> ColorToken)]
#[func(pub const fn name(&self) -> &'static str)]
pub enum ColorTokenKind {
    #[assoc(get = tokens.primary.into())]
    #[assoc(name = "primary")]
    Primary,
    #[assoc(get = tokens.secondary.into())]
    #[assoc(name = "secondary")]
    Secondary,
    #[assoc(get = tokens.danger.into())]
    #[assoc(name = "danger")]
    Danger,
    #[assoc(get = tokens.success.into())]
    #[assoc(name = "success")]
    Success,
    #[assoc(get = tokens.warning.into())]
    #[assoc(name = "warning")]
    Warning,
    #[assoc(get = tokens.info.into())]
    #[assoc(name = "info")]
    Info,
    #[assoc(get = tokens.background.into())]
    #[assoc(name = "background")]
    Background,
    #[assoc(get = tokens.surface.into())]
    #[assoc(name = "surface")]
    Surface,
    #[assoc(get = tokens.text.into())]
    #[assoc(name = "text")]
    Text,
    #[assoc(get = tokens.text_muted.into())]
    #[assoc(name = "text_muted")]
    TextMuted,
    #[assoc(get = tokens.text_inverse.into())]
    #[assoc(name = "text_inverse")]
    TextInverse,
    #[assoc(get = tokens.border.into())]
    #[assoc(name = "border")]
    Border,
    #[assoc(get = tokens.border_strong.into())]
    #[assoc(name = "border_strong")]
    BorderStrong,
    #[assoc(get = tokens.disabled.into())]
    #[assoc(name = "disabled")]
    Disabled,
    #[assoc(get = tokens.overlay.into())]
    #[assoc(name = "overlay")]
    Overlay,
    #[assoc(get = tokens.shadow.into())]
    #[assoc(name = "shadow")]
    Shadow,
}

impl ColorTokenKind {
    pub const ALL: [ColorTokenKind; 16] = [
        ColorTokenKind::Primary,
        ColorTokenKind::Secondary,
        ColorTokenKind::Danger,
        ColorTokenKind::Success,
        ColorTokenKind::Warning,
        ColorTokenKind::Info,
        ColorTokenKind::Background,
        ColorTokenKind::Surface,
        ColorTokenKind::Text,
        ColorTokenKind::TextMuted,
        ColorTokenKind::TextInverse,
        ColorTokenKind::Border,
        ColorTokenKind::BorderStrong,
        ColorTokenKind::Disabled,
        ColorTokenKind::Overlay,
        ColorTokenKind::Shadow,
    ];
}
