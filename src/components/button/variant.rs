use gpui::{App, Rgba};
use gpui_palette_theme::{
    ColorSelector, ColorToken, ColorTokenKind, ColorTokens, ThemeError, ThemeExt,
};

use crate::utils::TRANSPARENT;

/// The colors a button paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub background: Rgba,
    /// Label, icon and loading indicator tint.
    pub foreground: Rgba,
    /// 1px border color, if any.
    pub border: Option<Rgba>,
}

/// The semantic role of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Success,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Success,
    ];

    /// The slot this variant fills with, or `None` for transparent variants.
    pub fn token(&self) -> Option<ColorTokenKind> {
        match self {
            ButtonVariant::Primary => Some(ColorTokenKind::Primary),
            ButtonVariant::Secondary => Some(ColorTokenKind::Secondary),
            ButtonVariant::Danger => Some(ColorTokenKind::Danger),
            ButtonVariant::Success => Some(ColorTokenKind::Success),
            ButtonVariant::Outline | ButtonVariant::Ghost => None,
        }
    }

    /// Computes the colors from a token lookup.
    ///
    /// Filled variants paint with their own pair. Outline and ghost are
    /// transparent and take the body text color; only outline gets a border.
    pub fn colors_with(&self, lookup: impl Fn(ColorTokenKind) -> ColorToken) -> ButtonColors {
        let (background, foreground) = match self.token() {
            Some(kind) => {
                let token = lookup(kind);
                (
                    token.resolve(ColorSelector::Base),
                    token.resolve(ColorSelector::On),
                )
            }
            None => (
                TRANSPARENT,
                lookup(ColorTokenKind::Text).resolve(ColorSelector::On),
            ),
        };

        let border = matches!(self, ButtonVariant::Outline)
            .then(|| lookup(ColorTokenKind::Border).resolve(ColorSelector::Base));

        ButtonColors {
            background,
            foreground,
            border,
        }
    }

    /// Computes the colors from a palette.
    pub fn colors(&self, tokens: &ColorTokens) -> ButtonColors {
        self.colors_with(|kind| kind.get(tokens))
    }

    /// Computes the colors from the active theme.
    pub fn try_resolve(&self, cx: &App) -> Result<ButtonColors, ThemeError> {
        Ok(self.colors(cx.try_get_theme()?.tokens()))
    }

    /// Computes the colors from the active theme.
    ///
    /// # Panics
    ///
    /// Panics if no theme has been established.
    pub fn resolve(&self, cx: &App) -> ButtonColors {
        self.colors_with(|kind| cx.theme_color(kind))
    }
}

// ButtonVariantEither is an internal wrapper type for
// allowing both `ButtonVariant` and `ButtonColors`.
// It does not need to be public.
pub(super) enum ButtonVariantEither {
    Left(ButtonVariant),
    Right(ButtonColors),
}

impl ButtonVariantEither {
    pub(super) fn into_colors(self, cx: &App) -> ButtonColors {
        match self {
            ButtonVariantEither::Left(left) => left.resolve(cx),
            ButtonVariantEither::Right(right) => right,
        }
    }
}

impl From<ButtonVariant> for ButtonVariantEither {
    fn from(value: ButtonVariant) -> Self {
        ButtonVariantEither::Left(value)
    }
}

impl From<ButtonColors> for ButtonVariantEither {
    fn from(value: ButtonColors) -> Self {
        ButtonVariantEither::Right(value)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::TestAppContext;
    use gpui_palette_theme::{ThemeConfig, ThemeKind};

    #[gpui::test]
    fn test_resolve_without_theme_fails(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(matches!(
                ButtonVariant::Primary.try_resolve(cx),
                Err(ThemeError::MissingThemeScope)
            ));
        });
    }

    #[gpui::test]
    fn test_resolve_follows_theme_switch(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let config = ThemeConfig::builtin();
            cx.set_theme(ThemeKind::Light, config.clone());

            let light = ButtonVariant::Danger.resolve(cx);
            assert_eq!(light.background, config.light.danger.base);

            cx.set_theme_kind(ThemeKind::Dark).unwrap();

            let dark = ButtonVariant::Danger.try_resolve(cx).unwrap();
            assert_eq!(dark.background, config.dark.danger.base);
            assert_eq!(dark.foreground, config.dark.danger.on);
        });
    }

    #[gpui::test]
    fn test_custom_colors_bypass_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let colors = ButtonColors {
                background: gpui::rgb(0x000000),
                foreground: gpui::rgb(0xffffff),
                border: None,
            };

            assert_eq!(ButtonVariantEither::from(colors).into_colors(cx), colors);
        });
    }
}
