use std::sync::Arc;

use gpui::{App, Subscription};

use crate::{ActiveTheme, ColorToken, ColorTokenKind, ThemeConfig, ThemeError, ThemeKind};

/// Extension trait for establishing and reading the app-wide theme.
pub trait ThemeExt {
    /// Establishes the theme, replacing any previous one, and schedules every
    /// window for a redraw.
    fn set_theme(&mut self, kind: ThemeKind, config: impl Into<Arc<ThemeConfig>>);

    /// Switches to another palette of the current config.
    fn set_theme_kind(&mut self, kind: ThemeKind) -> Result<(), ThemeError>;

    /// Whether a theme has been established.
    fn has_theme(&self) -> bool;

    /// Gets the active theme, or [`ThemeError::MissingThemeScope`].
    fn try_get_theme(&self) -> Result<&ActiveTheme, ThemeError>;

    /// Gets the active theme.
    ///
    /// # Panics
    ///
    /// Panics if no theme has been established.
    fn get_theme(&self) -> &ActiveTheme;

    /// Reads a slot from the active palette.
    fn try_theme_color(&self, kind: ColorTokenKind) -> Result<ColorToken, ThemeError>;

    /// Reads a slot from the active palette.
    ///
    /// # Panics
    ///
    /// Panics if no theme has been established.
    fn theme_color(&self, kind: ColorTokenKind) -> ColorToken;

    /// Calls `callback` every time the theme is established or replaced.
    fn observe_theme(&mut self, callback: impl FnMut(&mut App) + 'static) -> Subscription;
}

impl ThemeExt for App {
    fn set_theme(&mut self, kind: ThemeKind, config: impl Into<Arc<ThemeConfig>>) {
        log::debug!("establishing {kind:?} theme");

        self.set_global(ActiveTheme::new(kind, config));
        self.refresh_windows();
    }

    fn set_theme_kind(&mut self, kind: ThemeKind) -> Result<(), ThemeError> {
        let active = self.try_get_theme()?;

        if active.kind == kind {
            return Ok(());
        }

        log::debug!("switching theme from {:?} to {kind:?}", active.kind);

        let next = active.with_kind(kind);
        self.set_global(next);
        self.refresh_windows();

        Ok(())
    }

    fn has_theme(&self) -> bool {
        self.has_global::<ActiveTheme>()
    }

    fn try_get_theme(&self) -> Result<&ActiveTheme, ThemeError> {
        self.try_global::<ActiveTheme>()
            .ok_or(ThemeError::MissingThemeScope)
    }

    fn get_theme(&self) -> &ActiveTheme {
        match self.try_get_theme() {
            Ok(theme) => theme,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_theme_color(&self, kind: ColorTokenKind) -> Result<ColorToken, ThemeError> {
        Ok(kind.get(self.try_get_theme()?.tokens()))
    }

    fn theme_color(&self, kind: ColorTokenKind) -> ColorToken {
        kind.get(self.get_theme().tokens())
    }

    fn observe_theme(&mut self, mut callback: impl FnMut(&mut App) + 'static) -> Subscription {
        self.observe_global::<ActiveTheme>(move |cx| callback(cx))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::ColorSelector;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_reading_without_scope_fails(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(!cx.has_theme());
            assert!(matches!(
                cx.try_get_theme(),
                Err(ThemeError::MissingThemeScope)
            ));
            assert!(matches!(
                cx.try_theme_color(ColorTokenKind::Primary),
                Err(ThemeError::MissingThemeScope)
            ));
        });
    }

    #[gpui::test]
    fn test_switch_without_scope_fails(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(matches!(
                cx.set_theme_kind(ThemeKind::Dark),
                Err(ThemeError::MissingThemeScope)
            ));
            assert!(!cx.has_theme());
        });
    }

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(ThemeKind::Dark, ThemeConfig::builtin().clone());

            let theme = cx.get_theme();
            assert_eq!(theme.kind, ThemeKind::Dark);
            assert_eq!(theme.tokens(), &ThemeConfig::builtin().dark);
        });
    }

    #[gpui::test]
    fn test_theme_color_reads_active_palette(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let config = ThemeConfig::builtin();
            cx.set_theme(ThemeKind::Light, config.clone());

            let primary = cx.try_theme_color(ColorTokenKind::Primary).unwrap();
            assert_eq!(primary.resolve(ColorSelector::Base), config.light.primary.base);
            assert_eq!(primary.resolve(ColorSelector::On), config.light.primary.on);

            let text = cx.theme_color(ColorTokenKind::Text);
            assert_eq!(text, ColorToken::Single(config.light.text));
        });
    }

    #[gpui::test]
    fn test_switch_replaces_palette(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let config = ThemeConfig::builtin();
            cx.set_theme(ThemeKind::Light, config.clone());
            let before = Arc::clone(&cx.get_theme().config);

            cx.set_theme_kind(ThemeKind::Dark).unwrap();

            let theme = cx.get_theme();
            assert_eq!(theme.kind, ThemeKind::Dark);
            assert!(Arc::ptr_eq(&before, &theme.config));
            assert_eq!(
                cx.theme_color(ColorTokenKind::Danger),
                ColorToken::Pair(config.dark.danger)
            );
        });
    }

    #[gpui::test]
    fn test_observers_see_replacement(cx: &mut TestAppContext) {
        let notified = Rc::new(Cell::new(0));

        let _subscription = cx.update(|cx| {
            cx.set_theme(ThemeKind::Light, ThemeConfig::builtin().clone());

            let notified = notified.clone();
            cx.observe_theme(move |_cx| notified.set(notified.get() + 1))
        });

        cx.update(|cx| cx.set_theme_kind(ThemeKind::Dark).unwrap());
        cx.run_until_parked();

        assert!(notified.get() >= 1, "observer should run after a switch");
        cx.update(|cx| assert_eq!(cx.get_theme().kind, ThemeKind::Dark));
    }

    #[gpui::test]
    fn test_switch_to_same_kind_is_noop(cx: &mut TestAppContext) {
        let notified = Rc::new(Cell::new(0));

        let _subscription = cx.update(|cx| {
            cx.set_theme(ThemeKind::Light, ThemeConfig::builtin().clone());

            let notified = notified.clone();
            cx.observe_theme(move |_cx| notified.set(notified.get() + 1))
        });

        cx.update(|cx| cx.set_theme_kind(ThemeKind::Light).unwrap());
        cx.run_until_parked();

        assert_eq!(notified.get(), 0);
    }
}
