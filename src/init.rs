use gpui::App;
use gpui_palette_theme::{ThemeConfig, ThemeExt, ThemeKind};

/// Installs the bundled palette as the active theme.
pub fn init(cx: &mut App, kind: ThemeKind) {
    log::info!("initializing gpui_palette with the {kind:?} palette");
    cx.set_theme(kind, ThemeConfig::builtin().clone());
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_installs_builtin_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(!cx.has_theme());

            init(cx, ThemeKind::Dark);

            let theme = cx.get_theme();
            assert_eq!(theme.kind, ThemeKind::Dark);
            assert_eq!(theme.tokens(), &ThemeConfig::builtin().dark);
        });
    }
}
