use std::time::Duration;

use gpui::{
    Animation, AnimationExt, ElementId, IntoElement, Pixels, RenderOnce, Rgba, Styled,
    Transformation, percentage, px, svg,
};
use gpui_palette_theme::{ColorSelector, ColorTokenKind, ThemeExt};

use crate::PaletteIconKind;

/// A spinner shown while an action is in progress.
#[derive(IntoElement)]
pub struct LoadingIndicator {
    id: ElementId,
    size: Pixels,
    color: Option<Rgba>,
    period: Duration,
}

impl LoadingIndicator {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: px(16.),
            color: None,
            period: Duration::from_secs(1),
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets a custom color, overriding the theme's text color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Time taken for one full revolution.
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }
}

impl RenderOnce for LoadingIndicator {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = self.color.unwrap_or_else(|| {
            cx.theme_color(ColorTokenKind::Text)
                .resolve(ColorSelector::On)
        });

        svg()
            .path(PaletteIconKind::Loader.path())
            .size(self.size)
            .flex_none()
            .text_color(color)
            .with_animation(
                self.id,
                Animation::new(self.period).repeat(),
                |this, delta| this.with_transformation(Transformation::rotate(percentage(delta))),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, ParentElement, TestAppContext, VisualTestContext, rgb};
    use gpui_palette_theme::{ThemeConfig, ThemeKind};

    #[gpui::test]
    fn test_loading_indicator_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let indicator = LoadingIndicator::new("spinner");
            assert_eq!(indicator.size, px(16.));
            assert_eq!(indicator.period, Duration::from_secs(1));
            assert!(indicator.color.is_none());
        });
    }

    #[gpui::test]
    fn test_loading_indicator_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let indicator = LoadingIndicator::new("spinner")
                .size(px(20.))
                .color(rgb(0x2563eb))
                .period(Duration::from_millis(600));

            assert_eq!(indicator.size, px(20.));
            assert_eq!(indicator.color, Some(rgb(0x2563eb)));
            assert_eq!(indicator.period, Duration::from_millis(600));
        });
    }

    #[gpui::test]
    fn test_loading_indicator_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(ThemeKind::Light, ThemeConfig::builtin().clone());

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| LoadingIndicatorTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    /// Test view that contains a LoadingIndicator
    struct LoadingIndicatorTestView;

    impl gpui::Render for LoadingIndicatorTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            gpui::div()
                .size_full()
                .child(LoadingIndicator::new("spinner"))
        }
    }
}
