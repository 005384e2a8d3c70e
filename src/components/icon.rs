use gpui::{
    IntoElement, Pixels, Radians, RenderOnce, Rgba, SharedString, Styled, Transformation,
    prelude::FluentBuilder, px, svg,
};
use gpui_palette_theme::{ColorSelector, ColorTokenKind, ThemeExt};

/// An SVG icon tinted with a single color.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Pixels,
    rotate: Radians,
    color: Option<Rgba>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: px(14.),
            rotate: Radians(0.),
            color: None,
        }
    }

    /// Sets the width and height of the icon.
    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets a custom color, overriding the theme's text color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Applies a rotation transformation to the icon.
    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = self.color.unwrap_or_else(|| {
            cx.theme_color(ColorTokenKind::Text)
                .resolve(ColorSelector::On)
        });

        svg()
            .path(self.path)
            .size(self.size)
            .min_w(self.size)
            .min_h(self.size)
            .flex_none()
            .text_color(color)
            .when(self.rotate.0 != 0., |this| {
                this.with_transformation(Transformation::rotate(self.rotate))
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, ParentElement, TestAppContext, VisualTestContext, rgb};
    use gpui_palette_theme::{ThemeConfig, ThemeKind};

    #[gpui::test]
    fn test_icon_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/check.svg");
            assert_eq!(icon.path, SharedString::from("icons/check.svg"));
            assert!(icon.color.is_none(), "Icon should start with no color");
            assert_eq!(icon.size, px(14.));
        });
    }

    #[gpui::test]
    fn test_icon_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/plus.svg")
                .size(px(16.))
                .color(rgb(0xffffff))
                .rotate(Radians(1.5));

            assert_eq!(icon.size, px(16.));
            assert_eq!(icon.color, Some(rgb(0xffffff)));
            assert_eq!(icon.rotate.0, 1.5);
        });
    }

    #[gpui::test]
    fn test_icon_renders_with_theme_color(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(ThemeKind::Dark, ThemeConfig::builtin().clone());

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    /// Test view that contains an untinted Icon
    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            gpui::div()
                .size_full()
                .child(Icon::new("icons/check.svg").size(px(24.)))
        }
    }
}
