#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, px};

/// Padding and text size of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonMetrics {
    pub vertical_padding: Pixels,
    pub horizontal_padding: Pixels,
    /// Label text size, also used for the leading icon.
    pub font_size: Pixels,
}

impl ButtonMetrics {
    fn new(vertical_padding: f32, horizontal_padding: f32, font_size: f32) -> Self {
        Self {
            vertical_padding: px(vertical_padding),
            horizontal_padding: px(horizontal_padding),
            font_size: px(font_size),
        }
    }
}

/// Button size variants that map to fixed metrics.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn metrics(&self) -> ButtonMetrics)]
pub enum ButtonSize {
    #[assoc(metrics = ButtonMetrics::new(6., 12., 14.))]
    Small,
    #[default]
    #[assoc(metrics = ButtonMetrics::new(10., 16., 16.))]
    Normal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_metrics() {
        let metrics = ButtonSize::Small.metrics();
        assert_eq!(metrics.vertical_padding, px(6.));
        assert_eq!(metrics.horizontal_padding, px(12.));
        assert_eq!(metrics.font_size, px(14.));
    }

    #[test]
    fn normal_metrics() {
        let metrics = ButtonSize::Normal.metrics();
        assert_eq!(metrics.vertical_padding, px(10.));
        assert_eq!(metrics.horizontal_padding, px(16.));
        assert_eq!(metrics.font_size, px(16.));
    }

    #[test]
    fn normal_is_the_default() {
        assert_eq!(ButtonSize::default(), ButtonSize::Normal);
    }
}
