use gpui::Rgba;

use crate::ColorPair;

/// Which half of a [`ColorPair`] to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSelector {
    /// The fill color.
    #[default]
    Base,
    /// The color drawn on top of the fill.
    On,
}

/// The value stored in a color slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorToken {
    Pair(ColorPair),
    Single(Rgba),
}

impl ColorToken {
    /// Picks the concrete color for `selector`. Single colors ignore it.
    pub fn resolve(&self, selector: ColorSelector) -> Rgba {
        match self {
            ColorToken::Pair(pair) => pair.pick(selector),
            ColorToken::Single(color) => *color,
        }
    }
}

impl ColorPair {
    pub fn pick(&self, selector: ColorSelector) -> Rgba {
        match selector {
            ColorSelector::Base => self.base,
            ColorSelector::On => self.on,
        }
    }
}

impl From<ColorPair> for ColorToken {
    fn from(pair: ColorPair) -> Self {
        ColorToken::Pair(pair)
    }
}

impl From<Rgba> for ColorToken {
    fn from(color: Rgba) -> Self {
        ColorToken::Single(color)
    }
}

/// Returns the color to render for `token`.
///
/// Pairs yield the half named by `selector`; single colors are returned
/// unchanged whatever the selector.
pub fn resolve_color(token: impl Into<ColorToken>, selector: ColorSelector) -> Rgba {
    token.into().resolve(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{rgb, rgba};

    const SELECTORS: [ColorSelector; 2] = [ColorSelector::Base, ColorSelector::On];

    #[test]
    fn pair_resolves_to_selected_half() {
        let pair = ColorPair::new(rgb(0x2563eb), rgb(0xffffff));

        assert_eq!(resolve_color(pair, ColorSelector::Base), pair.base);
        assert_eq!(resolve_color(pair, ColorSelector::On), pair.on);
    }

    #[test]
    fn single_color_ignores_selector() {
        let color = rgba(0x0f172a80);

        for selector in SELECTORS {
            assert_eq!(resolve_color(color, selector), color);
        }
    }

    #[test]
    fn selector_defaults_to_base() {
        let pair = ColorPair::new(rgb(0x16a34a), rgb(0xf0fdf4));
        assert_eq!(
            resolve_color(pair, ColorSelector::default()),
            rgb(0x16a34a)
        );
    }

    #[test]
    fn pair_with_identical_halves_is_stable() {
        let color = rgb(0x64748b);
        let pair = ColorPair::new(color, color);

        for selector in SELECTORS {
            assert_eq!(ColorToken::from(pair).resolve(selector), color);
        }
    }
}
