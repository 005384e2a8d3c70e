use std::time::Duration;

use gpui::{AbsoluteLength, DefiniteLength, Length, Rems};

use crate::utils::spring;

pub const RESTING_SCALE: f32 = 1.;
pub const PRESSED_SCALE: f32 = 0.95;

/// The press state of a single button instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Resting,
    Pressed,
}

impl PressState {
    /// The scale the button settles at in this state.
    pub fn scale(&self) -> f32 {
        match self {
            PressState::Resting => RESTING_SCALE,
            PressState::Pressed => PRESSED_SCALE,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, PressState::Pressed)
    }

    /// Resting -> Pressed. Returns whether the state changed.
    pub fn press_start(&mut self) -> bool {
        let changed = !self.is_pressed();
        *self = PressState::Pressed;
        changed
    }

    /// Pressed -> Resting. Returns whether the state changed.
    pub fn press_end(&mut self) -> bool {
        let changed = self.is_pressed();
        *self = PressState::Resting;
        changed
    }
}

/// Timing of the press scale transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressAnimation {
    pub duration: Duration,
    /// Spring stiffness; higher settles sooner.
    pub stiffness: f32,
}

impl Default for PressAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            stiffness: 8.,
        }
    }
}

impl PressAnimation {
    pub fn easing(&self) -> impl Fn(f32) -> f32 + 'static {
        spring(self.stiffness)
    }
}

/// Scales a caller-provided length by the current press scale so overridden
/// padding and widths shrink along with the defaults.
pub(super) fn scale_definite_length(length: DefiniteLength, scale: f32) -> DefiniteLength {
    match length {
        DefiniteLength::Absolute(AbsoluteLength::Pixels(pixels)) => {
            DefiniteLength::Absolute(AbsoluteLength::Pixels(pixels * scale))
        }
        DefiniteLength::Absolute(AbsoluteLength::Rems(rems)) => {
            DefiniteLength::Absolute(AbsoluteLength::Rems(Rems(rems.0 * scale)))
        }
        DefiniteLength::Fraction(fraction) => DefiniteLength::Fraction(fraction * scale),
    }
}

/// `Auto` is left alone; an auto-sized button already shrinks with its
/// padding and content.
pub(super) fn scale_length(length: Length, scale: f32) -> Length {
    match length {
        Length::Definite(definite) => Length::Definite(scale_definite_length(definite, scale)),
        Length::Auto => Length::Auto,
    }
}
