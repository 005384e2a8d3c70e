use gpui::Rgba;

/// Fully transparent black.
pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};

pub trait RgbaExt {
    /// Whether the color draws nothing.
    fn is_transparent(&self) -> bool;
}

impl RgbaExt for Rgba {
    fn is_transparent(&self) -> bool {
        self.a == 0.
    }
}
