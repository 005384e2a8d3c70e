mod assets;
pub use assets::*;

mod icons;
pub use icons::*;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        mod palette_assets;
        pub use palette_assets::*;
    }
);
