//! Themed gpui components: a pressable [`Button`](components::Button) with
//! variants and sizes, plus the icon and loading indicator it renders.
//!
//! Colors come from the app-scoped theme in [`theme`]. Call [`init`] (or
//! [`theme::ThemeExt::set_theme`]) before opening a window.

pub mod components;

pub use gpui_palette_theme as theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt, TRANSPARENT, spring};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
