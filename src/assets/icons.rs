#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum PaletteIconKind {
    /// Open ring drawn by the loading indicator.
    #[assoc(path = "icons/loader.svg".into())]
    Loader,

    #[assoc(path = "icons/check.svg".into())]
    Check,

    #[assoc(path = "icons/plus.svg".into())]
    Plus,

    #[assoc(path = "icons/arrow_right.svg".into())]
    ArrowRight,

    #[assoc(path = "icons/trash.svg".into())]
    Trash,
}

impl From<PaletteIconKind> for SharedString {
    fn from(kind: PaletteIconKind) -> Self {
        kind.path()
    }
}
