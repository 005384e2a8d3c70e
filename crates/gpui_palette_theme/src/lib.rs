//! Semantic color tokens and the app-scoped theme context.
//!
//! A [`ThemeConfig`] holds a light and a dark palette of [`ColorTokens`].
//! The palette in use is selected by the [`ActiveTheme`] global, which is
//! installed and read through [`ThemeExt`]. Token values are either a single
//! color or a [`ColorPair`], and [`resolve_color`] picks the concrete color
//! to render.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod resolve;
pub use resolve::*;

mod tokens;
pub use tokens::*;

mod ext;
pub use ext::*;
