mod colors;
pub use colors::*;

mod easing;
pub use easing::*;

mod element_id;
pub use element_id::*;

mod transitions;
pub use transitions::*;
