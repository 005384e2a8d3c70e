mod button;
pub use button::*;

mod icon;
pub use icon::*;

mod loading_indicator;
pub use loading_indicator::*;
