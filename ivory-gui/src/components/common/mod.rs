//! Common reusable UI components.

mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;
