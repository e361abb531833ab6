pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_card_tilt, wire_ripples, wire_tooltips};
