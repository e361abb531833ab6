pub mod animation;
pub mod celebration;
pub mod config;
pub mod constants;
pub mod deck;
pub mod effects;
pub mod error;
pub mod keyboard;
pub mod keyseq;
pub mod navigator;
pub mod page;
pub mod scheduler;
pub mod slide;
pub mod view;

pub use animation::*;
pub use celebration::*;
pub use config::*;
pub use constants::*;
pub use deck::*;
pub use effects::*;
pub use error::*;
pub use keyboard::*;
pub use keyseq::*;
pub use navigator::*;
pub use page::*;
pub use scheduler::*;
pub use slide::*;
pub use view::*;
