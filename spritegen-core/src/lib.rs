pub mod error;
pub mod icon;
pub mod layout;
pub mod sprite;
pub mod export;

pub use error::{Result, SpriteError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
