//! HTTP Handlers

mod arithmetic;
mod echo;
mod fallback;
mod health;
mod parity;
mod text;

pub use arithmetic::*;
pub use echo::*;
pub use fallback::*;
pub use health::*;
pub use parity::*;
pub use text::*;
