//! HTTP Handlers

mod exercise;
mod ping;

pub use exercise::*;
pub use ping::*;
