pub mod classifier;
pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod transit;

pub use crate::config::Config;
pub use crate::error::{Result, TravelBuddyError};
pub use crate::handlers::{AppState, router};
