//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Telegram Bot API request building and response decoding

pub mod config;
pub mod adapters;
