//! Telegram Bot API bindings for the bot name methods (`getMyName`, `setMyName`)

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{BotError, ConfigError, ParseError};
pub use domain::entities::BotName;
pub use domain::traits::ApiObject;
