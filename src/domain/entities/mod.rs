//! Domain entities - Immutable API value objects

pub mod bot_name;

pub use bot_name::BotName;
