//! Domain traits - Shared contracts for Telegram API objects

pub mod api_object;

pub use api_object::ApiObject;
