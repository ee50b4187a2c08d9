//! Domain layer - Telegram API objects with no transport concerns
//! 
//! This layer contains:
//! - Entities: API value objects (BotName)
//! - Traits: The parse contract shared by API objects

pub mod entities;
pub mod traits;
