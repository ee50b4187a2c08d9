use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::traits::ApiObject;

/// The bot's name, as returned by `getMyName`
///
/// Telegram may return a different name per language, so one bot can have
/// several of these. The value never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotName {
    name: String,
}

impl BotName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl ApiObject for BotName {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

impl AsRef<str> for BotName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
