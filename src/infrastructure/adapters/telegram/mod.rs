//! Telegram adapter
//!
//! Builds Bot API calls for the bot name methods and decodes their
//! responses. Sending the request is left to the caller's HTTP client.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::errors::{BotError, ConfigError, ParseError};
use crate::domain::entities::BotName;
use crate::domain::traits::ApiObject;
use crate::infrastructure::config::Config;

/// Longest name Telegram accepts in `setMyName`
pub const MAX_NAME_LENGTH: usize = 64;

static LANGUAGE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}$").unwrap());

/// Telegram response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<Value>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl ApiResponse {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwrap the envelope into an API object
    pub fn into_object<T: ApiObject>(self) -> Result<Option<T>, BotError> {
        if !self.ok {
            let description = self
                .description
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!("Telegram API returned an error: {}", description);
            return Err(BotError::Api {
                code: self.error_code,
                description,
            });
        }

        Ok(T::parse(self.result.as_ref())?)
    }
}

/// A Bot API method with its parameters
pub trait ApiRequest: Serialize {
    const METHOD: &'static str;

    fn validate(&self) -> Result<(), BotError> {
        Ok(())
    }
}

fn validate_language_code(code: Option<&str>) -> Result<(), BotError> {
    match code {
        Some(code) if !code.is_empty() && !LANGUAGE_CODE.is_match(code) => Err(
            BotError::InvalidRequest(format!(
                "language_code must be a two-letter ISO 639-1 code, got {:?}",
                code
            )),
        ),
        _ => Ok(()),
    }
}

/// Parameters for `getMyName`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMyName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl GetMyName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }
}

impl ApiRequest for GetMyName {
    const METHOD: &'static str = "getMyName";

    fn validate(&self) -> Result<(), BotError> {
        validate_language_code(self.language_code.as_deref())
    }
}

/// Parameters for `setMyName`
///
/// Leaving `name` unset (or empty) removes the dedicated name for the
/// given language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetMyName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SetMyName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }
}

impl ApiRequest for SetMyName {
    const METHOD: &'static str = "setMyName";

    fn validate(&self) -> Result<(), BotError> {
        if let Some(ref name) = self.name {
            let length = name.chars().count();
            if length > MAX_NAME_LENGTH {
                return Err(BotError::InvalidRequest(format!(
                    "name must be at most {} characters, got {}",
                    MAX_NAME_LENGTH, length
                )));
            }
        }
        validate_language_code(self.language_code.as_deref())
    }
}

/// A request ready to be POSTed as JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: String,
}

/// Bot API endpoint bound to one bot token
#[derive(Debug, Clone)]
pub struct TelegramApi {
    token: String,
    base_url: String,
}

impl TelegramApi {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let token = config
            .telegram
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingField("telegram.token".to_string()))?;

        let base = &config.telegram.api_base;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!(
                "telegram.api-base must be an http(s) URL, got {:?}",
                base
            )));
        }

        Ok(Self::new(token, base.as_str()))
    }

    /// Get the API URL for a method
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Same as [`TelegramApi::method_url`] with the token masked, for display
    pub fn redacted_url(&self, method: &str) -> String {
        format!("{}/bot<redacted>/{}", self.base_url, method)
    }

    pub fn prepare<R: ApiRequest>(&self, request: &R) -> Result<PreparedRequest, BotError> {
        request.validate()?;

        let body = serde_json::to_string(request).map_err(ParseError::from)?;
        tracing::debug!("Prepared {} request: {}", R::METHOD, body);

        Ok(PreparedRequest {
            method: R::METHOD,
            url: self.method_url(R::METHOD),
            body,
        })
    }
}

/// Decode the body of a `getMyName` response
pub fn decode_bot_name(body: &str) -> Result<Option<BotName>, BotError> {
    let response = ApiResponse::from_json(body)?;
    let bot_name = response.into_object::<BotName>()?;
    tracing::debug!("Decoded getMyName response: {:?}", bot_name);
    Ok(bot_name)
}
