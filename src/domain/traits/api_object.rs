use serde::de::{DeserializeOwned, Unexpected};
use serde_json::Value;

use crate::application::errors::ParseError;

/// Contract shared by objects decoded from Telegram Bot API responses
pub trait ApiObject: DeserializeOwned {
    /// Keys that must be present in the decoded mapping
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build the object from an already decoded JSON value.
    ///
    /// Absence (`None` or JSON `null`) is not an error and yields `Ok(None)`.
    /// Anything other than a mapping fails with [`ParseError::Decode`]. A
    /// mapping lacking one of [`Self::REQUIRED_FIELDS`] fails with
    /// [`ParseError::MissingField`]; any other shape mismatch is reported by
    /// serde as [`ParseError::Decode`].
    fn parse(data: Option<&Value>) -> Result<Option<Self>, ParseError> {
        let data = match data {
            None | Some(Value::Null) => return Ok(None),
            Some(data) => data,
        };

        let map = match data {
            Value::Object(map) => map,
            other => {
                tracing::debug!("API object is not a JSON object: {}", other);
                return Err(ParseError::Decode(serde::de::Error::invalid_type(
                    unexpected(other),
                    &"a JSON object",
                )));
            }
        };

        if let Some(field) = Self::REQUIRED_FIELDS
            .iter()
            .find(|field| !map.contains_key(**field))
        {
            tracing::debug!("API object is missing field `{}`", field);
            return Err(ParseError::MissingField(*field));
        }

        let object = <Self as serde::Deserialize>::deserialize(data)?;
        Ok(Some(object))
    }

    /// Decode a JSON text and hand the value to [`ApiObject::parse`]
    fn from_json(json: &str) -> Result<Option<Self>, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        Self::parse(Some(&value))
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
