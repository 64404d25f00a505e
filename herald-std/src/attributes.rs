//! Building events from named attributes.
//!
//! Any event that is `serde::Deserialize` can be constructed from a mapping of
//! field names to values. Construction validates the schema declared by the
//! event's fields: a missing or mistyped field is a [`ConstructionError`]
//! returned to the caller. Unknown names are ignored unless the event opts
//! into `#[serde(deny_unknown_fields)]`.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Debug, Deserialize, Serialize)]
//! struct UserCreated { name: String }
//!
//! impl Event for UserCreated {}
//!
//! let event = UserCreated::from_value(json!({ "name": "Test" }))?;
//! assert_eq!(event.attribute("name"), Some(json!("Test")));
//! ```

use herald_core::{ConstructionError, Event};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Field name to value mapping.
pub type Attributes = Map<String, Value>;

/// Construction of an event from named attributes.
pub trait FromAttributes: Event + DeserializeOwned + Sized {
    /// Build the event, failing if a declared field is missing or mistyped.
    fn from_attributes(attributes: Attributes) -> Result<Self, ConstructionError> {
        serde_json::from_value(Value::Object(attributes)).map_err(classify::<Self>)
    }

    /// Build the event from a JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, ConstructionError> {
        match value {
            Value::Object(attributes) => Self::from_attributes(attributes),
            _ => Err(ConstructionError::NotAMapping {
                event: std::any::type_name::<Self>(),
            }),
        }
    }
}

impl<E: Event + DeserializeOwned> FromAttributes for E {}

/// Access to an event's fields by name.
pub trait ToAttributes: Event + Serialize + Sized {
    /// All fields of the event.
    fn to_attributes(&self) -> Result<Attributes, ConstructionError> {
        let event = std::any::type_name::<Self>();
        match serde_json::to_value(self) {
            Ok(Value::Object(attributes)) => Ok(attributes),
            Ok(_) => Err(ConstructionError::NotAMapping { event }),
            Err(err) => Err(ConstructionError::InvalidField {
                event,
                message: err.to_string(),
            }),
        }
    }

    /// The value of one field, if the event has it.
    fn attribute(&self, name: &str) -> Option<Value> {
        self.to_attributes().ok()?.remove(name)
    }
}

impl<E: Event + Serialize> ToAttributes for E {}

// Errors from `from_value` carry no position, so their `Display` is the bare
// serde message, e.g. "missing field `age`".
fn classify<E>(err: serde_json::Error) -> ConstructionError {
    let event = std::any::type_name::<E>();
    let message = err.to_string();

    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next());

    match missing {
        Some(field) => ConstructionError::MissingField {
            event,
            field: field.to_string(),
        },
        None => ConstructionError::InvalidField { event, message },
    }
}
