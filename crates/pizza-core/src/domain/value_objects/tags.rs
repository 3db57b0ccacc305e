//! Tags value object and its storage codec.

use crate::{PizzaError, PizzaResult};
use serde::{Deserialize, Serialize};

/// Ordered string labels attached to a dish.
///
/// Storage keeps tags as a serialized JSON array; a missing column value is
/// carried as [`Tags::Absent`] and goes out on the wire as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Tags {
    /// The column held no value.
    #[default]
    Absent,
    /// Decoded labels, in stored order.
    Labels(Vec<String>),
}

impl Tags {
    /// Decodes the raw column bytes.
    ///
    /// `None` (SQL `NULL`) and a JSON `null` literal both yield [`Tags::Absent`].
    /// Anything that is not a JSON array of strings is a [`PizzaError::Codec`].
    pub fn decode(raw: Option<&[u8]>) -> PizzaResult<Self> {
        let Some(bytes) = raw else {
            return Ok(Self::Absent);
        };

        let labels: Option<Vec<String>> = serde_json::from_slice(bytes)
            .map_err(|e| PizzaError::codec(format!("invalid tags column: {e}")))?;

        Ok(labels.into())
    }
}

impl From<Option<Vec<String>>> for Tags {
    fn from(value: Option<Vec<String>>) -> Self {
        value.map_or(Self::Absent, Self::Labels)
    }
}

impl From<Vec<String>> for Tags {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Tags> for Option<Vec<String>> {
    fn from(tags: Tags) -> Self {
        match tags {
            Tags::Absent => None,
            Tags::Labels(labels) => Some(labels),
        }
    }
}
