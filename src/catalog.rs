//! Item catalog input: JSON parsing and the print-status filter.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Error;
use crate::model::Item;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintFilter {
    #[default]
    All,
    Printed,
    NotPrinted,
}

impl PrintFilter {
    pub fn matches(self, item: &Item) -> bool {
        match self {
            PrintFilter::All => true,
            PrintFilter::Printed => item.flag.as_deref() == Some("P"),
            PrintFilter::NotPrinted => item.flag.as_deref() == Some("NP"),
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    record: Record,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    #[serde(default)]
    ladder_pricing_lists: Vec<Item>,
}

/// Parse catalog JSON: either `{"record": {"ladderPricingLists": [...]}}` or a bare array.
///
/// The shape is decided by the top-level JSON type, never by trial deserialization.
pub fn parse(json: &[u8]) -> Result<Vec<Item>, Error> {
    let value: Value = serde_json::from_slice(json)?;
    if value.is_array() {
        return Ok(serde_json::from_value::<Vec<Item>>(value)?);
    }
    let envelope: Envelope = serde_json::from_value(value)?;
    Ok(envelope.record.ladder_pricing_lists)
}

pub fn load(path: &Path) -> Result<Vec<Item>, Error> {
    let bytes = std::fs::read(path).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())))
    })?;
    let items = parse(&bytes)?;
    log::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Keep the items matching `filter`, preserving catalog order.
pub fn filter(items: Vec<Item>, filter: PrintFilter) -> Vec<Item> {
    items.into_iter().filter(|item| filter.matches(item)).collect()
}

fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// Accept a JSON string or number; null reads as `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(scalar_to_text)
}

/// Like [`optional_text`], but null reads as the empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}
