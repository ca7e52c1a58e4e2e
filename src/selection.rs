//! Pre-flight validation. Everything here runs before a single box is drawn.

use std::collections::HashMap;

use crate::error::Error;
use crate::model::{Item, Selection};

/// Quantity given to items selected without an explicit count.
pub const DEFAULT_QUANTITY: &str = "1";

/// A selected item with the quantity exactly as the user typed it.
#[derive(Clone, Debug)]
pub struct RawSelection {
    pub item: Item,
    pub quantity: String,
}

impl RawSelection {
    pub fn new(item: Item, quantity: impl Into<String>) -> Self {
        Self {
            item,
            quantity: quantity.into(),
        }
    }
}

/// Select every item with the default quantity.
pub fn select_all(items: &[Item]) -> Vec<RawSelection> {
    items
        .iter()
        .map(|item| RawSelection::new(item.clone(), DEFAULT_QUANTITY))
        .collect()
}

/// Build raw selections in catalog order from per-product quantities.
///
/// An explicit quantity wins over `all`. When a product id is given more than once
/// the last quantity is kept. Any id absent from `items` refuses the whole request.
pub fn apply_quantities(
    items: &[Item],
    all: bool,
    quantities: Vec<(String, String)>,
) -> Result<Vec<RawSelection>, Error> {
    let mut requested: HashMap<String, String> = HashMap::with_capacity(quantities.len());
    for (id, qty) in quantities {
        if let Some(previous) = requested.insert(id.clone(), qty) {
            log::warn!("Quantity for {id} given more than once, ignoring {previous:?}");
        }
    }

    let mut raw = Vec::new();
    for item in items {
        match requested.remove(&item.product_id) {
            Some(qty) => raw.push(RawSelection::new(item.clone(), qty)),
            None if all => raw.push(RawSelection::new(item.clone(), DEFAULT_QUANTITY)),
            None => {}
        }
    }
    if let Some(id) = requested.into_keys().min() {
        return Err(Error::UnknownProduct(id));
    }
    Ok(raw)
}

pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&q| q >= 1)
}

/// Turn raw selections into printable ones, keeping order. Entries with an empty,
/// non-numeric or non-positive quantity are skipped; if none survive the run is refused.
pub fn validate(raw: Vec<RawSelection>) -> Result<Vec<Selection>, Error> {
    let mut selections = Vec::with_capacity(raw.len());
    for entry in raw {
        match parse_quantity(&entry.quantity).and_then(|q| Selection::new(entry.item.clone(), q)) {
            Some(selection) => selections.push(selection),
            None => log::warn!(
                "Skipping {}: quantity {:?} is not a positive number",
                entry.item.product_id,
                entry.quantity
            ),
        }
    }

    if selections.is_empty() {
        return Err(Error::InvalidSelection);
    }
    Ok(selections)
}
