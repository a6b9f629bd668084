use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Product,
    Service,
}

/// Physical size of a product, in the configured dimension unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn is_zero(&self) -> bool {
        self.length == 0.0 && self.width == 0.0 && self.height == 0.0
    }
}

/// Line item attached to one tag.
///
/// Older records carry only name, quantity and unit price; every other field
/// is optional and defaults to empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemData {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
}

impl ItemData {
    /// Size of the item, `None` when no dimension was entered
    pub fn dimensions(&self) -> Option<Dimensions> {
        if self.length.is_none() && self.width.is_none() && self.height.is_none() {
            return None;
        }
        Some(Dimensions {
            length: self.length.unwrap_or(0.0),
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        })
    }

    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.length = Some(dims.length);
        self.width = Some(dims.width);
        self.height = Some(dims.height);
    }

    /// Amount billed for this line. Services bill the unit price once.
    pub fn line_total(&self) -> f64 {
        match self.item_type {
            Some(ItemType::Service) => self.unit_price,
            Some(ItemType::Product) | None => self.quantity * self.unit_price,
        }
    }

    /// Copy with negative or non-finite amounts forced to zero
    pub fn normalized(mut self) -> Self {
        self.quantity = non_negative(self.quantity);
        self.unit_price = non_negative(self.unit_price);
        for dim in [&mut self.length, &mut self.width, &mut self.height] {
            if let Some(value) = dim.as_mut() {
                *value = non_negative(*value);
            }
        }
        self
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerce a user-typed amount to a non-negative number; anything unusable is 0.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .map(non_negative)
        .unwrap_or(0.0)
}
