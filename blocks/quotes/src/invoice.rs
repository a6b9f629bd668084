use serde::Serialize;
use tagquote_atoms::items::{ItemData, ItemStore, ItemType};
use tagquote_shared::InvoiceConfig;

use crate::types::ImageWithTags;

/// One billed row: a tag that has item data
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub tag_id: String,
    pub tag_index: u32,
    pub image_title: String,
    pub name: String,
    pub dimensions: Option<String>,
    pub notes: Option<String>,
    pub item_type: Option<ItemType>,
    pub unit_price: f64,
    pub quantity: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub lines: Vec<InvoiceLine>,
    pub total_items: usize,
    pub total_quantity: f64,
    pub grand_total: f64,
}

impl Invoice {
    /// Join images, tags and item data into invoice lines. Images come in
    /// display order and tags in index order; tags without item data are
    /// left out.
    pub fn build(images: &[ImageWithTags], items: &ItemStore, config: &InvoiceConfig) -> Self {
        let mut lines = Vec::new();

        for entry in images {
            let image_title = if entry.image.title.is_empty() {
                config.untitled_label.clone()
            } else {
                entry.image.title.clone()
            };

            for tag in &entry.tags {
                let Some(data) = items.get(&tag.tag_id) else {
                    continue;
                };
                lines.push(InvoiceLine {
                    tag_id: tag.tag_id.clone(),
                    tag_index: tag.index,
                    image_title: image_title.clone(),
                    name: display_name(data, tag.index),
                    dimensions: format_dimensions(data, &config.dimension_unit),
                    notes: data.notes.clone().filter(|n| !n.trim().is_empty()),
                    item_type: data.item_type,
                    unit_price: data.unit_price,
                    quantity: data.quantity,
                    total: data.line_total(),
                });
            }
        }

        let total_quantity: f64 = lines.iter().map(|l| l.quantity).sum();
        let grand_total: f64 = lines.iter().map(|l| l.total).sum();

        Self {
            total_items: lines.len(),
            total_quantity,
            grand_total,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn display_name(data: &ItemData, tag_index: u32) -> String {
    if data.name.trim().is_empty() {
        format!("Tag #{} (Unnamed Item)", tag_index)
    } else {
        data.name.clone()
    }
}

/// `"L x W x H unit"`, or `None` when no dimension is set or all are zero
pub fn format_dimensions(data: &ItemData, unit: &str) -> Option<String> {
    let dims = data.dimensions().filter(|d| !d.is_zero())?;
    Some(format!(
        "{} x {} x {} {}",
        dims.length, dims.width, dims.height, unit
    ))
}

/// Currency prefix and the amount rounded to a whole number with grouped
/// thousands, e.g. `Rp 1.234.567`. Non-finite amounts print as 0.
pub fn format_currency(value: f64, config: &InvoiceConfig) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(config.thousands_separator);
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{} {}{}", config.currency, sign, grouped)
}
