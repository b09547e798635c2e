//! Structural field extraction from parsed station pages.
//!
//! Extraction either returns the text of the expected element or fails with
//! `ExportError::Extraction` naming the field. There is no fallback value.

use crate::error::{ExportError, Result};
use crate::utils::constants::HEADER_SELECTOR;
use scraper::{ElementRef, Html, Node, Selector};

/// A field read from a `div[aria-labelledby=...]` element on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledField {
    /// Value of the `aria-labelledby` attribute
    pub label: &'static str,
    /// Column name in the exported record
    pub column: &'static str,
}

/// Labeled fields on the detail page, in export order.
pub const LABELED_FIELDS: [LabeledField; 6] = [
    LabeledField { label: "latitude", column: "latitude" },
    LabeledField { label: "longitude", column: "longitude" },
    LabeledField { label: "elevation", column: "elevation" },
    LabeledField { label: "climateid", column: "climate_id" },
    LabeledField { label: "wmoid", column: "wmo_id" },
    LabeledField { label: "tcid", column: "tc_id" },
];

/// Compile a selector, reporting failure against `field`.
pub fn selector(css: &str, field: &str, url: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ExportError::extraction(field, url))
}

/// Text of the element labeled `label`, trimmed.
pub fn labeled_text(document: &Html, label: &str, url: &str) -> Result<String> {
    let css = format!(r#"div[aria-labelledby="{}"]"#, label);
    let sel = selector(&css, label, url)?;

    document
        .select(&sel)
        .next()
        .map(|element| element_text(&element))
        .ok_or_else(|| ExportError::extraction(label, url))
}

/// Station name and province from the header block.
///
/// The header holds the name as its first child node and the province as the
/// third, separated by a line break.
pub fn header_name_and_province(document: &Html, url: &str) -> Result<(String, String)> {
    let sel = selector(HEADER_SELECTOR, "table-header", url)?;
    let header = document
        .select(&sel)
        .next()
        .ok_or_else(|| ExportError::extraction("table-header", url))?;

    let mut children = header.children().map(|node| match node.value() {
        Node::Text(text) => text.trim().to_string(),
        _ => ElementRef::wrap(node)
            .map(|element| element_text(&element))
            .unwrap_or_default(),
    });
    let name = children
        .next()
        .ok_or_else(|| ExportError::extraction("name", url))?;
    let province = children
        .nth(1)
        .ok_or_else(|| ExportError::extraction("province", url))?;

    Ok((name, province))
}

/// Trimmed text of every descendant.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
