//! Numeric cell coercion

/// Coerce a raw cell into a number
///
/// Blank or unparsable cells are absent, never zero. A comma is accepted as
/// the decimal separator (`"1,2345"` is `1.2345`). Non-finite results are
/// treated as unparsable.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = trimmed.replacen(',', ".", 1).parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Coerce an optional cell, absent cells stay absent
#[must_use]
pub fn coerce_cell(raw: Option<&str>) -> Option<f64> {
    raw.and_then(coerce_number)
}
