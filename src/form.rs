use std::collections::BTreeMap;

use crate::api::{FieldKind, FieldName, PredictionRequest};
use crate::error::FormError;

/// Declared bounds of one input, as the markup carries them in `min`/`max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub min: f64,
    pub max: f64,
}
impl FieldSpec {
    pub const fn new(name: FieldName, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }
    pub fn kind(&self) -> FieldKind {
        self.name.kind()
    }
}

pub const DEFAULT_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new(FieldName::Bedrooms, 1.0, 10.0),
    FieldSpec::new(FieldName::Bathrooms, 0.5, 8.0),
    FieldSpec::new(FieldName::SqftLiving, 300.0, 15000.0),
    FieldSpec::new(FieldName::SqftLot, 500.0, 100000.0),
    FieldSpec::new(FieldName::Floors, 1.0, 3.5),
    FieldSpec::new(FieldName::Waterfront, 0.0, 1.0),
    FieldSpec::new(FieldName::Condition, 1.0, 5.0),
];

/// Raw text of each input, keyed by field. An empty form has no entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    values: BTreeMap<FieldName, String>,
}
impl Form {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn reset(&mut self) {
        self.values.clear();
    }
    fn integer(&self, field: FieldName) -> Result<i64, FormError> {
        let value = self.get(field).ok_or(FormError::Missing(field))?;
        parse_int(value).ok_or_else(|| FormError::NotANumber {
            field,
            value: value.to_string(),
        })
    }
    fn decimal(&self, field: FieldName) -> Result<f64, FormError> {
        let value = self.get(field).ok_or(FormError::Missing(field))?;
        parse_float(value).ok_or_else(|| FormError::NotANumber {
            field,
            value: value.to_string(),
        })
    }
    pub fn to_request(&self) -> Result<PredictionRequest, FormError> {
        Ok(PredictionRequest {
            bedrooms: self.integer(FieldName::Bedrooms)?,
            bathrooms: self.decimal(FieldName::Bathrooms)?,
            sqft_living: self.integer(FieldName::SqftLiving)?,
            sqft_lot: self.integer(FieldName::SqftLot)?,
            floors: self.decimal(FieldName::Floors)?,
            waterfront: self.integer(FieldName::Waterfront)?,
            condition: self.integer(FieldName::Condition)?,
        })
    }
}

/// Leading sign and digits of the trimmed text. `"3.7"` is 3. Runs that
/// overflow `i64` are `None`.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Longest leading decimal literal of the trimmed text. `"2.5x"` is 2.5.
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(text.starts_with(['+', '-']));
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    // exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    text[..end].parse().ok()
}
