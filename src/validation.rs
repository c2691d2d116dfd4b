use log::trace;

use crate::form::{parse_float, FieldSpec};

/// Visual state of one input after a range check. Never blocks a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Valid,
    Invalid,
}
impl FieldStyle {
    pub fn border_color(&self) -> &'static str {
        match self {
            Self::Valid => "#e1e5e9",
            Self::Invalid => "#ff6b6b",
        }
    }
    pub fn background_color(&self) -> &'static str {
        match self {
            Self::Valid => "#f8f9fa",
            Self::Invalid => "#ffe6e6",
        }
    }
}

/// Inclusive range check. Text that isn't a number keeps the neutral style.
pub fn validate_input(spec: &FieldSpec, value: &str) -> FieldStyle {
    let style = match parse_float(value) {
        Some(number) if number < spec.min || number > spec.max => FieldStyle::Invalid,
        _ => FieldStyle::Valid,
    };
    trace!("{} = {:?} -> {:?}", spec.name, value, style);
    style
}

#[cfg(test)]
mod test {
    use crate::api::FieldName;

    use super::*;

    const BEDROOMS: FieldSpec = FieldSpec::new(FieldName::Bedrooms, 1.0, 10.0);

    #[test]
    fn outside_range_is_invalid() {
        assert_eq!(validate_input(&BEDROOMS, "0"), FieldStyle::Invalid);
        assert_eq!(validate_input(&BEDROOMS, "11"), FieldStyle::Invalid);
        assert_eq!(validate_input(&BEDROOMS, "-3"), FieldStyle::Invalid);
    }
    #[test]
    fn inside_range_and_bounds_are_valid() {
        for value in ["5", "1", "10", "9.99"] {
            assert_eq!(validate_input(&BEDROOMS, value), FieldStyle::Valid, "{}", value);
        }
    }
    #[test]
    fn non_numeric_keeps_neutral_style() {
        assert_eq!(validate_input(&BEDROOMS, ""), FieldStyle::Valid);
        assert_eq!(validate_input(&BEDROOMS, "many"), FieldStyle::Valid);
    }
    #[test]
    fn styles_carry_the_form_palette() {
        assert_eq!(FieldStyle::Invalid.border_color(), "#ff6b6b");
        assert_eq!(FieldStyle::Invalid.background_color(), "#ffe6e6");
        assert_eq!(FieldStyle::Valid.border_color(), "#e1e5e9");
        assert_eq!(FieldStyle::Valid.background_color(), "#f8f9fa");
    }
}
