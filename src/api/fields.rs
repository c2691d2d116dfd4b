use serde::{Deserialize, Serialize};

/// The seven inputs of the prediction form, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Bedrooms,
    Bathrooms,
    SqftLiving,
    SqftLot,
    Floors,
    Waterfront,
    Condition,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Integer,
    Decimal,
}
impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Bedrooms,
        FieldName::Bathrooms,
        FieldName::SqftLiving,
        FieldName::SqftLot,
        FieldName::Floors,
        FieldName::Waterfront,
        FieldName::Condition,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::SqftLiving => "sqft_living",
            Self::SqftLot => "sqft_lot",
            Self::Floors => "floors",
            Self::Waterfront => "waterfront",
            Self::Condition => "condition",
        }
    }
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Bathrooms | Self::Floors => FieldKind::Decimal,
            _ => FieldKind::Integer,
        }
    }
}
