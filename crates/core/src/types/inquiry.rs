//! Inquiry type tag written with every lead.

use serde::{Deserialize, Serialize};

/// Which form a lead came from.
///
/// Serialized with the wire names stored in the `inquiries.inquiry_type`
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    /// Question about one catalog product (carries a product reference).
    Product,
    /// Request for repackaging under the buyer's own brand.
    WhiteLabel,
    /// Export order request (carries a destination country).
    Export,
    /// Anything sent from the contact page.
    General,
}

impl InquiryType {
    /// All inquiry types, in form order.
    pub const ALL: [Self; 4] = [Self::Product, Self::WhiteLabel, Self::Export, Self::General];

    /// The stored wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::WhiteLabel => "white_label",
            Self::Export => "export",
            Self::General => "general",
        }
    }

    /// Whether a product reference must accompany this inquiry.
    #[must_use]
    pub const fn requires_product(self) -> bool {
        matches!(self, Self::Product)
    }

    /// Whether a destination country must accompany this inquiry.
    #[must_use]
    pub const fn requires_country(self) -> bool {
        matches!(self, Self::Export)
    }
}

impl std::fmt::Display for InquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InquiryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(Self::Product),
            "white_label" => Ok(Self::WhiteLabel),
            "export" => Ok(Self::Export),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid inquiry type: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for kind in InquiryType::ALL {
            assert_eq!(kind.to_string().parse::<InquiryType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&InquiryType::WhiteLabel).unwrap(),
            "\"white_label\""
        );
    }

    #[test]
    fn test_unknown_rejected() {
        assert!("wholesale".parse::<InquiryType>().is_err());
    }

    #[test]
    fn test_required_references() {
        assert!(InquiryType::Product.requires_product());
        assert!(!InquiryType::General.requires_product());
        assert!(InquiryType::Export.requires_country());
        assert!(!InquiryType::WhiteLabel.requires_country());
    }
}
