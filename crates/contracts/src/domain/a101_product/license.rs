use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Licence options offered on the product page. Display-only; the cart keeps
/// the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    #[default]
    Standard,
    Extended,
    Unlimited,
}

impl LicenseTier {
    pub fn all() -> [LicenseTier; 3] {
        [
            LicenseTier::Standard,
            LicenseTier::Extended,
            LicenseTier::Unlimited,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            LicenseTier::Standard => "standard",
            LicenseTier::Extended => "extended",
            LicenseTier::Unlimited => "unlimited",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LicenseTier::Standard => "Standard License",
            LicenseTier::Extended => "Extended License",
            LicenseTier::Unlimited => "Unlimited License",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LicenseTier::Standard => "Use for 1 project",
            LicenseTier::Extended => "Use for multiple projects",
            LicenseTier::Unlimited => "Unlimited use",
        }
    }

    /// Price multiplier over the base product price.
    pub fn multiplier(&self) -> Decimal {
        match self {
            LicenseTier::Standard => Decimal::ONE,
            LicenseTier::Extended => Decimal::new(25, 1),
            LicenseTier::Unlimited => Decimal::from(4),
        }
    }

    pub fn price_for(&self, base: Decimal) -> Decimal {
        base * self.multiplier()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "standard" => Some(LicenseTier::Standard),
            "extended" => Some(LicenseTier::Extended),
            "unlimited" => Some(LicenseTier::Unlimited),
            _ => None,
        }
    }
}
