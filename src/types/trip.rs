use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse budget category mapped to a fixed trip amount in rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl BudgetTier {
    /// Look up a tier by its wire label. Unrecognized labels fall back to
    /// `Mid` rather than erroring.
    pub fn from_label(label: &str) -> Self {
        match label {
            "budget" => BudgetTier::Budget,
            "premium" => BudgetTier::Premium,
            "luxury" => BudgetTier::Luxury,
            _ => BudgetTier::Mid,
        }
    }

    /// Fixed tier-to-amount table
    pub fn amount(&self) -> u32 {
        match self {
            BudgetTier::Budget => 10_000,
            BudgetTier::Mid => 25_000,
            BudgetTier::Premium => 55_000,
            BudgetTier::Luxury => 100_000,
        }
    }
}

/// Canonical, validated trip specification produced once per request by
/// normalization and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSpec {
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub duration_days: i64,
    pub budget_tier: BudgetTier,
    pub budget_amount: u32,
    pub passenger_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_table() {
        assert_eq!(BudgetTier::from_label("budget").amount(), 10_000);
        assert_eq!(BudgetTier::from_label("mid").amount(), 25_000);
        assert_eq!(BudgetTier::from_label("premium").amount(), 55_000);
        assert_eq!(BudgetTier::from_label("luxury").amount(), 100_000);
    }

    #[test]
    fn test_unknown_tier_falls_back_to_mid() {
        assert_eq!(BudgetTier::from_label("deluxe"), BudgetTier::Mid);
        assert_eq!(BudgetTier::from_label(""), BudgetTier::Mid);
        assert_eq!(BudgetTier::from_label("LUXURY"), BudgetTier::Mid);
    }
}
