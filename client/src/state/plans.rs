//! Subscription plan catalog shown on the plan-selection screen.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Monthly,
    Quarterly,
    Biannual,
    Annual,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Plan::Monthly, Plan::Quarterly, Plan::Biannual, Plan::Annual];

    /// Plan opened by the "renew" action on the expired screen.
    pub const RENEWAL: Plan = Plan::Biannual;

    /// Key used in config and `data-plan` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Biannual => "biannual",
            Self::Annual => "annual",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Biannual => "Biannual",
            Self::Annual => "Annual",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Self::Monthly => "R$ 9,90",
            Self::Quarterly => "R$ 26,90",
            Self::Biannual => "R$ 47,90",
            Self::Annual => "R$ 79,90",
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            Self::Monthly => "per month",
            Self::Quarterly => "per 3 months",
            Self::Biannual => "per 6 months",
            Self::Annual => "per year",
        }
    }

    /// Discount badge, if the plan has one.
    pub fn discount(self) -> Option<&'static str> {
        match self {
            Self::Monthly => None,
            Self::Quarterly => Some("10% off"),
            Self::Biannual => Some("20% off"),
            Self::Annual => Some("33% off"),
        }
    }

    pub fn is_popular(self) -> bool {
        self == Self::RENEWAL
    }
}
