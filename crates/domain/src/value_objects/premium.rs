//! Premium-credit affordability value object.

use serde::{Deserialize, Serialize};

/// Machine-readable code attached to every premium denial.
pub const INSUFFICIENT_PREMIUM_CREDITS: &str = "insufficient_premium_credits";

/// Result of evaluating a premium-priced action against a credit balance.
///
/// A shortfall is an expected business outcome, not a fault: the `Denied`
/// variant carries everything the UI layer needs to present a purchase
/// prompt without further resolution logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PremiumCreditAction {
    /// Balance covers the cost (equal balance is sufficient).
    Allowed { cost: u64 },
    /// Balance falls short; carries the ready-to-use store CTA.
    Denied {
        error_code: String,
        shortfall: u64,
        cta_url: String,
    },
}

impl PremiumCreditAction {
    /// Pure affordability rule for a premium-priced custom job.
    ///
    /// Non-negativity of both amounts is enforced by the unsigned types, so
    /// a malformed request cannot masquerade as a legitimate shortfall.
    pub fn for_custom_job(
        premium_credits: u64,
        custom_job_cost: u64,
        cta_url: impl Into<String>,
    ) -> Self {
        if premium_credits >= custom_job_cost {
            Self::Allowed {
                cost: custom_job_cost,
            }
        } else {
            Self::Denied {
                error_code: INSUFFICIENT_PREMIUM_CREDITS.to_string(),
                shortfall: custom_job_cost - premium_credits,
                cta_url: cta_url.into(),
            }
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortfall_is_denied_with_cta() {
        let action = PremiumCreditAction::for_custom_job(50, 200, "https://store.example/");
        assert_eq!(
            action,
            PremiumCreditAction::Denied {
                error_code: INSUFFICIENT_PREMIUM_CREDITS.to_string(),
                shortfall: 150,
                cta_url: "https://store.example/".to_string(),
            }
        );
    }

    #[test]
    fn test_equal_balance_is_sufficient() {
        let action = PremiumCreditAction::for_custom_job(200, 200, "https://store.example/");
        assert_eq!(action, PremiumCreditAction::Allowed { cost: 200 });
    }

    #[test]
    fn test_surplus_is_allowed() {
        assert!(PremiumCreditAction::for_custom_job(500, 200, "unused").is_allowed());
    }

    #[test]
    fn test_free_job_is_allowed_on_empty_balance() {
        assert!(PremiumCreditAction::for_custom_job(0, 0, "unused").is_allowed());
    }

    #[test]
    fn test_denied_serde_shape() {
        let action = PremiumCreditAction::for_custom_job(0, 10, "https://store.example/");
        let json = serde_json::to_value(&action).expect("serialize");
        assert_eq!(json["result"], "denied");
        assert_eq!(json["error_code"], "insufficient_premium_credits");
        assert_eq!(json["shortfall"], 10);
    }
}
