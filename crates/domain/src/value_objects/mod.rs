//! Value objects for the progression domain.

mod doctrine;
mod premium;
mod upgrade;

pub use doctrine::{DoctrineBonuses, DoctrineId};
pub use premium::{PremiumCreditAction, INSUFFICIENT_PREMIUM_CREDITS};
pub use upgrade::{UpgradeCategory, UpgradeId};
