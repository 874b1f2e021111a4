//! Progression curve engine.
//!
//! Pure XP <-> level arithmetic. The curve is quadratic with two cap
//! thresholds: past the soft cap every level's cost is multiplied, past the
//! hard cap multiplied harder. The caps are a deliberate brake on endgame
//! pace for long-lived servers, not an error in the tuning.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// =============================================================================
// Curve Configuration
// =============================================================================

/// Tunable growth coefficients and cap thresholds.
///
/// # Invariants
///
/// - All three growth coefficients are non-zero
/// - `hard_cap_level > soft_cap_level >= 20`
/// - Both multipliers are finite and `>= 1.0`
///
/// Enforced by [`CurveConfig::new`]; the [`Default`] values satisfy them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    base_xp: u64,
    linear_xp: u64,
    quadratic_xp: u64,
    soft_cap_level: u32,
    soft_cap_multiplier: f64,
    hard_cap_level: u32,
    hard_cap_multiplier: f64,
}

impl CurveConfig {
    /// Create a validated curve configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_xp: u64,
        linear_xp: u64,
        quadratic_xp: u64,
        soft_cap_level: u32,
        soft_cap_multiplier: f64,
        hard_cap_level: u32,
        hard_cap_multiplier: f64,
    ) -> Result<Self, DomainError> {
        if base_xp == 0 || linear_xp == 0 || quadratic_xp == 0 {
            return Err(DomainError::invalid_argument(
                "curve coefficients must be positive",
            ));
        }
        if soft_cap_level < 20 {
            return Err(DomainError::invalid_argument(
                "soft cap level must be >= 20",
            ));
        }
        if hard_cap_level <= soft_cap_level {
            return Err(DomainError::invalid_argument(
                "hard cap level must be above the soft cap level",
            ));
        }
        for (name, mult) in [
            ("soft cap multiplier", soft_cap_multiplier),
            ("hard cap multiplier", hard_cap_multiplier),
        ] {
            if !mult.is_finite() || mult < 1.0 {
                return Err(DomainError::invalid_argument(format!(
                    "{name} must be finite and >= 1.0"
                )));
            }
        }
        Ok(Self {
            base_xp,
            linear_xp,
            quadratic_xp,
            soft_cap_level,
            soft_cap_multiplier,
            hard_cap_level,
            hard_cap_multiplier,
        })
    }

    #[inline]
    pub fn soft_cap_level(&self) -> u32 {
        self.soft_cap_level
    }

    #[inline]
    pub fn hard_cap_level(&self) -> u32 {
        self.hard_cap_level
    }

    #[inline]
    pub fn soft_cap_multiplier(&self) -> f64 {
        self.soft_cap_multiplier
    }

    #[inline]
    pub fn hard_cap_multiplier(&self) -> f64 {
        self.hard_cap_multiplier
    }
}

impl Default for CurveConfig {
    /// Production tuning: first level-up costs 2500 XP, cost climbs
    /// quadratically, ×1.5 from level 25 and ×2.25 from level 50.
    fn default() -> Self {
        Self {
            base_xp: 2500,
            linear_xp: 850,
            quadratic_xp: 45,
            soft_cap_level: 25,
            soft_cap_multiplier: 1.5,
            hard_cap_level: 50,
            hard_cap_multiplier: 2.25,
        }
    }
}

// =============================================================================
// Level Curve
// =============================================================================

/// Pure XP/level mapping over a [`CurveConfig`].
///
/// `required_xp` and `level_for` are deterministic and side-effect free;
/// `level_for` is the inverse of the cumulative thresholds produced by
/// `xp_to_reach`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelCurve {
    config: CurveConfig,
}

impl LevelCurve {
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// XP cost of advancing from `level` to `level + 1`.
    ///
    /// There is no level ceiling: past the hard cap every step simply costs
    /// `hard_cap_multiplier` times the base formula.
    pub fn required_xp(&self, level: u32) -> Result<u64, DomainError> {
        if level == 0 {
            return Err(DomainError::invalid_argument("level must be >= 1"));
        }
        let c = &self.config;
        let steps = u64::from(level - 1);
        let raw = c.base_xp + c.linear_xp * steps + c.quadratic_xp * steps * steps;
        let multiplier = if level >= c.hard_cap_level {
            c.hard_cap_multiplier
        } else if level >= c.soft_cap_level {
            c.soft_cap_multiplier
        } else {
            1.0
        };
        Ok((raw as f64 * multiplier).round() as u64)
    }

    /// Cumulative XP threshold for reaching `level` from scratch.
    ///
    /// `xp_to_reach(1) == 0`: a freshly founded gang is level 1.
    pub fn xp_to_reach(&self, level: u32) -> Result<u64, DomainError> {
        if level == 0 {
            return Err(DomainError::invalid_argument("level must be >= 1"));
        }
        let mut total: u64 = 0;
        for step in 1..level {
            total = total.saturating_add(self.required_xp(step)?);
        }
        Ok(total)
    }

    /// The largest level whose cumulative threshold does not exceed `total_xp`.
    ///
    /// Total XP of 0 yields level 1. Monotonic in `total_xp`.
    pub fn level_for(&self, total_xp: u64) -> u32 {
        let mut level: u32 = 1;
        let mut spent: u64 = 0;
        loop {
            // required_xp only fails for level 0, which this loop never passes
            let step = match self.required_xp(level) {
                Ok(xp) => xp,
                Err(_) => break,
            };
            match spent.checked_add(step) {
                Some(next) if next <= total_xp => {
                    spent = next;
                    level += 1;
                }
                _ => break,
            }
        }
        level
    }
}
