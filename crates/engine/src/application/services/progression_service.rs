//! Gang progression facade.
//!
//! The single entry point for all progression state. Every mutating
//! operation on a gang runs inside that gang's critical section (the
//! registry's per-gang mutex), re-validates there, persists through the
//! store port, and only then commits in memory. Read-only queries take a
//! short lock and are valid only at the instant they are read; callers
//! doing check-then-act get their check re-run inside the mutation.

use std::sync::Arc;

use gangforge_domain::{
    DoctrineId, DoctrineRegistry, GangId, GangProgression, GangProgressionSnapshot, LevelCurve,
    PremiumCreditAction, ProgressionEvent, UpgradeCatalog, UpgradeId,
};

use crate::application::services::cta_resolver::StoreUrlResolver;
use crate::application::services::error::ServiceError;
use crate::application::services::types::{
    ChargeOutcome, DoctrineOutcome, UpgradePurchaseOutcome, XpGrantOutcome,
};
use crate::infrastructure::ports::{CreditsStorePort, FundsPort, GangStore};
use crate::infrastructure::settings::ProgressionSettings;
use crate::stores::GangRegistry;

/// Per-gang progression service.
///
/// Static registries (catalog, doctrines, curve) are immutable for the
/// process lifetime and read without locking; per-gang state is owned by
/// the [`GangRegistry`] and mutated only here.
pub struct GangProgressionService {
    curve: LevelCurve,
    catalog: Arc<UpgradeCatalog>,
    doctrines: Arc<DoctrineRegistry>,
    registry: GangRegistry,
    store: Arc<dyn GangStore>,
    funds: Arc<dyn FundsPort>,
    cta_resolver: StoreUrlResolver,
    settings: ProgressionSettings,
}

impl GangProgressionService {
    pub fn new(
        curve: LevelCurve,
        catalog: Arc<UpgradeCatalog>,
        doctrines: Arc<DoctrineRegistry>,
        store: Arc<dyn GangStore>,
        funds: Arc<dyn FundsPort>,
        credits_store: Option<Arc<dyn CreditsStorePort>>,
        settings: ProgressionSettings,
    ) -> Self {
        let cta_resolver = StoreUrlResolver::from_settings(&settings, credits_store);
        Self {
            curve,
            catalog,
            doctrines,
            registry: GangRegistry::new(),
            store,
            funds,
            cta_resolver,
            settings,
        }
    }

    /// Service with the builtin catalog, doctrines, and default curve.
    pub fn with_builtin_registries(
        store: Arc<dyn GangStore>,
        funds: Arc<dyn FundsPort>,
        credits_store: Option<Arc<dyn CreditsStorePort>>,
        settings: ProgressionSettings,
    ) -> Self {
        Self::new(
            LevelCurve::default(),
            Arc::new(UpgradeCatalog::builtin()),
            Arc::new(DoctrineRegistry::builtin()),
            store,
            funds,
            credits_store,
            settings,
        )
    }

    #[inline]
    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    #[inline]
    pub fn catalog(&self) -> &UpgradeCatalog {
        &self.catalog
    }

    #[inline]
    pub fn doctrines(&self) -> &DoctrineRegistry {
        &self.doctrines
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Found a gang: fresh state with the configured starting premium
    /// balance, registered and persisted.
    pub async fn found_gang(&self) -> Result<GangId, ServiceError> {
        let state =
            GangProgression::founded(GangId::new(), self.settings.starting_premium_credits);
        let gang_id = state.id();
        let snapshot = state.snapshot(&self.curve);
        self.store.save(&snapshot).await?;
        self.registry.insert(state);
        tracing::info!(gang_id = %gang_id, "gang founded");
        Ok(gang_id)
    }

    /// Bring a persisted gang back under management.
    pub async fn adopt_gang(&self, gang_id: GangId) -> Result<(), ServiceError> {
        let snapshot = self
            .store
            .load(gang_id)
            .await?
            .ok_or(ServiceError::GangNotFound(gang_id))?;
        self.registry.insert(GangProgression::from_snapshot(snapshot));
        tracing::debug!(gang_id = %gang_id, "gang adopted from store");
        Ok(())
    }

    /// Disband a gang: wait out any in-flight mutation, then drop the state
    /// and its persisted record.
    pub async fn disband_gang(&self, gang_id: GangId) -> Result<(), ServiceError> {
        let handle = self
            .registry
            .remove(gang_id)
            .ok_or(ServiceError::GangNotFound(gang_id))?;
        // Serialize with any mutation still holding the lock.
        drop(handle.lock().await);
        self.store.delete(gang_id).await?;
        tracing::info!(gang_id = %gang_id, "gang disbanded");
        Ok(())
    }

    // =========================================================================
    // XP
    // =========================================================================

    /// Grant earned XP to a gang.
    pub async fn grant_xp(
        &self,
        gang_id: GangId,
        amount: u64,
    ) -> Result<XpGrantOutcome, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        let level_before = state.level(&self.curve);
        let mut next = state.clone();
        let total_xp = next.grant_xp(amount);
        let level_after = next.level(&self.curve);

        self.store.save(&next.snapshot(&self.curve)).await?;
        *state = next;

        let event = ProgressionEvent::XpGranted {
            gang_id,
            amount,
            total_xp,
            level_before,
            level_after,
        };
        if level_after > level_before {
            tracing::info!(gang_id = %gang_id, level_before, level_after, "gang leveled up");
        } else {
            tracing::debug!(gang_id = %gang_id, amount, total_xp, "xp granted");
        }
        Ok(XpGrantOutcome {
            total_xp,
            level_before,
            level_after,
            event,
        })
    }

    /// Admin-only: zero out a gang's XP.
    pub async fn reset_xp(&self, gang_id: GangId) -> Result<ProgressionEvent, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        let mut next = state.clone();
        next.reset_xp();
        self.store.save(&next.snapshot(&self.curve)).await?;
        *state = next;

        tracing::info!(gang_id = %gang_id, "gang xp reset");
        Ok(ProgressionEvent::XpReset { gang_id })
    }

    // =========================================================================
    // Upgrades
    // =========================================================================

    /// Purchase an upgrade.
    ///
    /// Validation, the ordinary-funds debit, and the ownership commit all
    /// happen inside the gang's critical section, so the debit and the
    /// purchase act as one atomic step and races can at most reorder whole
    /// purchases.
    pub async fn purchase_upgrade(
        &self,
        gang_id: GangId,
        upgrade_id: &UpgradeId,
    ) -> Result<UpgradePurchaseOutcome, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        // Re-validate under the lock; any earlier can_purchase answer is stale.
        let cost = self
            .catalog
            .can_purchase(&state, &self.curve, upgrade_id)?
            .cost;
        self.funds.debit(gang_id, cost).await?;

        let next = self.catalog.apply_purchase(&state, &self.curve, upgrade_id)?;
        self.store.save(&next.snapshot(&self.curve)).await?;
        *state = next;

        tracing::info!(gang_id = %gang_id, upgrade = %upgrade_id, cost, "upgrade purchased");
        Ok(UpgradePurchaseOutcome {
            upgrade_id: upgrade_id.clone(),
            cost,
            event: ProgressionEvent::UpgradePurchased {
                gang_id,
                upgrade_id: upgrade_id.clone(),
                cost,
            },
        })
    }

    /// Validate a purchase without committing anything.
    ///
    /// The answer is only good for the instant it is computed; the purchase
    /// path re-validates inside the critical section.
    pub async fn can_purchase(
        &self,
        gang_id: GangId,
        upgrade_id: &UpgradeId,
    ) -> Result<(), ServiceError> {
        let handle = self.gang(gang_id)?;
        let state = handle.lock().await;
        self.catalog.can_purchase(&state, &self.curve, upgrade_id)?;
        Ok(())
    }

    // =========================================================================
    // Doctrines
    // =========================================================================

    /// Activate a doctrine; re-selecting the active one is a no-op success.
    pub async fn select_doctrine(
        &self,
        gang_id: GangId,
        doctrine_id: DoctrineId,
    ) -> Result<DoctrineOutcome, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        let selection = self.doctrines.select(&state, doctrine_id);
        if !selection.changed {
            return Ok(DoctrineOutcome {
                doctrine_id,
                changed: false,
                event: None,
            });
        }

        self.store
            .save(&selection.state.snapshot(&self.curve))
            .await?;
        *state = selection.state;

        tracing::info!(gang_id = %gang_id, doctrine = %doctrine_id, "doctrine selected");
        Ok(DoctrineOutcome {
            doctrine_id,
            changed: true,
            event: Some(ProgressionEvent::DoctrineSelected {
                gang_id,
                doctrine_id,
            }),
        })
    }

    /// String-keyed doctrine selection; the parsing boundary where an
    /// unregistered name becomes `UnknownDoctrine`.
    pub async fn select_doctrine_by_name(
        &self,
        gang_id: GangId,
        name: &str,
    ) -> Result<DoctrineOutcome, ServiceError> {
        let doctrine_id: DoctrineId = name.parse().map_err(ServiceError::Domain)?;
        self.select_doctrine(gang_id, doctrine_id).await
    }

    // =========================================================================
    // Premium credits
    // =========================================================================

    /// Evaluate a premium-priced custom job without charging it.
    ///
    /// A denial carries the resolved store CTA so the UI can prompt a
    /// purchase without further lookups.
    pub async fn custom_job_action(
        &self,
        gang_id: GangId,
        custom_job_cost: u64,
    ) -> Result<PremiumCreditAction, ServiceError> {
        let credits = {
            let handle = self.gang(gang_id)?;
            let state = handle.lock().await;
            state.premium_credits()
        };
        if credits >= custom_job_cost {
            return Ok(PremiumCreditAction::Allowed {
                cost: custom_job_cost,
            });
        }
        // Resolve outside the lock: the provider lookup may take up to its
        // timeout and must not stall other operations on this gang.
        let cta_url = self.cta_resolver.resolve().await;
        Ok(PremiumCreditAction::for_custom_job(
            credits,
            custom_job_cost,
            cta_url,
        ))
    }

    /// Charge a premium-priced custom job: affordability is re-evaluated
    /// and debited inside the critical section.
    pub async fn charge_custom_job(
        &self,
        gang_id: GangId,
        custom_job_cost: u64,
    ) -> Result<ChargeOutcome, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        let credits = state.premium_credits();
        if credits < custom_job_cost {
            drop(state);
            let cta_url = self.cta_resolver.resolve().await;
            tracing::debug!(gang_id = %gang_id, credits, cost = custom_job_cost, "custom job denied");
            return Ok(ChargeOutcome {
                action: PremiumCreditAction::for_custom_job(credits, custom_job_cost, cta_url),
                event: None,
            });
        }

        let mut next = state.clone();
        let balance = next.debit_premium(custom_job_cost)?;
        self.store.save(&next.snapshot(&self.curve)).await?;
        *state = next;

        tracing::info!(gang_id = %gang_id, cost = custom_job_cost, balance, "custom job charged");
        Ok(ChargeOutcome {
            action: PremiumCreditAction::Allowed {
                cost: custom_job_cost,
            },
            event: Some(ProgressionEvent::PremiumCreditsDebited {
                gang_id,
                amount: custom_job_cost,
                balance,
            }),
        })
    }

    /// Top up a gang's premium balance (store webhook, admin grant).
    pub async fn grant_premium_credits(
        &self,
        gang_id: GangId,
        amount: u64,
    ) -> Result<ProgressionEvent, ServiceError> {
        let handle = self.gang(gang_id)?;
        let mut state = handle.lock().await;

        let mut next = state.clone();
        let balance = next.credit_premium(amount);
        self.store.save(&next.snapshot(&self.curve)).await?;
        *state = next;

        tracing::info!(gang_id = %gang_id, amount, balance, "premium credits granted");
        Ok(ProgressionEvent::PremiumCreditsGranted {
            gang_id,
            amount,
            balance,
        })
    }

    /// Resolve the store CTA URL through the fallback chain. Never fails.
    pub async fn resolve_store_url(&self) -> String {
        self.cta_resolver.resolve().await
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Point-in-time view of a gang.
    pub async fn snapshot(&self, gang_id: GangId) -> Result<GangProgressionSnapshot, ServiceError> {
        let handle = self.gang(gang_id)?;
        let state = handle.lock().await;
        Ok(state.snapshot(&self.curve))
    }

    /// Current derived level.
    pub async fn level(&self, gang_id: GangId) -> Result<u32, ServiceError> {
        let handle = self.gang(gang_id)?;
        let state = handle.lock().await;
        Ok(state.level(&self.curve))
    }

    fn gang(
        &self,
        gang_id: GangId,
    ) -> Result<Arc<tokio::sync::Mutex<GangProgression>>, ServiceError> {
        self.registry
            .get(gang_id)
            .ok_or(ServiceError::GangNotFound(gang_id))
    }
}
