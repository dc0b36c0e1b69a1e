//! Admission control: blacklist gating, per-identity rate limiting,
//! challenge filtering, reputation accrual/decay, and time-boxed
//! blacklisting.
//!
//! Per-identity state machine:
//! `Normal → (reputation ≥ threshold on accrual) → Blacklisted →
//! (current_time ≥ expiry) → Normal`. The transition out is lazy — entries
//! are never removed, an entry is simply inactive once `expiry <= now` —
//! and an expired identity is eligible for immediate re-blacklisting on a
//! fresh threshold crossing.

use std::collections::BTreeMap;

/// Fraction of rate-limited volume that survives the interactive challenge.
/// Fixed modeling constant, not configuration.
pub const CHALLENGE_PASS_RATIO: f64 = 0.5;

/// Reputation accrued per unit of volume offered above the rate limit.
pub const REPUTATION_ACCRUAL_RATE: f64 = 0.01;

/// Reputation removed from every tracked identity each timestep.
pub const REPUTATION_DECAY: f64 = 0.005;

/// Gating parameters applied on each admission pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionPolicy {
    /// Accepted-before-challenge volume cap per identity per timestep.
    pub per_identity_limit: f64,
    /// Reputation score at which an identity is blacklisted.
    pub blacklist_threshold: f64,
    /// Timesteps a new blacklist entry remains active (must be > 0).
    pub blacklist_duration: u64,
}

/// Aggregate outcome of one admission pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissionOutcome {
    /// Challenge-passed volume that proceeds to capacity shaping.
    pub admitted: f64,
    /// Volume rejected outright by the blacklist gate.
    pub blacklist_dropped: f64,
}

/// Admission-control state machine.
///
/// Owns the reputation scores and blacklist entries for all identities;
/// state carries across timesteps. Exactly one logical writer drives it,
/// one [`process`](AdmissionController::process) call per timestep in
/// increasing time order.
#[derive(Debug, Default)]
pub struct AdmissionController {
    /// Reputation per identity; created on first accrual, never removed.
    reputation: BTreeMap<String, f64>,
    /// Blacklist expiry timestep per identity (exclusive upper bound).
    blacklist: BTreeMap<String, u64>,
}

impl AdmissionController {
    /// Create a controller with no tracked identities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one admission pass over the offered volumes at timestep `now`.
    ///
    /// For each identity, in order:
    /// 1. an active blacklist entry rejects the full offered volume — no
    ///    rate limiting, challenge, or reputation accrual this timestep;
    /// 2. otherwise volume is capped at the per-identity limit;
    /// 3. [`CHALLENGE_PASS_RATIO`] of the capped volume is admitted;
    /// 4. offered volume above the limit accrues reputation proportional to
    ///    the excess.
    ///
    /// Afterwards, identities that accrued this timestep and whose score
    /// reached the threshold are blacklisted until `now +
    /// blacklist_duration` (replacing an expired entry, never stacking a
    /// second active one), and every tracked score decays, floored at zero
    /// — including scores of currently blacklisted identities.
    pub fn process(
        &mut self,
        now: u64,
        offered: &BTreeMap<String, f64>,
        policy: &AdmissionPolicy,
    ) -> AdmissionOutcome {
        let mut admitted = 0.0;
        let mut blacklist_dropped = 0.0;
        let mut accrued: Vec<&String> = Vec::new();

        for (identity, &volume) in offered {
            if self.is_blacklisted(identity, now) {
                blacklist_dropped += volume;
                continue;
            }

            let limited = volume.min(policy.per_identity_limit);
            admitted += limited * CHALLENGE_PASS_RATIO;

            if volume > policy.per_identity_limit {
                let excess = volume - policy.per_identity_limit;
                *self.reputation.entry(identity.clone()).or_insert(0.0) +=
                    excess * REPUTATION_ACCRUAL_RATE;
                accrued.push(identity);
            }
        }

        // Promotion is only evaluated on a fresh threshold crossing: an
        // identity whose score merely stays above the threshold is not
        // re-blacklisted without new accrual.
        for identity in accrued {
            if self.reputation[identity] >= policy.blacklist_threshold
                && !self.is_blacklisted(identity, now)
            {
                self.blacklist
                    .insert(identity.clone(), now + policy.blacklist_duration);
            }
        }

        // Decay runs every timestep for every tracked identity, blacklisted
        // or not.
        for score in self.reputation.values_mut() {
            *score = (*score - REPUTATION_DECAY).max(0.0);
        }

        AdmissionOutcome {
            admitted,
            blacklist_dropped,
        }
    }

    /// Whether `identity` has an active blacklist entry at `now`.
    pub fn is_blacklisted(&self, identity: &str, now: u64) -> bool {
        matches!(self.blacklist.get(identity), Some(&expiry) if expiry > now)
    }

    /// Count of identities with an active blacklist entry at `now`.
    ///
    /// Always computed by filtering on expiry — there is no separately
    /// maintained counter to drift.
    pub fn active_blacklist_count(&self, now: u64) -> usize {
        self.blacklist.values().filter(|&&expiry| expiry > now).count()
    }

    /// Current reputation score for `identity` (0 if never tracked).
    pub fn reputation(&self, identity: &str) -> f64 {
        self.reputation.get(identity).copied().unwrap_or(0.0)
    }

    /// Expiry timestep of `identity`'s most recent entry, if any was ever
    /// created. The entry may already be inactive.
    pub fn blacklist_expiry(&self, identity: &str) -> Option<u64> {
        self.blacklist.get(identity).copied()
    }
}
