use rd_core::Outcome;

use metrics::counter;

/// Metrics collector for account operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "rd_service",
        }
    }

    /// Record a new identity
    pub fn registration_succeeded(&self) {
        counter!(format!("{}.registrations.succeeded", self.prefix)).increment(1);
    }

    /// Record a refused registration by error code
    pub fn registration_rejected(&self, code: &str) {
        counter!(format!("{}.registrations.rejected", self.prefix)).increment(1);
        counter!(format!("{}.registrations.rejected.{}", self.prefix, code)).increment(1);
    }

    pub fn sign_in_succeeded(&self) {
        counter!(format!("{}.sign_ins.succeeded", self.prefix)).increment(1);
    }

    pub fn sign_in_rejected(&self) {
        counter!(format!("{}.sign_ins.rejected", self.prefix)).increment(1);
    }

    /// Record first-time creation of an account record
    pub fn account_initialized(&self) {
        counter!(format!("{}.accounts.initialized", self.prefix)).increment(1);
    }

    /// Record one completed round
    pub fn round_recorded(&self, outcome: Outcome) {
        counter!(format!("{}.rounds.recorded", self.prefix)).increment(1);
        counter!(format!("{}.rounds.{}", self.prefix, outcome.as_str())).increment(1);
    }

    /// Record a failed store write or read
    pub fn persistence_failed(&self, operation: &str) {
        counter!(format!("{}.errors.persistence", self.prefix)).increment(1);
        counter!(format!(
            "{}.errors.persistence.{}",
            self.prefix, operation
        ))
        .increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
