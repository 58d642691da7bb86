use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::domain::ApplicationStatus;
use super::intake::ValidatedSubmission;

const DEFAULT_PENDING_SHARE: f64 = 0.7;
const DEFAULT_APPROVAL_SHARE: f64 = 0.5;

/// Assigns the status a new application is stored with.
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, submission: &ValidatedSubmission) -> ApplicationStatus;
}

/// Weights for the placeholder draw: `pending_share` of applications stay pending and
/// `approval_share` of the remainder are approved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub pending_share: f64,
    pub approval_share: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            pending_share: DEFAULT_PENDING_SHARE,
            approval_share: DEFAULT_APPROVAL_SHARE,
        }
    }
}

impl DecisionConfig {
    fn sanitized(self) -> Self {
        Self {
            pending_share: unit_or(self.pending_share, DEFAULT_PENDING_SHARE),
            approval_share: unit_or(self.approval_share, DEFAULT_APPROVAL_SHARE),
        }
    }
}

fn unit_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        value
    } else {
        fallback
    }
}

/// Stand-in for underwriting: ignores the submission and draws a status at random.
pub struct RandomDecisionPolicy {
    config: DecisionConfig,
    rng: Mutex<StdRng>,
}

impl RandomDecisionPolicy {
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(seed: u64, config: DecisionConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DecisionConfig, rng: StdRng) -> Self {
        Self {
            config: config.sanitized(),
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> DecisionConfig {
        self.config
    }

    fn draw(&self) -> ApplicationStatus {
        // A poisoned generator is still a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        if rng.gen_bool(self.config.pending_share) {
            ApplicationStatus::Pending
        } else if rng.gen_bool(self.config.approval_share) {
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Rejected
        }
    }
}

impl Default for RandomDecisionPolicy {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

impl DecisionPolicy for RandomDecisionPolicy {
    fn decide(&self, _submission: &ValidatedSubmission) -> ApplicationStatus {
        self.draw()
    }
}
