//! Engine configuration and logging setup.
//!
//! Two knobs exist: a debug-logging toggle and the branch policy. Both can
//! be read from the environment or set through [`EngineBuilder`].
//!
//! # Example
//!
//! ```rust
//! use winnebago::config::{BranchPolicy, EngineBuilder};
//!
//! let engine = EngineBuilder::new()
//!     .debug_logging(true)
//!     .branch_policy(BranchPolicy::Strict)
//!     .build();
//!
//! assert!(engine.config().debug_logging);
//! ```

use crate::dialogue::DialogueEngine;
use serde::{Deserialize, Serialize};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEBUG_ENV: &str = "WINNEBAGO_DEBUG";
pub const BRANCH_POLICY_ENV: &str = "WINNEBAGO_BRANCH_POLICY";

/// How the engine treats a place or activity chosen outside its state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchPolicy {
    /// Accept it and switch to the owning state.
    #[default]
    Permissive,
    /// Refuse it and ask the current question again.
    Strict,
}

impl BranchPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "permissive" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Log full request and response payloads.
    pub debug_logging: bool,
    pub branch_policy: BranchPolicy,
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug_logging = lookup(DEBUG_ENV).is_some_and(|value| {
            matches!(
                value.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });

        let branch_policy = match lookup(BRANCH_POLICY_ENV) {
            None => BranchPolicy::default(),
            Some(value) => BranchPolicy::parse(&value).unwrap_or_else(|| {
                tracing::warn!(%value, "unknown branch policy, using permissive");
                BranchPolicy::default()
            }),
        };

        Self {
            debug_logging,
            branch_policy,
        }
    }

    /// Default log filter directive for this configuration.
    pub fn log_directive(&self) -> &'static str {
        if self.debug_logging {
            "winnebago=debug"
        } else {
            "winnebago=info"
        }
    }
}

/// Builder for a configured [`DialogueEngine`].
#[derive(Clone, Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.config.debug_logging = enabled;
        self
    }

    pub fn branch_policy(mut self, policy: BranchPolicy) -> Self {
        self.config.branch_policy = policy;
        self
    }

    pub fn build(self) -> DialogueEngine {
        DialogueEngine::new(self.config)
    }
}

/// Install a global `tracing` subscriber. `RUST_LOG` wins over the
/// configuration. Fails if a subscriber is already installed.
pub fn init_logging(config: &EngineConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
