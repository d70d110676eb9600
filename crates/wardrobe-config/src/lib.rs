//! Configuration system for the wardrobe optimizer.
//!
//! Load solver configuration from TOML or YAML to control termination,
//! phases, acceptors and move selection without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use wardrobe_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     unimproved_seconds_spent_limit = 5
//!
//!     [[phases]]
//!     type = "construction_heuristic"
//!
//!     [[phases]]
//!     type = "local_search"
//!     [phases.acceptor]
//!     type = "late_acceptance"
//!     late_acceptance_size = 400
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.phases.len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use wardrobe_config::SolverConfig;
//!
//! let config = SolverConfig::load("wardrobe.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wardrobe_core::HardSoftScore;


/// Wall-clock limit used when no time limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Default share of swap moves in the move mix.
pub const DEFAULT_SWAP_PROBABILITY: f64 = 0.2;

/// Default simulated annealing starting temperature.
pub const DEFAULT_STARTING_TEMPERATURE: f64 = 100.0;

/// Default late acceptance list size.
pub const DEFAULT_LATE_ACCEPTANCE_SIZE: usize = 400;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Phase configurations. Empty means construction then local search.
    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension
    /// (`.yaml`/`.yml` for YAML, anything else for TOML).
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the wall-clock limit, replacing any configured time limit.
    ///
    /// The limit is kept in whole milliseconds, rounded up and saturating
    /// at `u64::MAX`.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        let mut millis = limit.as_millis();
        if limit.subsec_nanos() % 1_000_000 != 0 {
            millis += 1;
        }
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: None,
            minutes_spent_limit: None,
            millis_spent_limit: Some(u64::try_from(millis).unwrap_or(u64::MAX)),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Enables or disables stopping at the first feasible best solution.
    pub fn with_target_hard_zero(mut self, enabled: bool) -> Self {
        self.termination = Some(TerminationConfig {
            target_hard_zero: Some(enabled),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of steps, counted across all phases.
    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Adds a phase configuration.
    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phases.push(phase);
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use wardrobe_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     seconds_spent_limit = 30
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Configured time limit, or [`DEFAULT_TIME_LIMIT`].
    pub fn effective_time_limit(&self) -> Duration {
        self.time_limit().unwrap_or(DEFAULT_TIME_LIMIT)
    }

    /// Termination settings, defaulted when absent.
    pub fn termination_or_default(&self) -> TerminationConfig {
        self.termination.clone().unwrap_or_default()
    }

    /// Configured phases, or construction followed by local search.
    pub fn effective_phases(&self) -> Vec<PhaseConfig> {
        if self.phases.is_empty() {
            vec![
                PhaseConfig::ConstructionHeuristic(ConstructionHeuristicConfig::default()),
                PhaseConfig::LocalSearch(LocalSearchConfig::default()),
            ]
        } else {
            self.phases.clone()
        }
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            termination.best_score_limit()?;
            if termination.checked_time_limit().transpose()? == Some(Duration::ZERO) {
                return Err(ConfigError::Invalid("time limit must be positive".into()));
            }
        }
        for phase in &self.phases {
            if let PhaseConfig::LocalSearch(local_search) = phase {
                local_search.validate()?;
            }
        }
        Ok(())
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Seeded from the OS; runs differ.
    #[default]
    NonReproducible,

    /// Seeded from `random_seed` (or 0); step-limited runs repeat exactly.
    Reproducible,

    /// Reproducible, and verifies the incremental score after every step.
    FullAssert,
}

impl EnvironmentMode {
    pub fn is_reproducible(self) -> bool {
        !matches!(self, EnvironmentMode::NonReproducible)
    }

    pub fn is_asserted(self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Termination configuration.
///
/// Time limits add up; the run stops at whichever configured condition is
/// met first.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Stop as soon as the best solution is feasible. Defaults to true.
    pub target_hard_zero: Option<bool>,

    /// Target best score to achieve (e.g. "0hard/40soft", or "0hard/*soft").
    pub best_score_limit: Option<String>,

    /// Maximum number of steps, counted across all phases.
    pub step_count_limit: Option<u64>,

    /// Maximum seconds without a new best solution.
    pub unimproved_seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// A sum too large for a `Duration` saturates to `Duration::MAX`;
    /// [`SolverConfig::validate`] rejects it.
    pub fn time_limit(&self) -> Option<Duration> {
        self.checked_time_limit()
            .map(|limit| limit.unwrap_or(Duration::MAX))
    }

    /// Sums the configured limits, failing on overflow.
    fn checked_time_limit(&self) -> Option<Result<Duration, ConfigError>> {
        let configured = self.millis_spent_limit.is_some()
            || self.seconds_spent_limit.is_some()
            || self.minutes_spent_limit.is_some();
        if !configured {
            return None;
        }
        let millis = Duration::from_millis(self.millis_spent_limit.unwrap_or(0));
        let seconds = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0));
        let minutes = self
            .minutes_spent_limit
            .unwrap_or(0)
            .checked_mul(60)
            .map(Duration::from_secs);
        let total = minutes
            .and_then(|minutes| minutes.checked_add(seconds))
            .and_then(|total| total.checked_add(millis));
        Some(total.ok_or_else(|| {
            ConfigError::Invalid(format!(
                "time limit of {:?} minutes, {:?} seconds and {:?} millis is too large",
                self.minutes_spent_limit, self.seconds_spent_limit, self.millis_spent_limit
            ))
        }))
    }

    /// Returns the unimproved time limit as a Duration, if any.
    pub fn unimproved_time_limit(&self) -> Option<Duration> {
        self.unimproved_seconds_spent_limit.map(Duration::from_secs)
    }

    pub fn target_hard_zero(&self) -> bool {
        self.target_hard_zero.unwrap_or(true)
    }

    /// Parses `best_score_limit`, if configured.
    pub fn best_score_limit(&self) -> Result<Option<HardSoftScore>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(|limit| {
                HardSoftScore::parse(limit).map_err(|e| {
                    ConfigError::Invalid(format!("best_score_limit '{}': {}", limit, e.message))
                })
            })
            .transpose()
    }
}

/// Phase configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseConfig {
    /// Greedy single pass over the catalog.
    ConstructionHeuristic(ConstructionHeuristicConfig),

    /// Local search phase.
    LocalSearch(LocalSearchConfig),
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionHeuristicConfig {}

/// Local search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Acceptor configuration. Defaults to simulated annealing.
    pub acceptor: Option<AcceptorConfig>,

    /// Move selector configuration.
    pub move_selector: Option<MoveSelectorConfig>,
}

impl LocalSearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(selector) = &self.move_selector {
            let p = selector.swap_probability();
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!(
                    "swap_probability {} is outside [0, 1]",
                    p
                )));
            }
        }
        match &self.acceptor {
            Some(AcceptorConfig::SimulatedAnnealing(sa)) => {
                let t0 = sa.starting_temperature();
                if !(t0.is_finite() && t0 > 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "starting_temperature {} must be positive",
                        t0
                    )));
                }
            }
            Some(AcceptorConfig::LateAcceptance(la)) if la.late_acceptance_size() == 0 => {
                return Err(ConfigError::Invalid(
                    "late_acceptance_size must be positive".into(),
                ));
            }
            _ => {}
        }
        Ok(())
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Hill climbing (only accept non-worsening moves).
    HillClimbing,

    /// Simulated annealing acceptor.
    SimulatedAnnealing(SimulatedAnnealingConfig),

    /// Late acceptance acceptor.
    LateAcceptance(LateAcceptanceConfig),
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig::default())
    }
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatedAnnealingConfig {
    /// Starting temperature, in score units.
    pub starting_temperature: Option<f64>,
}

impl SimulatedAnnealingConfig {
    pub fn starting_temperature(&self) -> f64 {
        self.starting_temperature
            .unwrap_or(DEFAULT_STARTING_TEMPERATURE)
    }
}

/// Late acceptance configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LateAcceptanceConfig {
    /// Size of late acceptance list.
    pub late_acceptance_size: Option<usize>,
}

impl LateAcceptanceConfig {
    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
            .unwrap_or(DEFAULT_LATE_ACCEPTANCE_SIZE)
    }
}

/// Move selector configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MoveSelectorConfig {
    /// Probability that a drawn move is a swap rather than a toggle.
    pub swap_probability: Option<f64>,
}

impl MoveSelectorConfig {
    pub fn swap_probability(&self) -> f64 {
        self.swap_probability.unwrap_or(DEFAULT_SWAP_PROBABILITY)
    }
}
