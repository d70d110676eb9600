//! HardSoftScore - Two-level score with a hard violation and a soft reward

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use thiserror::Error;

/// A score with a hard violation total and a soft reward total.
///
/// The hard violation is never negative; a selection is feasible when it is
/// zero. The soft reward is maximized among selections with equal violation.
///
/// When comparing scores:
/// 1. Lower hard violation wins
/// 2. Higher soft reward breaks ties
///
/// # Examples
///
/// ```
/// use wardrobe_core::HardSoftScore;
///
/// let broken = HardSoftScore::of(1000, 40);  // one missing category
/// let poor = HardSoftScore::of(0, 3);        // feasible but few rewards
///
/// // Feasible selections are always better than infeasible ones
/// assert!(poor > broken);
///
/// let better = HardSoftScore::of(0, 40);
/// assert!(better > poor);
/// assert_eq!(better.to_string(), "0hard/40soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    hard_violation: i64,
    soft_reward: i64,
}

impl HardSoftScore {
    /// The zero score: feasible, no rewards.
    pub const ZERO: HardSoftScore = HardSoftScore {
        hard_violation: 0,
        soft_reward: 0,
    };

    /// Creates a new HardSoftScore.
    #[inline]
    pub const fn of(hard_violation: i64, soft_reward: i64) -> Self {
        debug_assert!(hard_violation >= 0, "hard violation must not be negative");
        HardSoftScore {
            hard_violation,
            soft_reward,
        }
    }

    /// Creates a score with only a hard violation.
    #[inline]
    pub const fn of_hard(hard_violation: i64) -> Self {
        HardSoftScore::of(hard_violation, 0)
    }

    /// Creates a score with only a soft reward.
    #[inline]
    pub const fn of_soft(soft_reward: i64) -> Self {
        HardSoftScore::of(0, soft_reward)
    }

    #[inline]
    pub const fn hard_violation(&self) -> i64 {
        self.hard_violation
    }

    #[inline]
    pub const fn soft_reward(&self) -> i64 {
        self.soft_reward
    }

    /// Returns true if no hard constraint is violated.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard_violation == 0
    }

    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    #[inline]
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Parses the display form, e.g. `0hard/40soft` or `-1000hard/12soft`.
    ///
    /// The soft part may be `*soft`, which matches any soft reward. Such a
    /// score is only meaningful as a lower bound for termination.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (hard_part, soft_part) = s.split_once('/').ok_or_else(|| {
            ScoreParseError::new(format!(
                "Invalid HardSoftScore format '{}': expected 2 parts separated by '/'",
                s
            ))
        })?;

        let hard_str = hard_part.trim().strip_suffix("hard").ok_or_else(|| {
            ScoreParseError::new(format!("hard part '{}' must end with 'hard'", hard_part))
        })?;
        let hard = hard_str.parse::<i64>().map_err(|e| {
            ScoreParseError::new(format!("Invalid hard score '{}': {}", hard_str, e))
        })?;
        let hard_violation = match hard.checked_neg() {
            Some(violation) if violation >= 0 => violation,
            _ => {
                return Err(ScoreParseError::new(format!(
                    "hard score '{}' must be zero or negative",
                    hard_str
                )))
            }
        };

        let soft_str = soft_part.trim().strip_suffix("soft").ok_or_else(|| {
            ScoreParseError::new(format!("soft part '{}' must end with 'soft'", soft_part))
        })?;
        let soft = if soft_str == "*" {
            i64::MIN
        } else {
            soft_str.parse::<i64>().map_err(|e| {
                ScoreParseError::new(format!("Invalid soft score '{}': {}", soft_str, e))
            })?
        };

        Ok(HardSoftScore::of(hard_violation, soft))
    }
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.hard_violation.cmp(&self.hard_violation) {
            Ordering::Equal => self.soft_reward.cmp(&other.soft_reward),
            other => other,
        }
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftScore::of(
            self.hard_violation + other.hard_violation,
            self.soft_reward + other.soft_reward,
        )
    }
}

impl AddAssign for HardSoftScore {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for HardSoftScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(HardSoftScore::ZERO, Add::add)
    }
}

impl FromStr for HardSoftScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HardSoftScore::parse(s)
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardSoftScore({}, {})",
            self.hard_violation, self.soft_reward
        )
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hard_violation == 0 {
            write!(f, "0hard/{}soft", self.soft_reward)
        } else {
            write!(f, "-{}hard/{}soft", self.hard_violation, self.soft_reward)
        }
    }
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Score parse error: {message}")]
pub struct ScoreParseError {
    pub message: String,
}

impl ScoreParseError {
    fn new(message: String) -> Self {
        ScoreParseError { message }
    }
}
