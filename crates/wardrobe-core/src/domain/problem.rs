//! Immutable per-run inputs.

use std::sync::Arc;

use super::{Item, Money};
use crate::catalog::CatalogIndex;
use crate::error::{Result, WardrobeError};

/// Maximum total price of the included items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    limit: Money,
}

impl Budget {
    /// Creates a budget, rejecting negative limits.
    pub fn new(limit: Money) -> Result<Self> {
        if limit.is_negative() {
            return Err(WardrobeError::Config(format!(
                "budget {} must not be negative",
                limit
            )));
        }
        Ok(Budget { limit })
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Minor units by which `total` exceeds the limit, or zero.
    #[inline]
    pub fn overflow(&self, total: Money) -> i64 {
        (total - self.limit).minor_units().max(0)
    }
}

/// Preferred style tags of the shopper.
///
/// Carried through a run but not consulted by the style reward, which is a
/// flat bonus per selected item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceSet {
    styles: Vec<String>,
}

impl PreferenceSet {
    pub fn new<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PreferenceSet {
            styles: styles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Everything a solver run needs: the shared catalog, the budget and the
/// shopper's preferences.
#[derive(Debug, Clone)]
pub struct WardrobeProblem {
    index: Arc<CatalogIndex>,
    budget: Budget,
    preferences: PreferenceSet,
}

impl WardrobeProblem {
    pub fn new(index: Arc<CatalogIndex>, budget: Budget, preferences: PreferenceSet) -> Self {
        WardrobeProblem {
            index,
            budget,
            preferences,
        }
    }

    /// Builds a problem from raw items, indexing them.
    pub fn from_items(items: Vec<Item>, budget: Budget, preferences: PreferenceSet) -> Self {
        WardrobeProblem::new(Arc::new(CatalogIndex::new(items)), budget, preferences)
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }
}
