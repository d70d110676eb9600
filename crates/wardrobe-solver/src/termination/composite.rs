//! Composite termination.

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Combines terminations with OR logic.
///
/// Members are checked in tuple order and the first reason wins, so the
/// order of the tuple is the priority of the reasons.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use wardrobe_solver::{BestScoreTermination, OrTermination, TimeTermination};
///
/// let term = OrTermination((
///     BestScoreTermination::feasible(),
///     TimeTermination::new(Duration::from_secs(30)),
/// ));
/// # let _ = term;
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T: Termination),+> Termination for OrTermination<($($T,)+)> {
            fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
                $(
                    if let Some(reason) = self.0.$idx.check(solver_scope) {
                        return Some(reason);
                    }
                )+
                None
            }
        }
    };
}

impl_or_termination!(0: A);
impl_or_termination!(0: A, 1: B);
impl_or_termination!(0: A, 1: B, 2: C);
impl_or_termination!(0: A, 1: B, 2: C, 3: D);
impl_or_termination!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_or_termination!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
