//! Conflict analysis and chronological backtracking.
//!
//! There is no resolution, no learned clause, and no non-chronological backjump here:
//! on a conflict at decision level `L`, the bottommost (earliest) decision at `L` is
//! flipped and the flip is re-asserted one level below, at `L - 1`, matching the target
//! level the backtracker rewinds the trail to. If that decision has already been flipped once
//! (both of its branches have now led to a conflict), the whole level is abandoned and the
//! search backs up to `L - 1` to try the same thing there. Level 0 exhausted means the
//! formula is unsatisfiable.
use std::time::Instant;

use tracing::debug;

use crate::{clause::ClauseIdx, solver::Solver, trail::TrailReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnalyzeOutcome {
    Unsat,
    Backtracked,
}

impl Solver {
    /// Respond to a conflict detected in `_conflicting_clause`. The clause itself carries
    /// no information this analysis needs — chronological backtracking only looks at the
    /// trail — but the id is threaded through for logging and for a future learning
    /// scheme to hook into without changing this call's signature.
    pub(crate) fn analyze(&mut self, _conflicting_clause: ClauseIdx) -> AnalyzeOutcome {
        loop {
            let level = self.trail.current_decision_level();
            if level == 0 {
                return AnalyzeOutcome::Unsat;
            }

            let culprit = self.trail.earliest_at_level(level);
            match culprit.reason {
                TrailReason::Decision { flipped: false } => {
                    debug!(lit = %culprit.lit, level, "flipping decision");
                    let backtrack_start = Instant::now();
                    self.trail.backtrack(level - 1);
                    self.stats.backtrack_time += backtrack_start.elapsed();

                    self.trail
                        .assign_lit(-culprit.lit, TrailReason::Decision { flipped: true });
                    self.bcp_cursor = self.bcp_cursor.min(self.trail.assigned_vars() - 1);
                    return AnalyzeOutcome::Backtracked;
                }
                TrailReason::Decision { flipped: true } => {
                    debug!(level, "both branches exhausted, backtracking further");
                    let backtrack_start = Instant::now();
                    self.trail.backtrack(level - 1);
                    self.stats.backtrack_time += backtrack_start.elapsed();
                    self.bcp_cursor = self.bcp_cursor.min(self.trail.assigned_vars());
                }
                TrailReason::Propagated { .. } | TrailReason::Axiom => {
                    unreachable!("the bottommost entry of a decision level is always a decision")
                }
            }
        }
    }
}
