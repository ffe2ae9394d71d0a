//! The ORDERED decision policy: always branch on the lowest-numbered unassigned
//! variable, trying the positive literal first. No activity heuristics, no restarts, no
//! phase saving — see the crate's design notes for why this is deliberate.
use crate::{data::Var, solver::Solver};

impl Solver {
    /// Pick the next decision variable, or `None` if every variable is already assigned.
    pub(crate) fn decide(&self) -> Option<Var> {
        self.trail.find_unassigned_variable()
    }
}
