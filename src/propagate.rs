//! Boolean constraint propagation over the two-watched-literal index.
//!
//! WATCH-INV: for every stored clause, its first two literals are its current watched
//! pair, and `watches[cls[0]]` and `watches[cls[1]]` each contain a [`Watch`] naming that
//! clause — a clause is looked up under the literal it watches directly, since that is
//! the literal whose falsification (its negation being assigned) requires rechecking the
//! clause. Propagation preserves the invariant by construction: whenever a watch is moved
//! off a falsified literal it is moved onto a literal the clause still watches
//! afterwards, with the clause's own first two slots kept in sync by swapping, never by
//! growing or shrinking the clause.
use tracing::trace;

use crate::{clause::ClauseIdx, data::Lit, solver::Solver, trail::TrailReason, watch::Watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagationResult {
    Done,
    Contradiction(ClauseIdx),
}

impl Solver {
    /// Drain the trail from `bcp_cursor` onward, propagating every forced implication
    /// until fixpoint or a contradiction is found. Literals implied during the drain are
    /// appended to the trail and are themselves scanned before this call returns, so a
    /// single call reaches a full fixpoint.
    pub(crate) fn propagate(&mut self) -> PropagationResult {
        while self.bcp_cursor < self.trail.trail().len() {
            let falsified = -self.trail.trail()[self.bcp_cursor].lit;
            self.bcp_cursor += 1;

            if let PropagationResult::Contradiction(cls) = self.propagate_literal(falsified) {
                return PropagationResult::Contradiction(cls);
            }
        }
        PropagationResult::Done
    }

    /// Walk the watch list of `falsified` (now false on the trail), looking in each
    /// watching clause for a new literal to watch in place of it. Failing that, the
    /// clause's other watched literal is either already forced true (implication already
    /// satisfied some other way), becomes a new implication, or is itself false, which is
    /// a contradiction.
    fn propagate_literal(&mut self, falsified: Lit) -> PropagationResult {
        let (watch_list, mut rest) = self.watches.remaining(falsified);

        let mut i = 0;
        while i < watch_list.len() {
            let watch = watch_list[i];
            let cls = self.clause_db.get_mut(watch.clause);

            if cls[0] == falsified {
                cls.swap(0, 1);
            }
            debug_assert_eq!(cls[1], falsified);

            let other_watch = cls[0];
            if self.trail.is_lit_satisfied(other_watch) {
                i += 1;
                continue;
            }

            let mut relocated = false;
            for k in 2..cls.len() {
                let candidate = cls[k];
                if !self.trail.is_lit_unsatisfied(candidate) {
                    cls.swap(1, k);
                    rest[cls[1]].push(watch);
                    watch_list.swap_remove(i);
                    relocated = true;
                    break;
                }
            }
            if relocated {
                continue;
            }

            if self.trail.is_lit_unsatisfied(other_watch) {
                trace!(clause = ?watch.clause, "contradiction during propagation");
                return PropagationResult::Contradiction(watch.clause);
            }

            trace!(lit = %other_watch, clause = ?watch.clause, "implied literal");
            self.trail
                .assign_lit(other_watch, TrailReason::Propagated { cls: watch.clause });
            self.stats.implications += 1;
            i += 1;
        }

        PropagationResult::Done
    }
}
