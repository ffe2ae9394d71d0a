//! The assignment trail: an ordered, append/truncate-only log of every variable
//! assignment, partitioned by decision level, together with the variable-to-node map
//! used to answer "is this literal assigned/satisfied" in O(1).
use crate::{
    clause::{Clause, ClauseIdx},
    data::{Lit, Var, VarVec},
};

/// Why a literal was assigned. Axioms are level-0 facts forced by unit clauses supplied
/// at ingestion; they are kept distinct from `Decision` (unlike the "decision marker"
/// wording the specification uses for both) because the two cases deserve different log
/// messages and because nothing in this solver ever needs to treat an axiom as a
/// candidate to flip on conflict — only genuine decisions (and the flipped decisions that
/// conflict analysis installs in their place, which reuse the `Decision` tag) are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailReason {
    /// A decision made by the decider, or the literal conflict analysis installs in its
    /// place after a conflict. `flipped` distinguishes the two: `false` means this level
    /// still has an unexplored branch (its polarity can still be flipped on the next
    /// conflict at this level); `true` means both polarities have now been tried and a
    /// further conflict at this level must backtrack past it entirely.
    Decision { flipped: bool },
    /// Forced by unit propagation through the named clause.
    Propagated { cls: ClauseIdx },
    /// Forced at level 0 by a unit clause supplied directly to the solver.
    Axiom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailElement {
    pub(crate) lit: Lit,
    pub(crate) reason: TrailReason,
}

#[derive(Clone, Copy, Debug)]
struct AssignData {
    value: bool,
    level: u32,
}

#[derive(Default)]
pub(crate) struct Trail {
    trail: Vec<TrailElement>,
    assignment: VarVec<Option<AssignData>>,
    current_level: u32,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand internal storage so that `var` is a valid index.
    pub fn expand(&mut self, var: Var) {
        self.assignment.expand(var, None);
    }

    pub fn total_vars(&self) -> usize {
        self.assignment.len()
    }

    pub fn assigned_vars(&self) -> usize {
        self.trail.len()
    }

    pub fn assignment_complete(&self) -> bool {
        self.trail.len() == self.assignment.len()
    }

    pub fn get(&self, idx: usize) -> Option<&TrailElement> {
        self.trail.get(idx)
    }

    pub fn trail(&self) -> &[TrailElement] {
        &self.trail
    }

    pub fn current_decision_level(&self) -> u32 {
        self.current_level
    }

    pub fn get_decision_level(&self, lit: Lit) -> Option<u32> {
        self.assignment[lit.var()].map(|d| d.level)
    }

    pub fn is_lit_assigned(&self, lit: Lit) -> bool {
        self.assignment[lit.var()].is_some()
    }

    pub fn is_lit_unassigned(&self, lit: Lit) -> bool {
        self.assignment[lit.var()].is_none()
    }

    pub fn is_lit_satisfied(&self, lit: Lit) -> bool {
        matches!(self.assignment[lit.var()], Some(d) if d.value == lit.is_pos())
    }

    pub fn is_lit_unsatisfied(&self, lit: Lit) -> bool {
        matches!(self.assignment[lit.var()], Some(d) if d.value != lit.is_pos())
    }

    pub fn is_clause_satisfied(&self, clause: Clause) -> bool {
        clause.iter().copied().any(|lit| self.is_lit_satisfied(lit))
    }

    /// For now this is just a bad but simple procedure to find the next decision
    /// candidate: the smallest-numbered unassigned variable (the ORDERED policy).
    pub fn find_unassigned_variable(&self) -> Option<Var> {
        self.assignment
            .iter_with_var()
            .find(|&(_, data)| data.is_none())
            .map(|(var, _)| var)
    }

    /// Assign `lit` at the current decision level, recording `reason`. Decisions bump
    /// the current decision level *before* being pushed; this method does not change
    /// the level itself (see [`Trail::begin_decision`] and [`Trail::backtrack`]).
    pub fn assign_lit(&mut self, lit: Lit, reason: TrailReason) {
        debug_assert!(self.is_lit_unassigned(lit));

        self.assignment[lit.var()] = Some(AssignData {
            value: lit.is_pos(),
            level: self.current_level,
        });
        self.trail.push(TrailElement { lit, reason });
    }

    /// Increment the current decision level. Called by the decider immediately before
    /// pushing a new decision node.
    pub fn begin_decision(&mut self) {
        self.current_level += 1;
    }

    /// Find the bottommost (earliest) trail entry at decision level `level`. Used by
    /// conflict analysis to identify the decision that should be flipped.
    pub fn earliest_at_level(&self, level: u32) -> TrailElement {
        let mut found = None;
        for elem in self.trail.iter().rev() {
            let elem_level = self
                .get_decision_level(elem.lit)
                .expect("trail literals are always assigned");
            if elem_level == level {
                found = Some(*elem);
            } else if elem_level < level {
                break;
            }
        }
        found.expect("decision level must be present on the trail")
    }

    /// Rewind the trail to decision level `target`, unassigning every variable whose
    /// assignment happened at a level strictly greater than `target`. Does not touch the
    /// watched-literal index (WATCH-INV is unaffected by backtracking, see module docs
    /// on [`crate::propagate`]).
    pub fn backtrack(&mut self, target: u32) {
        while let Some(&elem) = self.trail.last() {
            let level = self
                .get_decision_level(elem.lit)
                .expect("trail literals are always assigned");
            if level <= target {
                break;
            }
            self.trail.pop();
            self.assignment[elem.lit.var()] = None;
        }
        self.current_level = target;
    }
}

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const END: &str = "\u{1b}[0m";

impl Trail {
    pub(crate) fn fmt_lit(&self, lit: Lit) -> String {
        match self.is_lit_assigned(lit) {
            true if self.is_lit_satisfied(lit) => format!("{GREEN}{lit}{END}"),
            true => format!("{RED}{lit}{END}"),
            false => format!("{lit}"),
        }
    }

    pub(crate) fn fmt_trail(&self) -> String {
        let mut out = String::from("[");
        for (i, elem) in self.trail.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let tag = match elem.reason {
                TrailReason::Decision { flipped: false } => "D",
                TrailReason::Decision { flipped: true } => "D'",
                TrailReason::Propagated { .. } => "P",
                TrailReason::Axiom => "A",
            };
            out.push_str(&format!("{}{tag}", elem.lit));
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(i: i32) -> Lit {
        Lit::new(i)
    }

    #[test]
    fn axiom_then_decision_levels() {
        let mut trail = Trail::new();
        trail.expand(Var::new(2));

        trail.assign_lit(lit(1), TrailReason::Axiom);
        assert_eq!(trail.current_decision_level(), 0);
        assert_eq!(trail.get_decision_level(lit(1)), Some(0));

        trail.begin_decision();
        trail.assign_lit(lit(2), TrailReason::Decision { flipped: false });
        assert_eq!(trail.current_decision_level(), 1);
        assert_eq!(trail.get_decision_level(lit(2)), Some(1));
    }

    #[test]
    fn backtrack_unassigns_and_resets_level() {
        let mut trail = Trail::new();
        trail.expand(Var::new(3));

        trail.begin_decision();
        trail.assign_lit(lit(1), TrailReason::Decision { flipped: false });
        trail.begin_decision();
        trail.assign_lit(lit(2), TrailReason::Decision { flipped: false });
        trail.assign_lit(lit(3), TrailReason::Propagated {
            cls: dummy_cls_idx(),
        });

        trail.backtrack(1);

        assert_eq!(trail.current_decision_level(), 1);
        assert!(trail.is_lit_assigned(lit(1)));
        assert!(trail.is_lit_unassigned(lit(2)));
        assert!(trail.is_lit_unassigned(lit(3)));
        assert_eq!(trail.assigned_vars(), 1);
    }

    fn dummy_cls_idx() -> ClauseIdx {
        let mut db = crate::clause::ClauseDB::new();
        db.insert_clause(&[lit(10), lit(11)])
    }

    #[test]
    fn earliest_at_level_is_bottommost() {
        let mut trail = Trail::new();
        trail.expand(Var::new(4));

        trail.begin_decision();
        trail.assign_lit(lit(1), TrailReason::Decision { flipped: false });
        trail.assign_lit(lit(2), TrailReason::Propagated {
            cls: dummy_cls_idx(),
        });
        trail.assign_lit(lit(3), TrailReason::Decision { flipped: true }); // simulates a flip re-using the slot

        let earliest = trail.earliest_at_level(1);
        assert_eq!(earliest.lit, lit(1));
    }
}
