use std::time::Instant;

use tracing::{debug, info_span};

use crate::{
    analyze::AnalyzeOutcome,
    clause::ClauseDB,
    data::{Lit, LitVec, Var},
    dimacs,
    error::SolveError,
    propagate::PropagationResult,
    stats::Stats,
    trail::{Trail, TrailReason},
    watch::Watch,
};

/// A satisfying assignment produced by a successful [`Solver::solve`] call.
pub struct Model<'a> {
    trail: &'a Trail,
}

impl<'a> Model<'a> {
    /// Truth value of a variable's positive literal, e.g. `lit(3)` answers "is variable
    /// 3 true?".
    pub fn lit(&self, l: i32) -> bool {
        self.trail.is_lit_satisfied(Lit::new(l))
    }

    /// The assignment as a vector of signed DIMACS literals, one per variable in order.
    pub fn as_vec(&self) -> Vec<i32> {
        (1..=self.trail.total_vars() as i32)
            .map(|v| if self.lit(v) { v } else { -v })
            .collect()
    }
}

impl std::fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Model").field(&self.as_vec()).finish()
    }
}

/// Witness that a formula is unsatisfiable. Carries no data in this core — there is no
/// clause learning, so there is no resolution refutation to attach (see DESIGN.md).
#[derive(Debug)]
pub struct Proof;

#[derive(Debug)]
pub enum Result<'a> {
    Sat(Model<'a>),
    Unsat(Proof),
}

impl<'a> Result<'a> {
    pub fn is_sat(&self) -> bool {
        matches!(self, Result::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, Result::Unsat(_))
    }

    pub fn unwrap_sat(self) -> Model<'a> {
        match self {
            Result::Sat(model) => model,
            Result::Unsat(_) => panic!("result is UNSAT, not SAT"),
        }
    }

    pub fn unwrap_unsat(self) -> Proof {
        match self {
            Result::Unsat(proof) => proof,
            Result::Sat(_) => panic!("result is SAT, not UNSAT"),
        }
    }
}

/// A DPLL solver driving a fixed loop of clause ingestion, two-watched-literal unit
/// propagation, an ordered decision heuristic, and chronological backtracking.
///
/// See the crate-level documentation for the algorithm; this struct only owns state.
#[derive(Default)]
pub struct Solver {
    pub(crate) clause_db: ClauseDB,
    pub(crate) watches: LitVec<Vec<Watch>>,
    pub(crate) trail: Trail,

    /// Position on the trail at which the next BCP call should resume scanning.
    pub(crate) bcp_cursor: usize,

    /// Set once ingestion finds an empty clause or conflicting unit clauses; short
    /// circuits `solve` without entering the search loop.
    pub(crate) trivially_unsat: bool,

    pub(crate) stats: Stats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input` as a DIMACS CNF formula and build a solver for it.
    pub fn from_dimacs(input: &str) -> std::result::Result<Solver, SolveError> {
        let formula = dimacs::parse(input)?;

        let mut solver = Solver::new();
        for v in 1..=formula.num_vars {
            let var = Var::new(v as i32);
            solver.trail.expand(var);
            solver.watches.expand(-Lit::from(var), Vec::new());
        }
        for clause in formula.clauses {
            solver.add_clause(clause);
        }
        Ok(solver)
    }

    /// Remove duplicate literals preserving first-occurrence order. Returns `true` if
    /// the clause is trivially satisfied (contains both a literal and its negation).
    fn normalize_clause(cls: &mut Vec<Lit>) -> bool {
        let mut seen: Vec<Lit> = Vec::with_capacity(cls.len());
        cls.retain(|&lit| {
            if seen.contains(&lit) {
                false
            } else {
                seen.push(lit);
                true
            }
        });
        seen.iter()
            .any(|&lit| seen.contains(&-lit))
    }

    /// Ingest one clause (§4.1). `cls` is a list of nonzero signed DIMACS literals.
    pub fn add_clause<I>(&mut self, cls: I)
    where
        I: IntoIterator<Item = i32>,
    {
        if self.trivially_unsat {
            return;
        }

        let mut cls: Vec<Lit> = cls.into_iter().map(Lit::new).collect();

        if Self::normalize_clause(&mut cls) {
            return;
        }

        if let Some(max_lit) = cls.iter().max_by_key(|l| l.var().get()) {
            self.trail.expand(max_lit.var());
            self.watches.expand(-Lit::from(max_lit.var()), Vec::new());
        }

        match cls.len() {
            0 => {
                debug!("empty clause ingested, formula is trivially unsat");
                self.trivially_unsat = true;
            }
            1 => {
                let unit = cls[0];
                if self.trail.is_lit_unsatisfied(unit) {
                    debug!("conflicting unit clauses ingested, formula is trivially unsat");
                    self.trivially_unsat = true;
                } else if self.trail.is_lit_unassigned(unit) {
                    self.trail.assign_lit(unit, TrailReason::Axiom);
                    self.stats.implications += 1;
                }
                // else: already satisfied by an earlier identical unit clause, ignore.
            }
            _ => {
                let cls_idx = self.clause_db.insert_clause(&cls);
                for &lit in &cls[0..2] {
                    self.watches[lit].push(Watch { clause: cls_idx });
                }
            }
        }
    }

    fn extract_model(&self) -> Model {
        Model { trail: &self.trail }
    }

    /// Run the solve loop (§4.6) to completion.
    pub fn solve(&mut self) -> Result {
        let _span = info_span!("solve").entered();

        if self.trivially_unsat {
            return Result::Unsat(Proof);
        }

        loop {
            let bcp_start = Instant::now();
            let propagate_result = self.propagate();
            self.stats.bcp_time += bcp_start.elapsed();

            if let PropagationResult::Contradiction(conflicting_clause) = propagate_result {
                self.stats.conflicts += 1;
                let analyze_start = Instant::now();
                let outcome = self.analyze(conflicting_clause);
                self.stats.analyze_time += analyze_start.elapsed();

                match outcome {
                    AnalyzeOutcome::Unsat => {
                        debug!("conflict at level 0, formula is unsat");
                        return Result::Unsat(Proof);
                    }
                    AnalyzeOutcome::Backtracked => continue,
                }
            }

            if self.trail.assignment_complete() {
                debug_assert!(
                    self.check_assignment(),
                    "produced assignment does not satisfy the input formula"
                );
                return Result::Sat(self.extract_model());
            }

            let decide_start = Instant::now();
            let decision = self.decide();
            self.stats.decide_time += decide_start.elapsed();

            match decision {
                Some(var) => {
                    debug!(%var, "new decision");
                    self.trail.begin_decision();
                    self.trail
                        .assign_lit(var.into(), TrailReason::Decision { flipped: false });
                    self.stats.decisions += 1;
                }
                None => unreachable!(
                    "no unassigned variable found, but the assignment was not complete"
                ),
            }
        }
    }

    /// Check that the current (complete) assignment satisfies every stored clause.
    /// Unit clauses consumed at ingestion are satisfied by construction and need no
    /// check here.
    fn check_assignment(&self) -> bool {
        self.clause_db
            .iter()
            .all(|clause| self.trail.is_clause_satisfied(clause))
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_clause_is_satisfied() {
        let mut solver = Solver::new();
        solver.add_clause([1]);
        let model = solver.solve().unwrap_sat();
        assert!(model.lit(1));
    }

    #[test]
    fn empty_formula_is_sat_with_no_variables() {
        let mut solver = Solver::new();
        assert!(solver.solve().unwrap_sat().as_vec().is_empty());
    }

    #[test]
    fn conflicting_units_are_trivially_unsat() {
        let mut solver = Solver::new();
        solver.add_clause([1]);
        solver.add_clause([-1]);
        assert!(solver.solve().is_unsat());
    }

    #[test]
    fn empty_clause_is_trivially_unsat() {
        let mut solver = Solver::new();
        solver.add_clause(std::iter::empty());
        assert!(solver.solve().is_unsat());
    }

    #[test]
    fn propagation_forces_remaining_literal() {
        let mut solver = Solver::new();
        solver.add_clause([-1, 2, 3]);
        solver.add_clause([-1, -2]);
        solver.add_clause([1]);

        let model = solver.solve().unwrap_sat();
        assert!(model.lit(1));
        assert!(!model.lit(2));
        assert!(model.lit(3));
    }
}
