//! Solve-run counters, surfaced to callers (e.g. the CLI's `--stats` flag) but never
//! consulted by the solver itself to make decisions.
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub decisions: u64,
    pub implications: u64,
    pub conflicts: u64,

    pub bcp_time: Duration,
    pub decide_time: Duration,
    pub analyze_time: Duration,
    pub backtrack_time: Duration,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "decisions:    {}", self.decisions)?;
        writeln!(f, "implications: {}", self.implications)?;
        writeln!(f, "conflicts:    {}", self.conflicts)?;
        writeln!(f, "bcp time:     {:?}", self.bcp_time)?;
        writeln!(f, "decide time:  {:?}", self.decide_time)?;
        writeln!(f, "analyze time: {:?}", self.analyze_time)?;
        write!(f, "backtrack time: {:?}", self.backtrack_time)
    }
}
