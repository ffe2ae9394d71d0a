use crate::clause::ClauseIdx;

/// One entry of `clauses_watched_by_literal[l]`: the id of a clause currently watching
/// `l`. Pairs with the clause's own watched-pair bookkeeping (the first two literals of
/// the clause) to form the two mirror mappings required by WATCH-INV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Watch {
    pub clause: ClauseIdx,
}
