//! A small, allocation-light parser for the DIMACS CNF format.
//!
//! Grammar, informally: zero or more comment lines beginning with `c`, then exactly one
//! problem line `p cnf <vars> <clauses>`, then a stream of whitespace- and
//! newline-separated integers terminated by `0`, each run of integers up to (but not
//! including) its terminating `0` forming one clause. Clauses may span multiple lines.
use crate::error::MalformedInput;

pub(crate) struct Formula {
    pub(crate) num_vars: u32,
    pub(crate) clauses: Vec<Vec<i32>>,
}

pub(crate) fn parse(input: &str) -> Result<Formula, MalformedInput> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (num_vars, num_clauses) = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() || line.starts_with('c') => continue,
            Some((line_no, line)) => break parse_header(line_no, line)?,
            None => {
                return Err(MalformedInput::MissingHeader {
                    line: 1,
                    found: String::new(),
                })
            }
        }
    };

    let mut clauses = Vec::with_capacity(num_clauses as usize);
    let mut current = Vec::new();
    let mut clause_start_line = None;

    for (line_no, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| MalformedInput::InvalidToken {
                line: line_no,
                token: token.to_string(),
            })?;

            if value == 0 {
                clauses.push(std::mem::take(&mut current));
                clause_start_line = None;
                continue;
            }

            if value.unsigned_abs() > num_vars as u64 {
                return Err(MalformedInput::VariableOutOfRange {
                    line: line_no,
                    var: value,
                    max: num_vars,
                });
            }

            clause_start_line.get_or_insert(line_no);
            current.push(value as i32);
        }
    }

    if let Some(line) = clause_start_line {
        return Err(MalformedInput::UnterminatedClause { line });
    }

    Ok(Formula { num_vars, clauses })
}

fn parse_header(line_no: usize, line: &str) -> Result<(u32, u32), MalformedInput> {
    let fields: Vec<&str> = line.trim().split_whitespace().collect();
    match fields.as_slice() {
        ["p", "cnf", vars, clauses] => {
            let vars = vars.parse().map_err(|_| MalformedInput::InvalidHeader {
                line: line_no,
                detail: format!("variable count {vars:?} is not a valid integer"),
            })?;
            let clauses = clauses.parse().map_err(|_| MalformedInput::InvalidHeader {
                line: line_no,
                detail: format!("clause count {clauses:?} is not a valid integer"),
            })?;
            Ok((vars, clauses))
        }
        ["p", ..] => Err(MalformedInput::InvalidHeader {
            line: line_no,
            detail: format!("expected `p cnf <vars> <clauses>`, found {line:?}"),
        }),
        _ => Err(MalformedInput::MissingHeader {
            line: line_no,
            found: line.to_string(),
        }),
    }
}
