//! CNF formula representation
//!
//! Clauses are DIMACS-style: a literal `k` denotes variable `|k|`, positive for
//! the variable itself and negative for its negation.

use std::fmt;

/// CNF representation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CNF {
    /// Largest variable mentioned by any clause
    pub num_variables: u32,
    /// CNF clauses (each clause is a vec of literals, negative = negated)
    pub clauses: Vec<Vec<i32>>,
}

impl CNF {
    /// Creates a new empty CNF
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause to the CNF
    ///
    /// An empty clause is kept; it makes the formula unsatisfiable.
    pub fn add_clause(&mut self, clause: Vec<i32>) {
        for &lit in &clause {
            let var = lit.unsigned_abs();
            if var > self.num_variables {
                self.num_variables = var;
            }
        }
        self.clauses.push(clause);
    }

    /// Appends every clause of `other`
    pub fn extend(&mut self, other: CNF) {
        self.num_variables = self.num_variables.max(other.num_variables);
        self.clauses.extend(other.clauses);
    }

    /// Number of clauses
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if there are no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates over the clauses
    pub fn iter(&self) -> impl Iterator<Item = &[i32]> {
        self.clauses.iter().map(|c| c.as_slice())
    }

    /// Evaluates the formula under `assignment`, where `assignment(v)` is the
    /// value of variable `v`
    pub fn is_satisfied_by(&self, assignment: impl Fn(u32) -> bool) -> bool {
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|&lit| assignment(lit.unsigned_abs()) == (lit > 0))
        })
    }
}

/// Renders the formula in DIMACS CNF format
impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_variables, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(f, "{} ", lit)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
