//! Main solver API
//!
//! The solver hands a CNF formula to a SAT backend and reports whether it is
//! satisfiable, together with the satisfying assignment when there is one.

use log::debug;
use std::time::{Duration, Instant};

use crate::cnf::CNF;
use crate::encoding::{VarIndexer, VarKey};
use crate::engine::{rustsat_adapter::RustSatAdapter, SATSolver};
use crate::error::{DTreeError, Result};
use rustsat_batsat::BasicSolver;

/// Solver options
#[derive(Debug, Clone)]
pub struct Options {
    /// Re-evaluate every clause against the returned model
    pub check_model: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            check_model: cfg!(debug_assertions),
        }
    }
}

/// Front end over a SAT backend (uses batsat by default)
pub struct Solver {
    options: Options,
}

impl Solver {
    /// Creates a new solver with the given options (uses batsat backend)
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Solves a formula using the batsat backend
    pub fn solve(&self, cnf: &CNF) -> Result<Solution> {
        let mut sat_solver = RustSatAdapter::new(BasicSolver::default());
        self.solve_with(&mut sat_solver, cnf)
    }

    /// Solves a formula with a custom SAT solver
    pub fn solve_with<S: SATSolver>(&self, sat_solver: &mut S, cnf: &CNF) -> Result<Solution> {
        let num_clauses = count_u32(cnf.num_clauses(), "clauses")?;
        let start = Instant::now();
        sat_solver.add_variables(cnf.num_variables);
        for clause in &cnf.clauses {
            sat_solver.add_clause(clause)?;
        }
        let is_sat = sat_solver.solve()?;
        let solving_time = start.elapsed();

        let stats = Statistics {
            solving_time,
            num_variables: cnf.num_variables,
            num_clauses,
        };
        debug!(
            "solved {} variables, {} clauses: {} in {:?}",
            stats.num_variables,
            stats.num_clauses,
            if is_sat { "SAT" } else { "UNSAT" },
            solving_time
        );

        if !is_sat {
            return Ok(Solution::Unsat { stats });
        }

        let model = Model {
            values: (1..=cnf.num_variables).map(|v| sat_solver.value_of(v)).collect(),
        };
        if self.options.check_model && !cnf.is_satisfied_by(|v| model.value(v)) {
            return Err(DTreeError::Solver(
                "backend returned a model that violates the formula".to_string(),
            ));
        }
        Ok(Solution::Sat { model, stats })
    }
}

fn count_u32(n: usize, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| DTreeError::CapacityExceeded(format!("{} {} do not fit in u32", n, what)))
}

/// Assignment of every variable of a satisfiable formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    // values[v - 1] is the value of variable v
    values: Vec<bool>,
}

impl Model {
    /// Value of variable `var`; variables outside the formula read as false
    pub fn value(&self, var: u32) -> bool {
        var.checked_sub(1)
            .and_then(|idx| self.values.get(idx as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Value of a literal: true if the literal is satisfied
    pub fn lit_value(&self, lit: i32) -> bool {
        self.value(lit.unsigned_abs()) == (lit > 0)
    }

    /// Number of variables in the model
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the model assigns no variable
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Symbolic keys of the variables set to true
    pub fn true_keys(&self, vars: &VarIndexer) -> Vec<VarKey> {
        vars.iter()
            .filter(|&(_, id)| self.value(id.unsigned_abs()))
            .map(|(key, _)| key)
            .collect()
    }
}

/// Outcome of solving a formula
#[derive(Debug)]
pub enum Solution {
    /// Formula is satisfiable
    Sat {
        /// Satisfying assignment
        model: Model,
        /// Solving statistics
        stats: Statistics,
    },
    /// Formula is unsatisfiable
    Unsat {
        /// Solving statistics
        stats: Statistics,
    },
}

impl Solution {
    /// Returns true if the formula is satisfiable
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat { .. })
    }

    /// Returns true if the formula is unsatisfiable
    pub fn is_unsat(&self) -> bool {
        matches!(self, Solution::Unsat { .. })
    }

    /// Returns the model if the solution is SAT
    pub fn model(&self) -> Option<&Model> {
        match self {
            Solution::Sat { model, .. } => Some(model),
            Solution::Unsat { .. } => None,
        }
    }

    /// Returns the statistics
    pub fn statistics(&self) -> &Statistics {
        match self {
            Solution::Sat { stats, .. } => stats,
            Solution::Unsat { stats } => stats,
        }
    }
}

/// Statistics collected during solving
#[derive(Debug, Clone)]
pub struct Statistics {
    solving_time: Duration,
    num_variables: u32,
    num_clauses: u32,
}

impl Statistics {
    /// Returns solving time in milliseconds
    pub fn solving_time(&self) -> u64 {
        self.solving_time.as_millis() as u64
    }

    /// Returns number of variables
    pub fn num_variables(&self) -> u32 {
        self.num_variables
    }

    /// Returns number of clauses
    pub fn num_clauses(&self) -> u32 {
        self.num_clauses
    }
}
