//! Adapters for rustsat solver backends
//!
//! Provides adapters to use rustsat-compatible SAT solvers as a [`SATSolver`].

use rustsat::solvers::{Solve, SolverResult};
use rustsat::types::{Assignment, Clause, Lit, TernaryVal, Var};

use super::SATSolver;
use crate::error::{DTreeError, Result};

/// Adapter that wraps rustsat solvers to implement our SATSolver trait
///
/// # Example
///
/// ```ignore
/// use rustsat_batsat::BasicSolver;
/// let solver = RustSatAdapter::new(BasicSolver::default());
/// ```
pub struct RustSatAdapter<S> {
    solver: S,
    num_vars: u32,
    num_clauses: u32,
    // filled by a satisfiable solve()
    model: Option<Assignment>,
}

impl<S> RustSatAdapter<S> {
    /// Creates a new adapter wrapping the given solver
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            num_vars: 0,
            num_clauses: 0,
            model: None,
        }
    }

    // Only variables declared through add_variables may appear in clauses
    fn lit(&self, lit: i32) -> Result<Lit> {
        let var = lit.unsigned_abs();
        if var == 0 {
            return Err(DTreeError::InvalidArgument("0 is not a valid literal".to_string()));
        }
        if var > self.num_vars {
            return Err(DTreeError::InvalidArgument(format!(
                "literal {} refers to variable {} but only {} are declared",
                lit, var, self.num_vars
            )));
        }
        let var = Var::new(var - 1);
        Ok(if lit > 0 { var.pos_lit() } else { var.neg_lit() })
    }
}

impl<S: Solve> SATSolver for RustSatAdapter<S> {
    fn add_variables(&mut self, num_vars: u32) {
        // rustsat creates variables as clauses mention them
        self.num_vars = self.num_vars.saturating_add(num_vars);
    }

    fn add_clause(&mut self, lits: &[i32]) -> Result<()> {
        let lits = lits.iter().map(|&lit| self.lit(lit)).collect::<Result<Vec<Lit>>>()?;
        self.num_clauses += 1;
        self.model = None;
        self.solver
            .add_clause(Clause::from(&lits[..]))
            .map_err(|e| DTreeError::Solver(e.to_string()))
    }

    fn solve(&mut self) -> Result<bool> {
        let result = self
            .solver
            .solve()
            .map_err(|e| DTreeError::Solver(e.to_string()))?;
        match result {
            SolverResult::Sat => {
                if self.num_vars > 0 {
                    let model = self
                        .solver
                        .solution(Var::new(self.num_vars - 1))
                        .map_err(|e| DTreeError::Solver(e.to_string()))?;
                    self.model = Some(model);
                }
                Ok(true)
            }
            SolverResult::Unsat => Ok(false),
            SolverResult::Interrupted => Err(DTreeError::Solver("solving interrupted".to_string())),
        }
    }

    fn value_of(&self, var: u32) -> bool {
        if var == 0 || var > self.num_vars {
            return false;
        }
        match &self.model {
            Some(model) => matches!(model.var_value(Var::new(var - 1)), TernaryVal::True),
            None => false,
        }
    }

    fn num_variables(&self) -> u32 {
        self.num_vars
    }

    fn num_clauses(&self) -> u32 {
        self.num_clauses
    }
}
