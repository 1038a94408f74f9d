//! Decision tree learning constraints as CNF
//!
//! Two clause families are generated for a set of branching nodes `TB`, a set
//! of features `F` and a dataset `X`:
//!
//! - exactly one feature is chosen at every branching node
//!   (`a(t, j)` variables);
//! - routing through a node is monotone in the chosen feature's value order,
//!   and points tied on that feature are routed identically (`s(i, t)`
//!   variables, true when point `i` goes left at node `t`).

pub mod var_index;

use log::debug;

use crate::cnf::CNF;
use crate::dataset::Dataset;
use crate::error::{DTreeError, Result};
use crate::value::Value;
pub use var_index::{VarIndexer, VarKey, VarKind};

/// An encoding session
///
/// Owns the variable indexer, so ids are stable across every formula this
/// encoder produces and independent from any other encoder.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    vars: VarIndexer,
}

impl Encoder {
    /// Creates an encoder with an empty variable space
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variable indexer
    pub fn vars(&self) -> &VarIndexer {
        &self.vars
    }

    /// `a(t, j)`
    fn feature_var(&mut self, t: usize, j: usize) -> Result<i32> {
        self.vars.var_index(VarKind::FeatureChoice, t, j)
    }

    /// `s(i, t)`
    fn route_var(&mut self, i: usize, t: usize) -> Result<i32> {
        self.vars.var_index(VarKind::Route, i, t)
    }

    /// Encodes that exactly one feature is chosen at each branching node
    ///
    /// For every node `t` this emits `¬a(t,j) ∨ ¬a(t,j')` once per unordered
    /// pair of distinct features, followed by the at-least-one clause
    /// `a(t,j1) ∨ ... ∨ a(t,jn)`. With no features the at-least-one clause is
    /// empty and the formula is unsatisfiable.
    pub fn choose_one_feature_at_branching(&mut self, branching: &[usize], features: &[usize]) -> Result<CNF> {
        let mut cnf = CNF::new();

        for &t in branching {
            for (k, &j) in features.iter().enumerate() {
                for &j_prime in &features[k + 1..] {
                    if j != j_prime {
                        let a = self.feature_var(t, j)?;
                        let a_prime = self.feature_var(t, j_prime)?;
                        cnf.add_clause(vec![-a, -a_prime]);
                    }
                }
            }
        }

        for &t in branching {
            let clause = features
                .iter()
                .map(|&j| self.feature_var(t, j))
                .collect::<Result<Vec<_>>>()?;
            cnf.add_clause(clause);
        }

        debug!(
            "choose_one_feature_at_branching: {} nodes, {} features -> {} clauses",
            branching.len(),
            features.len(),
            cnf.num_clauses()
        );
        Ok(cnf)
    }

    /// Encodes routing consistent with the order of the chosen feature
    ///
    /// For every feature `j`, node `t` and adjacent pair `(i, i')` of
    /// [`compute_ordering`]:
    /// - `¬a(t,j) ∨ s(i,t) ∨ ¬s(i',t)`: under `j`, the later point cannot go
    ///   left while the earlier one goes right;
    /// - if `X[i][j] == X[i'][j]`, also `¬a(t,j) ∨ ¬s(i,t) ∨ s(i',t)`, so tied
    ///   points are routed the same way.
    pub fn enforce_ordering_at_branching(
        &mut self,
        branching: &[usize],
        features: &[usize],
        dataset: &[Vec<Value>],
    ) -> Result<CNF> {
        let mut cnf = CNF::new();
        let mut ties = 0usize;

        for &j in features {
            let ordering = compute_ordering(dataset, j)?;
            for &t in branching {
                for &(i, i_prime) in &ordering {
                    let a = self.feature_var(t, j)?;
                    let s = self.route_var(i, t)?;
                    let s_prime = self.route_var(i_prime, t)?;
                    cnf.add_clause(vec![-a, s, -s_prime]);

                    // compute_ordering already checked both cells exist
                    if dataset[i][j] == dataset[i_prime][j] {
                        cnf.add_clause(vec![-a, -s, s_prime]);
                        ties += 1;
                    }
                }
            }
        }

        debug!(
            "enforce_ordering_at_branching: {} nodes, {} features, {} points -> {} clauses ({} tie-breaks)",
            branching.len(),
            features.len(),
            dataset.len(),
            cnf.num_clauses(),
            ties
        );
        Ok(cnf)
    }

    /// Encodes both clause families for every feature column of `dataset`
    pub fn encode(&mut self, dataset: &Dataset, branching: &[usize]) -> Result<CNF> {
        let features = dataset.feature_indices();
        let mut cnf = self.choose_one_feature_at_branching(branching, &features)?;
        cnf.extend(self.enforce_ordering_at_branching(branching, &features, dataset.rows())?);
        debug!(
            "encode: {} variables, {} clauses",
            self.vars.len(),
            cnf.num_clauses()
        );
        Ok(cnf)
    }
}

/// Computes the ordering of `dataset` on feature `feature`
///
/// Row indices are stably sorted by their value in column `feature`; the
/// result is the list of consecutive pairs in that order (`len - 1` pairs).
///
/// # Errors
/// Returns an error if some row has no value in column `feature`
pub fn compute_ordering(dataset: &[Vec<Value>], feature: usize) -> Result<Vec<(usize, usize)>> {
    let column = dataset
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values.get(feature).ok_or(DTreeError::MissingColumn {
                row,
                column: feature,
            })
        })
        .collect::<Result<Vec<&Value>>>()?;

    let mut sorted: Vec<usize> = (0..column.len()).collect();
    sorted.sort_by(|&a, &b| column[a].cmp(column[b]));

    Ok(sorted.windows(2).map(|w| (w[0], w[1])).collect())
}
