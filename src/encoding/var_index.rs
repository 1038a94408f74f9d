//! Variable indexing for SAT encoding
//!
//! Maps symbolic atoms `(kind, first, second)` to DIMACS variable ids. Ids are
//! handed out lazily starting at 1, in the order atoms are first seen.

use log::trace;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::error::{DTreeError, Result};

/// The family a variable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarKind {
    /// `a(t, j)`: feature `j` is the split feature at branching node `t`
    FeatureChoice,
    /// `s(i, t)`: data point `i` is routed to the left child of node `t`
    Route,
}

impl VarKind {
    /// Single-letter prefix used in the literature
    pub fn prefix(self) -> char {
        match self {
            VarKind::FeatureChoice => 'a',
            VarKind::Route => 's',
        }
    }
}

/// A symbolic variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarKey {
    /// Variable family
    pub kind: VarKind,
    /// First index (node for `a`, data point for `s`)
    pub first: usize,
    /// Second index (feature for `a`, node for `s`)
    pub second: usize,
}

impl fmt::Display for VarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.kind.prefix(), self.first, self.second)
    }
}

/// Bijection between symbolic variables and DIMACS ids
///
/// Each encoding session owns one indexer; two indexers never share ids.
#[derive(Debug, Clone, Default)]
pub struct VarIndexer {
    ids: FxHashMap<VarKey, i32>,
    // keys[id - 1] is the key of variable `id`
    keys: Vec<VarKey>,
}

impl VarIndexer {
    /// Creates an empty indexer
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `(kind, first, second)`, allocating the next free id
    /// the first time the triple is seen
    ///
    /// # Errors
    /// Returns an error once every positive `i32` has been handed out
    pub fn var_index(&mut self, kind: VarKind, first: usize, second: usize) -> Result<i32> {
        let key = VarKey {
            kind,
            first,
            second,
        };
        if let Some(&id) = self.ids.get(&key) {
            return Ok(id);
        }

        let id = i32::try_from(self.keys.len() + 1).map_err(|_| {
            DTreeError::CapacityExceeded(format!("no variable id left for {}", key))
        })?;
        trace!("new variable {} = {}", key, id);
        self.ids.insert(key, id);
        self.keys.push(key);
        Ok(id)
    }

    /// Returns the id of an already allocated variable
    pub fn get(&self, kind: VarKind, first: usize, second: usize) -> Option<i32> {
        self.ids
            .get(&VarKey {
                kind,
                first,
                second,
            })
            .copied()
    }

    /// Returns the symbolic key of a variable id
    pub fn key_of(&self, var: i32) -> Option<VarKey> {
        let idx = usize::try_from(var).ok()?.checked_sub(1)?;
        self.keys.get(idx).copied()
    }

    /// Number of allocated variables (also the largest id)
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing has been allocated
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Forgets every mapping; the next variable gets id 1 again
    pub fn clear(&mut self) {
        self.ids.clear();
        self.keys.clear();
    }

    /// Iterates over `(key, id)` pairs in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (VarKey, i32)> + '_ {
        self.keys.iter().zip(1..).map(|(&key, id)| (key, id))
    }
}
