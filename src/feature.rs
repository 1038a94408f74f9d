//! Features and their value domains

use std::collections::BTreeSet;
use std::fmt;

use crate::value::Value;

/// The set of values a feature may take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// Any numeric value
    Numeric,
    /// One of a fixed set of categories
    Categorical(BTreeSet<String>),
}

/// A named feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    domain: Domain,
}

impl Feature {
    /// Creates a numeric feature
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: Domain::Numeric,
        }
    }

    /// Creates a categorical feature with the given permissible values
    pub fn categorical<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            domain: Domain::Categorical(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the feature name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the feature domain
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the permissible values of a categorical feature
    pub fn possible_values(&self) -> Option<&BTreeSet<String>> {
        match &self.domain {
            Domain::Numeric => None,
            Domain::Categorical(values) => Some(values),
        }
    }

    /// Returns true if `value` belongs to this feature's domain
    pub fn validate_value(&self, value: &Value) -> bool {
        match (&self.domain, value) {
            (Domain::Numeric, Value::Numeric(_)) => true,
            (Domain::Categorical(values), Value::Categorical(s)) => values.contains(s),
            _ => false,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
