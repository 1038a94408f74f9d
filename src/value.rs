//! Scalar values and named data points
//!
//! A `Value` is either numeric or categorical. Values carry a total order so a
//! dataset column can be sorted stably, and the same order defines the ties that
//! force identical routing.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// A single feature value
#[derive(Debug, Clone)]
pub enum Value {
    /// Numeric value, split by `value <= threshold`
    Numeric(f64),
    /// Categorical value, split by `value == threshold`
    Categorical(String),
}

// Numbers order before categories. Within numbers, `0.0 == -0.0` and NaNs fall
// back to `total_cmp`, which keeps the order total.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Numeric(a), Value::Numeric(b)) => {
                if a == b {
                    Ordering::Equal
                } else {
                    a.total_cmp(b)
                }
            }
            (Value::Numeric(_), Value::Categorical(_)) => Ordering::Less,
            (Value::Categorical(_), Value::Numeric(_)) => Ordering::Greater,
            (Value::Categorical(a), Value::Categorical(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(x) => write!(f, "{}", x),
            Value::Categorical(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Numeric(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Numeric(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Categorical(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Categorical(s)
    }
}

/// A data point: feature name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPoint {
    values: FxHashMap<String, Value>,
}

impl DataPoint {
    /// Creates an empty data point
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a feature, returning the previous one
    pub fn insert(&mut self, feature: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(feature.into(), value.into())
    }

    /// Returns the value of a feature
    pub fn get(&self, feature: &str) -> Option<&Value> {
        self.values.get(feature)
    }

    /// Number of features set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no feature is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DataPoint
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut point = DataPoint::new();
        for (k, v) in iter {
            point.insert(k, v);
        }
        point
    }
}
