//! Labeled datasets
//!
//! Rows are stored column-indexed (`rows[i][j]` is the value of feature `j` for
//! data point `i`), which is the view the encoder sorts on. The same rows can be
//! turned into named `DataPoint`s for classification.

use crate::error::{DTreeError, Result};
use crate::feature::Feature;
use crate::value::{DataPoint, Value};

/// A labeled dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<Feature>,
    rows: Vec<Vec<Value>>,
    labels: Vec<String>,
}

impl Dataset {
    /// Creates a dataset
    ///
    /// # Errors
    /// Returns an error if a row does not have one value per feature, if rows and
    /// labels differ in count, or if a value is outside its feature's domain
    pub fn new(features: Vec<Feature>, rows: Vec<Vec<Value>>, labels: Vec<String>) -> Result<Self> {
        if rows.len() != labels.len() {
            return Err(DTreeError::LengthMismatch {
                data: rows.len(),
                labels: labels.len(),
            });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != features.len() {
                return Err(DTreeError::InvalidArgument(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    features.len()
                )));
            }
            for (feature, value) in features.iter().zip(row) {
                if !feature.validate_value(value) {
                    return Err(DTreeError::InvalidFeatureValue {
                        feature: feature.name().to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            features,
            rows,
            labels,
        })
    }

    /// Returns the features (column order)
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Returns the rows
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of data points
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data points
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column indices of all features
    pub fn feature_indices(&self) -> Vec<usize> {
        (0..self.features.len()).collect()
    }

    /// Returns row `i` as a named data point
    pub fn point(&self, i: usize) -> Option<DataPoint> {
        self.rows.get(i).map(|row| {
            self.features
                .iter()
                .zip(row)
                .map(|(feature, value)| (feature.name(), value.clone()))
                .collect()
        })
    }

    /// Returns every row as a named data point
    pub fn points(&self) -> Vec<DataPoint> {
        (0..self.rows.len()).filter_map(|i| self.point(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> Vec<Feature> {
        vec![
            Feature::numeric("age"),
            Feature::categorical("color", ["red", "blue"]),
        ]
    }

    #[test]
    fn builds_named_points() {
        let dataset = Dataset::new(
            features(),
            vec![vec![25.into(), "red".into()], vec![35.into(), "blue".into()]],
            vec!["yes".to_string(), "no".to_string()],
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.feature_indices(), vec![0, 1]);

        let point = dataset.point(1).unwrap();
        assert_eq!(point.get("age"), Some(&Value::from(35)));
        assert_eq!(point.get("color"), Some(&Value::from("blue")));
        assert!(dataset.point(2).is_none());
        assert_eq!(dataset.points().len(), 2);
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = Dataset::new(features(), vec![vec![25.into(), "red".into()]], vec![]).unwrap_err();
        assert_eq!(err, DTreeError::LengthMismatch { data: 1, labels: 0 });
    }

    #[test]
    fn rejects_short_row() {
        let err = Dataset::new(features(), vec![vec![25.into()]], vec!["yes".to_string()]).unwrap_err();
        assert!(matches!(err, DTreeError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_out_of_domain_value() {
        let err = Dataset::new(
            features(),
            vec![vec![25.into(), "green".into()]],
            vec!["yes".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, DTreeError::InvalidFeatureValue { .. }));
    }
}
