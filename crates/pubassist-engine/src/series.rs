//! Dense alignment of sparse, independently-arriving time series.
//!
//! Each series is a sparse mapping label → value (labels are calendar
//! periods). [`SeriesMatrix`] keeps the union of all labels sorted and
//! one value per series for every label, so the result can be handed to
//! a chart as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label the backend emits for values it cannot attribute to a period.
pub const NULL_LABEL: &str = "null";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesMatrix {
    labels: Vec<String>,
    series_names: Vec<String>,
    cells: BTreeMap<String, Vec<f64>>,
    matrix: Vec<Vec<f64>>,
}

impl SeriesMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted label axis.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Series names in insertion order.
    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    /// Label → one value per series, in `series_names` order.
    pub fn cells(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.cells
    }

    /// `matrix[s][l]` is the value of series `s` at `labels[l]`.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn is_empty(&self) -> bool {
        self.series_names.is_empty()
    }

    pub fn contains_series(&self, name: &str) -> bool {
        self.series_index(name).is_some()
    }

    fn series_index(&self, name: &str) -> Option<usize> {
        self.series_names.iter().position(|s| s == name)
    }

    /// Merge a sparse series as the last column.
    ///
    /// Points keyed `"null"` or carrying no value are skipped. Labels not
    /// seen before start with 0 for every existing series, and labels the
    /// new series does not mention get 0 for it. Merging a name that is
    /// already present replaces that series.
    pub fn merge_series<I, K>(&mut self, name: impl Into<String>, points: I)
    where
        I: IntoIterator<Item = (K, Option<f64>)>,
        K: Into<String>,
    {
        let name = name.into();
        self.remove_series(&name);

        let column = self.series_names.len();
        for (label, value) in points {
            let label = label.into();
            if label == NULL_LABEL {
                continue;
            }
            let Some(value) = value else {
                continue;
            };

            let row = self
                .cells
                .entry(label)
                .or_insert_with(|| vec![0.0; column]);
            if row.len() == column {
                row.push(value);
            } else {
                // repeated label within one payload, last value wins
                row[column] = value;
            }
        }

        for row in self.cells.values_mut() {
            row.resize(column + 1, 0.0);
        }
        self.series_names.push(name);

        self.refresh();
    }

    /// Drop a series and its column. Returns `false` when it was not present.
    ///
    /// Labels are kept even if no remaining series has a value for them.
    pub fn remove_series(&mut self, name: &str) -> bool {
        let Some(index) = self.series_index(name) else {
            return false;
        };

        for row in self.cells.values_mut() {
            if index < row.len() {
                row.remove(index);
            }
        }
        self.series_names.remove(index);

        self.refresh();
        true
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.series_names.clear();
        self.cells.clear();
        self.matrix.clear();
    }

    /// Project `cells` onto a series × label matrix.
    pub fn rebuild_matrix(&self) -> Vec<Vec<f64>> {
        (0..self.series_names.len())
            .map(|series| {
                self.labels
                    .iter()
                    .map(|label| {
                        self.cells
                            .get(label)
                            .and_then(|row| row.get(series))
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect()
    }

    /// One series as label → value, dense over all labels.
    pub fn column(&self, name: &str) -> Option<BTreeMap<String, f64>> {
        let index = self.series_index(name)?;
        Some(
            self.cells
                .iter()
                .map(|(label, row)| (label.clone(), row.get(index).copied().unwrap_or(0.0)))
                .collect(),
        )
    }

    fn refresh(&mut self) {
        self.labels = self.cells.keys().cloned().collect();
        self.matrix = self.rebuild_matrix();
    }
}
