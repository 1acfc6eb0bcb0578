//! Evaluation statistics.

use std::collections::HashMap;
use std::hash::Hash;

use ndarray::{Array1, Array2};

/// Proportion of each unique label, rounded to 2 decimal places.
pub fn label_proportions<T: Eq + Hash + Clone>(labels: &[T]) -> HashMap<T, f64> {
    let total = labels.len() as f64;
    let mut counts: HashMap<T, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label.clone()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| (label, (count as f64 / total * 100.0).round() / 100.0))
        .collect()
}

/// Counts of (true, predicted) pairs over the given label set.
///
/// Rows are true labels, columns predicted labels, both in `labels` order.
/// Pairs involving a label outside `labels` are skipped.
pub fn confusion_matrix<T: PartialEq>(y_true: &[T], y_pred: &[T], labels: &[T]) -> Array2<u64> {
    let mut mx = Array2::zeros((labels.len(), labels.len()));
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        let row = labels.iter().position(|l| l == t);
        let col = labels.iter().position(|l| l == p);
        if let (Some(row), Some(col)) = (row, col) {
            mx[[row, col]] += 1;
        }
    }
    mx
}

/// Confusion matrix with each row normalized by its total.
///
/// Rows with no observations stay all-zero.
pub fn normalized_confusion_matrix<T: PartialEq>(
    y_true: &[T],
    y_pred: &[T],
    labels: &[T],
) -> Array2<f64> {
    let counts = confusion_matrix(y_true, y_pred, labels);
    let mut normalized = counts.mapv(|c| c as f64);
    for mut row in normalized.rows_mut() {
        let total: f64 = row.sum();
        if total > 0.0 {
            row.mapv_inplace(|v| v / total);
        }
    }
    normalized
}

/// Residual series: actual minus predicted.
pub fn residuals(y_true: &[f64], y_pred: &[f64]) -> Array1<f64> {
    y_true.iter().zip(y_pred.iter()).map(|(t, p)| t - p).collect()
}
