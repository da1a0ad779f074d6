//! Column width resolution.
//!
//! Turns an available width and either nothing (equal division) or a weight
//! per column into absolute column widths. Widths include the border and
//! padding overhead of each column; see [`CELL_OVERHEAD`](super::CELL_OVERHEAD).

use crate::RenderError;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }
}

/// Compute one width per column.
///
/// Without weights, every column gets `total_width / column_count` (the
/// remainder is dropped). With weights, each in `(0, 1]` and used as given,
/// column `i` gets `floor(total_width * weight_i)`; whenever the running sum
/// would pass `total_width` the column is cut to what is left, so later
/// columns may shrink to zero but the row never overflows.
///
/// # Example
///
/// ```rust
/// use textui_render::tabular::resolve_widths;
///
/// let equal = resolve_widths(100, 3, None).unwrap();
/// assert_eq!(equal.widths, vec![33, 33, 33]);
///
/// let weighted = resolve_widths(100, 3, Some(&[0.5, 0.4, 0.3])).unwrap();
/// assert_eq!(weighted.widths, vec![50, 40, 10]);
/// ```
pub fn resolve_widths(
    total_width: usize,
    column_count: usize,
    weights: Option<&[f64]>,
) -> Result<ResolvedWidths, RenderError> {
    if column_count == 0 {
        return Err(RenderError::NoColumns);
    }

    let Some(weights) = weights else {
        return Ok(ResolvedWidths {
            widths: vec![total_width / column_count; column_count],
        });
    };

    if weights.len() != column_count {
        return Err(RenderError::mismatch("width vector", column_count, weights.len()));
    }
    validate_weights(weights, 1.0)?;

    let mut widths = Vec::with_capacity(column_count);
    let mut used = 0usize;
    for weight in weights {
        let size = (total_width as f64 * weight).floor() as usize;
        let size = size.min(total_width - used);
        used += size;
        widths.push(size);
    }
    Ok(ResolvedWidths { widths })
}

/// Convert relative parts (e.g. `[40, 20, 10]`) into weights summing to 1.
pub fn normalize_weights(parts: &[f64]) -> Result<Vec<f64>, RenderError> {
    validate_weights(parts, f64::INFINITY)?;
    let sum: f64 = parts.iter().sum();
    Ok(parts.iter().map(|p| p / sum).collect())
}

fn validate_weights(weights: &[f64], max: f64) -> Result<(), RenderError> {
    for (column, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight <= 0.0 || weight > max {
            return Err(RenderError::InvalidWeight { column, weight });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_division_drops_remainder() {
        let resolved = resolve_widths(80, 3, None).unwrap();
        assert_eq!(resolved.widths, vec![26, 26, 26]);
        assert_eq!(resolved.total(), 78);
    }

    #[test]
    fn no_columns_is_an_error() {
        assert!(matches!(
            resolve_widths(80, 0, None),
            Err(RenderError::NoColumns)
        ));
    }

    #[test]
    fn weights_used_directly() {
        let resolved = resolve_widths(100, 2, Some(&[0.3, 0.3])).unwrap();
        assert_eq!(resolved.widths, vec![30, 30]);
    }

    #[test]
    fn overflowing_weights_are_clamped() {
        let resolved = resolve_widths(100, 3, Some(&[0.7, 0.6, 0.5])).unwrap();
        assert_eq!(resolved.widths, vec![70, 30, 0]);
        assert_eq!(resolved.total(), 100);
    }

    #[test]
    fn weight_count_must_match() {
        let err = resolve_widths(100, 3, Some(&[0.5, 0.5])).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MismatchedColumnCount {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn weights_outside_unit_interval_rejected() {
        assert!(resolve_widths(100, 1, Some(&[0.0])).is_err());
        assert!(resolve_widths(100, 1, Some(&[1.5])).is_err());
        assert!(resolve_widths(100, 1, Some(&[f64::NAN])).is_err());
        assert!(resolve_widths(100, 1, Some(&[1.0])).is_ok());
    }

    #[test]
    fn normalize_parts() {
        let weights = normalize_weights(&[40.0, 20.0, 20.0]).unwrap();
        assert_eq!(weights, vec![0.5, 0.25, 0.25]);
        assert!(normalize_weights(&[1.0, -1.0]).is_err());
    }

    #[test]
    fn resolved_accessors() {
        let resolved = resolve_widths(30, 3, None).unwrap();
        assert_eq!(resolved.len(), 3);
        assert!(!resolved.is_empty());
        assert_eq!(resolved.get(1), Some(10));
        assert_eq!(resolved.get(3), None);
    }

    proptest! {
        #[test]
        fn total_never_exceeds_available(
            total in 0usize..500,
            weights in proptest::collection::vec(0.01f64..=1.0, 1..8),
        ) {
            let resolved = resolve_widths(total, weights.len(), Some(&weights)).unwrap();
            prop_assert!(resolved.total() <= total);
        }

        #[test]
        fn equal_division_is_uniform(total in 0usize..500, count in 1usize..10) {
            let resolved = resolve_widths(total, count, None).unwrap();
            prop_assert!(resolved.iter().all(|w| w == total / count));
            prop_assert!(total - resolved.total() < count);
        }

        #[test]
        fn unit_weights_lose_at_most_one_per_column(total in 0usize..500, count in 1usize..8) {
            let parts = vec![1.0; count];
            let weights = normalize_weights(&parts).unwrap();
            let resolved = resolve_widths(total, count, Some(&weights)).unwrap();
            prop_assert!(resolved.total() <= total);
            prop_assert!(total - resolved.total() <= count);
        }
    }
}
