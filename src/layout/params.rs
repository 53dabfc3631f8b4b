//! Global layout parameters for invalidation tracking.

/// Global parameters that affect every item's height and placement.
///
/// Used for invalidation: if current params != last pass params, cached
/// heights were measured at a different column width and must be dropped,
/// and a fresh provider is built.
///
/// # Equality Semantics
/// Two LayoutParams are equal if they would produce identical column widths
/// (assuming spacing and insets unchanged).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Total available width, insets included.
    pub total_width: f64,
    /// Number of columns.
    pub columns: usize,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(total_width: f64, columns: usize) -> Self {
        Self {
            total_width,
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_same_params() {
        let params1 = LayoutParams::new(336.0, 2);
        let params2 = LayoutParams::new(336.0, 2);
        assert_eq!(params1, params2);
    }

    #[test]
    fn test_inequality_different_width() {
        let params1 = LayoutParams::new(336.0, 2);
        let params2 = LayoutParams::new(768.0, 2);
        assert_ne!(params1, params2);
    }

    #[test]
    fn test_inequality_different_columns() {
        let params1 = LayoutParams::new(336.0, 2);
        let params2 = LayoutParams::new(336.0, 3);
        assert_ne!(params1, params2);
    }
}
