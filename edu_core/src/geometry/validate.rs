//! # Input Validators
//!
//! Pure boolean predicates for user-facing validation flows. The calculation
//! functions in [`super::formulas`] do not call these: interactive callers
//! validate first, then calculate, so a bad value surfaces as a friendly
//! message instead of a NaN result.

/// True iff `x` is strictly positive. Zero is rejected.
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::validate_positive;
///
/// assert!(validate_positive(0.1));
/// assert!(!validate_positive(0.0));
/// assert!(!validate_positive(-5.0));
/// ```
#[inline]
pub fn validate_positive(x: f64) -> bool {
    x > 0.0
}

/// True iff `a`, `b`, `c` satisfy the strict triangle inequality in all
/// three permutations. Degenerate triangles (one side equal to the sum of
/// the other two) are rejected.
#[inline]
pub fn validate_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// True iff `sides` is enough to form a polygon (at least 3).
#[inline]
pub fn validate_polygon(sides: u32) -> bool {
    sides >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5.0));
        assert!(validate_positive(0.1));
        assert!(validate_positive(1000.0));
        assert!(!validate_positive(0.0));
        assert!(!validate_positive(-0.1));
        assert!(!validate_positive(-1000.0));
    }

    #[test]
    fn test_validate_triangle_valid() {
        assert!(validate_triangle(3.0, 4.0, 5.0));
        assert!(validate_triangle(5.0, 6.0, 7.0));
        assert!(validate_triangle(6.0, 6.0, 6.0));
        assert!(validate_triangle(3.5, 4.5, 5.5));
    }

    #[test]
    fn test_validate_triangle_degenerate() {
        // Sum of two sides exactly equals the third: not a triangle
        assert!(!validate_triangle(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_validate_triangle_invalid_any_permutation() {
        assert!(!validate_triangle(1.0, 2.0, 10.0));
        assert!(!validate_triangle(10.0, 1.0, 2.0));
        assert!(!validate_triangle(2.0, 10.0, 1.0));
        assert!(!validate_triangle(5.0, 5.0, 12.0));
    }

    #[test]
    fn test_validate_polygon() {
        assert!(validate_polygon(3));
        assert!(validate_polygon(4));
        assert!(validate_polygon(100));
        assert!(!validate_polygon(2));
        assert!(!validate_polygon(1));
        assert!(!validate_polygon(0));
    }
}
