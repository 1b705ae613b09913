//! # Shape Formulas
//!
//! One calculation function per shape kind. Each returns a fresh
//! [`CalculationResult`] with the numeric values at full precision and the
//! Spanish formula/step text the UI renders verbatim.
//!
//! ## Notation
//!
//! - `A` = area, in `unidades²`
//! - `P` = perimeter, in `unidades`
//! - `s` = semi-perimeter (Heron's formula)
//! - `a` = apothem (regular polygons)
//!
//! ## Rounding
//!
//! Every value displayed inside `steps` goes through the same 2-decimal
//! round-half-up policy ([`round2`] / `fmt2`), so the step text always
//! agrees with what the quiz generator expects as a rounded answer.

use super::{CalculationResult, Formula, Steps};

/// Round to 2 decimal places, half away from zero.
///
/// This is the single rounding policy shared by the six shape functions and
/// the quiz generator's `correct_answer` field.
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::round2;
///
/// assert_eq!(round2(14.696938456699069), 14.7);
/// assert_eq!(round2(0.125), 0.13);
/// ```
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Format a value rounded to exactly 2 decimals for step text ("3.14").
///
/// NaN formats as "NaN", which only ever surfaces for a Heron area on an
/// invalid triangle; the UI shows such results as not computable.
fn fmt2(x: f64) -> String {
    format!("{:.2}", round2(x))
}

// =============================================================================
// SQUARE
// =============================================================================

/// Calculate area and perimeter of a square.
///
/// # Formulas
/// A = lado², P = 4 × lado
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::calculate_square;
///
/// let result = calculate_square(5.0);
/// assert_eq!(result.area, 25.0);
/// assert_eq!(result.perimeter, 20.0);
/// assert_eq!(result.steps.area[0], "A = 5²");
/// ```
pub fn calculate_square(side: f64) -> CalculationResult {
    let area = side * side;
    let perimeter = 4.0 * side;

    CalculationResult {
        area,
        perimeter,
        formula: Formula {
            area: "A = lado²".to_string(),
            perimeter: "P = 4 × lado".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("A = {}²", side),
                format!("A = {} unidades²", area),
            ],
            perimeter: vec![
                format!("P = 4 × {}", side),
                format!("P = {} unidades", perimeter),
            ],
        },
    }
}

// =============================================================================
// RECTANGLE
// =============================================================================

/// Calculate area and perimeter of a rectangle.
///
/// # Formulas
/// A = largo × ancho, P = 2 × (largo + ancho)
///
/// The perimeter derivation shows the intermediate sum before the final
/// multiplication (three steps).
pub fn calculate_rectangle(length: f64, width: f64) -> CalculationResult {
    let area = length * width;
    let perimeter = 2.0 * (length + width);

    CalculationResult {
        area,
        perimeter,
        formula: Formula {
            area: "A = largo × ancho".to_string(),
            perimeter: "P = 2 × (largo + ancho)".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("A = {} × {}", length, width),
                format!("A = {} unidades²", area),
            ],
            perimeter: vec![
                format!("P = 2 × ({} + {})", length, width),
                format!("P = 2 × {}", length + width),
                format!("P = {} unidades", perimeter),
            ],
        },
    }
}

// =============================================================================
// CIRCLE
// =============================================================================

/// Calculate area and circumference of a circle.
///
/// # Formulas
/// A = π × r², P = 2 × π × r
///
/// Returned values keep full precision; the step text rounds π and the
/// results to 2 decimals.
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::calculate_circle;
///
/// let result = calculate_circle(1.0);
/// assert!((result.area - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(result.steps.area[2], "A = 3.14 unidades²");
/// ```
pub fn calculate_circle(radius: f64) -> CalculationResult {
    let area = std::f64::consts::PI * radius * radius;
    let perimeter = 2.0 * std::f64::consts::PI * radius;

    CalculationResult {
        area,
        perimeter,
        formula: Formula {
            area: "A = π × r²".to_string(),
            perimeter: "P = 2 × π × r".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("A = π × {}²", radius),
                format!("A = {} × {}", fmt2(std::f64::consts::PI), radius * radius),
                format!("A = {} unidades²", fmt2(area)),
            ],
            perimeter: vec![
                format!("P = 2 × π × {}", radius),
                format!("P = 2 × {} × {}", fmt2(std::f64::consts::PI), radius),
                format!("P = {} unidades", fmt2(perimeter)),
            ],
        },
    }
}

// =============================================================================
// TRIANGLE (base and height)
// =============================================================================

/// Calculate the area of a triangle from base and height.
///
/// # Formula
/// A = (b × h) / 2
///
/// The perimeter cannot be derived from base and height alone: it is
/// returned as `f64::NAN` with a single explanatory step, never an error.
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::calculate_triangle_by_base_height;
///
/// let result = calculate_triangle_by_base_height(6.0, 4.0);
/// assert_eq!(result.area, 12.0);
/// assert!(result.perimeter.is_nan());
/// ```
pub fn calculate_triangle_by_base_height(base: f64, height: f64) -> CalculationResult {
    let area = (base * height) / 2.0;

    CalculationResult {
        area,
        perimeter: f64::NAN,
        formula: Formula {
            area: "A = (b × h) / 2".to_string(),
            perimeter: "P = a + b + c (necesitas los tres lados)".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("A = ({} × {}) / 2", base, height),
                format!("A = {} / 2", base * height),
                format!("A = {} unidades²", area),
            ],
            perimeter: vec![
                "Se necesitan los tres lados para calcular el perímetro".to_string(),
            ],
        },
    }
}

// =============================================================================
// TRIANGLE (three sides, Heron's formula)
// =============================================================================

/// Calculate area and perimeter of a triangle from its three sides.
///
/// # Formulas
/// A = √[s(s-a)(s-b)(s-c)] with s = (a+b+c)/2, P = a + b + c
///
/// The triangle inequality is NOT checked here ([`super::validate_triangle`]
/// exists for that). For sides that do not form a triangle the radicand goes
/// negative and the area is NaN; the function never panics.
pub fn calculate_triangle_by_sides(a: f64, b: f64, c: f64) -> CalculationResult {
    let perimeter = a + b + c;
    let s = perimeter / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).sqrt();

    CalculationResult {
        area,
        perimeter,
        formula: Formula {
            area: "A = √[s(s-a)(s-b)(s-c)], donde s = (a+b+c)/2".to_string(),
            perimeter: "P = a + b + c".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("s = ({} + {} + {}) / 2 = {}", a, b, c, s),
                format!("A = √[{} × ({}-{}) × ({}-{}) × ({}-{})]", s, s, a, s, b, s, c),
                format!("A = {} unidades²", fmt2(area)),
            ],
            perimeter: vec![
                format!("P = {} + {} + {}", a, b, c),
                format!("P = {} unidades", perimeter),
            ],
        },
    }
}

// =============================================================================
// REGULAR POLYGON
// =============================================================================

/// Calculate area and perimeter of a regular polygon from its side count
/// and side length.
///
/// # Formulas
/// P = n × lado, a = lado / (2 × tan(π/n)), A = (P × a) / 2
///
/// The area derivation displays the intermediate apothem rounded to 2
/// decimals before the final area. `sides` must be ≥ 3 for a meaningful
/// result ([`super::validate_polygon`]); the tangent is only undefined at
/// `sides = 0`, which the validator excludes.
///
/// # Example
///
/// ```rust
/// use edu_core::geometry::calculate_regular_polygon;
///
/// // Hexagon with side 10: apothem ≈ 8.66, area ≈ 259.81
/// let result = calculate_regular_polygon(6, 10.0);
/// assert_eq!(result.perimeter, 60.0);
/// assert!((result.area - 259.81).abs() < 0.01);
/// ```
pub fn calculate_regular_polygon(sides: u32, side_length: f64) -> CalculationResult {
    let n = sides as f64;
    let perimeter = n * side_length;
    let apothem = side_length / (2.0 * (std::f64::consts::PI / n).tan());
    let area = (perimeter * apothem) / 2.0;

    CalculationResult {
        area,
        perimeter,
        formula: Formula {
            area: "A = (P × a) / 2, donde a = apotema".to_string(),
            perimeter: "P = n × lado".to_string(),
        },
        steps: Steps {
            area: vec![
                format!("P = {} × {} = {}", sides, side_length, perimeter),
                format!("a = {}", fmt2(apothem)),
                format!("A = ({} × {}) / 2", perimeter, fmt2(apothem)),
                format!("A = {} unidades²", fmt2(area)),
            ],
            perimeter: vec![
                format!("P = {} × {}", sides, side_length),
                format!("P = {} unidades", perimeter),
            ],
        },
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
