//! # Geometry Calculation Engine
//!
//! Pure functions mapping shape parameters to a [`CalculationResult`]:
//! area, perimeter, the human-readable formula used, and an ordered list of
//! derivation steps suitable for display to a student.
//!
//! ## Contract
//!
//! - No side effects, no hidden state: calling a function twice with the
//!   same input yields value-equal results.
//! - No internal validation: the functions are total over positive numeric
//!   input. Callers in interactive flows run the [`validate`] predicates
//!   first; degenerate input (e.g. three sides violating the triangle
//!   inequality) propagates as NaN rather than panicking.
//! - Display strings are Spanish and part of the contract: the UI renders
//!   `formula` and `steps` verbatim, and tests pin them.
//!
//! ## Modules
//!
//! - [`formulas`] - One calculation function per shape kind
//! - [`validate`] - Boolean input predicates for interactive validation

pub mod formulas;
pub mod validate;

// Re-export commonly used items
pub use formulas::{
    calculate_circle, calculate_rectangle, calculate_regular_polygon, calculate_square,
    calculate_triangle_by_base_height, calculate_triangle_by_sides, round2,
};
pub use validate::{validate_polygon, validate_positive, validate_triangle};

use serde::{Deserialize, Serialize};

/// A geometric figure together with its defining dimensions.
///
/// All lengths are positive by contract (checked by the caller through
/// [`validate`], not enforced here). Serialized tags match the shape
/// identifiers the UI layer stores (`"square"`, `"triangle-base"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Square {
        side: f64,
    },
    Rectangle {
        length: f64,
        width: f64,
    },
    Circle {
        radius: f64,
    },
    #[serde(rename = "triangle-base")]
    TriangleByBaseHeight {
        base: f64,
        height: f64,
    },
    #[serde(rename = "triangle-sides")]
    TriangleBySides {
        a: f64,
        b: f64,
        c: f64,
    },
    #[serde(rename = "polygon")]
    RegularPolygon {
        sides: u32,
        side_length: f64,
    },
}

impl ShapeKind {
    /// Spanish display name, as shown in the shape selector.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square { .. } => "Cuadrado",
            ShapeKind::Rectangle { .. } => "Rectángulo",
            ShapeKind::Circle { .. } => "Círculo",
            ShapeKind::TriangleByBaseHeight { .. } => "Triángulo (Base-Altura)",
            ShapeKind::TriangleBySides { .. } => "Triángulo (3 Lados)",
            ShapeKind::RegularPolygon { .. } => "Polígono Regular",
        }
    }

    /// Dispatch to the calculation function for this shape kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edu_core::geometry::ShapeKind;
    ///
    /// let result = ShapeKind::Square { side: 5.0 }.calculate();
    /// assert_eq!(result.area, 25.0);
    /// ```
    pub fn calculate(&self) -> CalculationResult {
        match *self {
            ShapeKind::Square { side } => calculate_square(side),
            ShapeKind::Rectangle { length, width } => calculate_rectangle(length, width),
            ShapeKind::Circle { radius } => calculate_circle(radius),
            ShapeKind::TriangleByBaseHeight { base, height } => {
                calculate_triangle_by_base_height(base, height)
            }
            ShapeKind::TriangleBySides { a, b, c } => calculate_triangle_by_sides(a, b, c),
            ShapeKind::RegularPolygon { sides, side_length } => {
                calculate_regular_polygon(sides, side_length)
            }
        }
    }
}

/// Fixed formula text per shape kind, one string for area and one for
/// perimeter. Rendered verbatim by the UI next to the numeric result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub area: String,
    pub perimeter: String,
}

/// Ordered derivation steps, one line per substitution/simplification.
///
/// Never empty: when a value cannot be computed (a triangle's perimeter
/// from base and height alone), the single step explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    pub area: Vec<String>,
    pub perimeter: Vec<String>,
}

/// Result of a shape calculation.
///
/// `area` and `perimeter` carry full floating-point precision; values
/// embedded in `steps` follow the shared 2-decimal rounding policy
/// ([`round2`]). A structurally uncomputable quantity is `f64::NAN`, never
/// an error (only `TriangleByBaseHeight` produces one, for `perimeter`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub area: f64,
    pub perimeter: f64,
    pub formula: Formula,
    pub steps: Steps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let shapes = [
            ShapeKind::Square { side: 5.0 },
            ShapeKind::Rectangle {
                length: 8.0,
                width: 5.0,
            },
            ShapeKind::Circle { radius: 7.0 },
            ShapeKind::TriangleByBaseHeight {
                base: 6.0,
                height: 4.0,
            },
            ShapeKind::TriangleBySides {
                a: 5.0,
                b: 6.0,
                c: 7.0,
            },
            ShapeKind::RegularPolygon {
                sides: 6,
                side_length: 5.0,
            },
        ];
        for shape in shapes {
            let result = shape.calculate();
            assert!(result.area > 0.0, "{}: area = {}", shape.name(), result.area);
            assert!(!result.steps.area.is_empty());
            assert!(!result.steps.perimeter.is_empty());
        }
    }

    #[test]
    fn test_idempotent_calculation() {
        let shape = ShapeKind::Rectangle {
            length: 7.5,
            width: 4.2,
        };
        assert_eq!(shape.calculate(), shape.calculate());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ShapeKind::Square { side: 1.0 }.name(), "Cuadrado");
        assert_eq!(
            ShapeKind::RegularPolygon {
                sides: 6,
                side_length: 1.0
            }
            .name(),
            "Polígono Regular"
        );
    }

    #[test]
    fn test_serde_tags_match_ui_identifiers() {
        let json = serde_json::to_string(&ShapeKind::TriangleByBaseHeight {
            base: 6.0,
            height: 4.0,
        })
        .unwrap();
        assert!(json.contains("\"triangle-base\""), "json = {}", json);

        let json = serde_json::to_string(&ShapeKind::RegularPolygon {
            sides: 6,
            side_length: 5.0,
        })
        .unwrap();
        assert!(json.contains("\"polygon\""), "json = {}", json);

        let roundtrip: ShapeKind =
            serde_json::from_str("{\"type\":\"square\",\"side\":5.0}").unwrap();
        assert_eq!(roundtrip, ShapeKind::Square { side: 5.0 });
    }
}
