//! # edu_core - Educational Calculation & Quiz Engine
//!
//! `edu_core` is the computational heart of Aula, an educational application
//! for primary-school students. It provides the geometry calculation engine
//! (areas and perimeters with step-by-step derivations in Spanish), the
//! randomized quiz generator with its grading rule, and the per-module
//! progress store shared by the three learning modules.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Non-throwing math**: degenerate geometric input yields NaN, never a panic
//! - **JSON-First**: All public value types implement Serialize/Deserialize
//! - **Injectable randomness**: quiz generation takes any [`rand::Rng`],
//!   making sessions reproducible under a seeded generator
//!
//! ## Quick Start
//!
//! ```rust
//! use edu_core::geometry::calculate_square;
//!
//! let result = calculate_square(5.0);
//! assert_eq!(result.area, 25.0);
//! assert_eq!(result.perimeter, 20.0);
//! assert_eq!(result.formula.area, "A = lado²");
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Shape calculations (six kinds) and input validators
//! - [`quiz`] - Randomized question generation, grading, and sessions
//! - [`modules`] - Registry of the three learning modules and pass thresholds
//! - [`progress`] - Per-module completion store (memory or JSON file)
//! - [`errors`] - Structured error types

pub mod errors;
pub mod geometry;
pub mod modules;
pub mod progress;
pub mod quiz;

// Re-export commonly used types at crate root for convenience
pub use errors::{EduError, EduResult};
pub use geometry::{CalculationResult, ShapeKind};
pub use modules::{module_info, ModuleId, ModuleInfo};
pub use progress::{JsonProgressStore, MemoryProgressStore, ProgressStore};
pub use quiz::{generate_questions, is_answer_correct, QuizQuestion, QuizSession};
