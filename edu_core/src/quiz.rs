//! # Quiz Generator
//!
//! Produces randomized geometry questions for the challenge mode, grades
//! numeric answers with a fixed tolerance, and tracks a session's score.
//!
//! ## Randomness
//!
//! Every generating function takes `&mut impl Rng` so callers inject the
//! source: the CLI passes `thread_rng()`, tests pass a seeded [`StdRng`]
//! and get reproducible sessions.
//!
//! [`StdRng`]: rand::rngs::StdRng
//!
//! ## Grading
//!
//! A submitted answer is correct iff it lands strictly within
//! [`ANSWER_TOLERANCE`] of the expected value. The tolerance absorbs the
//! rounding slack of a hand calculation (a student using π ≈ 3.14), not
//! floating-point noise, and is a fixed design constant.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{round2, ShapeKind};

/// Absolute tolerance for grading a numeric answer.
///
/// Strict comparison: a difference of exactly 0.5 is wrong. Smaller would
/// reject legitimate hand-rounded answers, larger would accept wrong ones.
pub const ANSWER_TOLERANCE: f64 = 0.5;

/// Grade a submitted numeric answer against the expected value.
///
/// # Example
///
/// ```rust
/// use edu_core::quiz::is_answer_correct;
///
/// assert!(is_answer_correct(12.4, 12.0));
/// assert!(!is_answer_correct(12.5, 12.0));
/// ```
#[inline]
pub fn is_answer_correct(submitted: f64, correct_answer: f64) -> bool {
    (submitted - correct_answer).abs() < ANSWER_TOLERANCE
}

/// Which computed value a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    Area,
    Perimeter,
}

impl AnswerType {
    /// Spanish word used inside question text.
    pub fn word(self) -> &'static str {
        match self {
            AnswerType::Area => "área",
            AnswerType::Perimeter => "perímetro",
        }
    }
}

/// One generated challenge question.
///
/// Immutable once created; owned by the session that generated it.
/// `correct_answer` is rounded to 2 decimals with the same policy the
/// engine uses for step text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based, sequential within the session
    pub id: u32,
    pub shape: ShapeKind,
    pub question: String,
    pub correct_answer: f64,
    pub answer_type: AnswerType,
}

impl QuizQuestion {
    /// Multiple-choice options: the correct answer plus three decoys,
    /// shuffled.
    ///
    /// Decoys stay at least 1.0 away from every other option so none of
    /// them can fall inside the grading tolerance, and are kept positive
    /// so they remain plausible areas/perimeters.
    pub fn choices<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut options = vec![self.correct_answer];
        while options.len() < 4 {
            let offset = rng.gen_range(1.0..12.0);
            let candidate = if rng.gen::<bool>() {
                self.correct_answer + offset
            } else {
                self.correct_answer - offset
            };
            let candidate = round2(candidate);
            if candidate > 0.0 && options.iter().all(|&o| (o - candidate).abs() >= 1.0) {
                options.push(candidate);
            }
        }
        options.shuffle(rng);
        options
    }
}

/// Generate `count` random questions with sequential 1-based ids.
///
/// Shape kind and answer type are drawn uniformly, except that a
/// base-height triangle can only ask for its area (its perimeter is not
/// computable). Parameter ranges keep results at human scale: sides and
/// bases 3-12, radii 2-9, hexagon sides 3-7, and the three-sides triangle
/// is the fixed 5-6-7 from the lesson material.
///
/// `count == 0` yields an empty vector; there are no failure modes.
pub fn generate_questions<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(count);

    for id in 1..=count {
        let mut answer_type = if rng.gen::<f64>() > 0.5 {
            AnswerType::Area
        } else {
            AnswerType::Perimeter
        };

        let shape = match rng.gen_range(0..6) {
            0 => ShapeKind::Square {
                side: rng.gen_range(3..=12) as f64,
            },
            1 => ShapeKind::Rectangle {
                length: rng.gen_range(3..=12) as f64,
                width: rng.gen_range(3..=12) as f64,
            },
            2 => ShapeKind::Circle {
                radius: rng.gen_range(2..=9) as f64,
            },
            3 => {
                // Perimeter is undefined for base-height triangles
                answer_type = AnswerType::Area;
                ShapeKind::TriangleByBaseHeight {
                    base: rng.gen_range(3..=12) as f64,
                    height: rng.gen_range(3..=12) as f64,
                }
            }
            4 => ShapeKind::TriangleBySides {
                a: 5.0,
                b: 6.0,
                c: 7.0,
            },
            _ => ShapeKind::RegularPolygon {
                sides: 6,
                side_length: rng.gen_range(3..=7) as f64,
            },
        };

        let result = shape.calculate();
        let raw = match answer_type {
            AnswerType::Area => result.area,
            AnswerType::Perimeter => result.perimeter,
        };

        questions.push(QuizQuestion {
            id: id as u32,
            shape,
            question: question_text(&shape, answer_type),
            correct_answer: round2(raw),
            answer_type,
        });
    }

    questions
}

fn question_text(shape: &ShapeKind, answer_type: AnswerType) -> String {
    let word = answer_type.word();
    match *shape {
        ShapeKind::Square { side } => format!(
            "Calcula el {} de un cuadrado con lado de {} unidades",
            word, side
        ),
        ShapeKind::Rectangle { length, width } => format!(
            "Calcula el {} de un rectángulo de {} × {} unidades",
            word, length, width
        ),
        ShapeKind::Circle { radius } => format!(
            "Calcula el {} de un círculo con radio de {} unidades (redondea a 2 decimales)",
            word, radius
        ),
        ShapeKind::TriangleByBaseHeight { base, height } => format!(
            "Calcula el área de un triángulo con base {} y altura {} unidades",
            base, height
        ),
        ShapeKind::TriangleBySides { a, b, c } => format!(
            "Calcula el {} de un triángulo con lados {}, {} y {} unidades (redondea a 2 decimales)",
            word, a, b, c
        ),
        ShapeKind::RegularPolygon { side_length, .. } => format!(
            "Calcula el {} de un hexágono regular con lados de {} unidades (redondea a 2 decimales)",
            word, side_length
        ),
    }
}

/// A challenge session: a fixed set of questions answered in order.
///
/// The session owns its questions and score; grading applies the
/// [`ANSWER_TOLERANCE`] rule. An empty session (count 0) is degenerate and
/// immediately complete at 100%.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    questions: Vec<QuizQuestion>,
    current: usize,
    correct: usize,
}

impl QuizSession {
    /// Generate a fresh session of `count` questions.
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        QuizSession {
            id: Uuid::new_v4(),
            questions: generate_questions(count, rng),
            current: 0,
            correct: 0,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question awaiting an answer, or None when the session is done.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Grade the submitted answer for the current question and advance.
    ///
    /// Returns whether it was correct, or None if the session was already
    /// complete.
    pub fn answer(&mut self, submitted: f64) -> Option<bool> {
        let question = self.questions.get(self.current)?;
        let correct = is_answer_correct(submitted, question.correct_answer);
        if correct {
            self.correct += 1;
        }
        self.current += 1;
        Some(correct)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Score as a 0-100 percentage. An empty session counts as complete.
    pub fn final_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        (self.correct as f64 / self.questions.len() as f64) * 100.0
    }

    /// Whether the score meets the module's pass threshold (percent).
    pub fn passed(&self, threshold_pct: f64) -> bool {
        self.final_percent() >= threshold_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let questions = generate_questions(10, &mut rng(7));
        assert_eq!(questions.len(), 10);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, i as u32 + 1);
            assert!(!q.question.is_empty());
        }
    }

    #[test]
    fn test_zero_count_yields_empty() {
        assert!(generate_questions(0, &mut rng(7)).is_empty());
    }

    #[test]
    fn test_answers_rounded_to_two_decimals() {
        for q in generate_questions(50, &mut rng(11)) {
            let scaled = q.correct_answer * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "q{} answer {} not rounded",
                q.id,
                q.correct_answer
            );
            assert!(q.correct_answer > 0.0);
        }
    }

    #[test]
    fn test_base_height_triangle_always_asks_area() {
        // Enough draws to hit the base-height variant many times
        for q in generate_questions(200, &mut rng(3)) {
            if let ShapeKind::TriangleByBaseHeight { .. } = q.shape {
                assert_eq!(q.answer_type, AnswerType::Area, "q{}", q.id);
            }
        }
    }

    #[test]
    fn test_answer_matches_engine_output() {
        for q in generate_questions(50, &mut rng(21)) {
            let result = q.shape.calculate();
            let expected = match q.answer_type {
                AnswerType::Area => result.area,
                AnswerType::Perimeter => result.perimeter,
            };
            assert!(
                (q.correct_answer - expected).abs() < 0.005,
                "q{}: {} vs {}",
                q.id,
                q.correct_answer,
                expected
            );
        }
    }

    #[test]
    fn test_question_text_mentions_answer_type() {
        for q in generate_questions(50, &mut rng(5)) {
            match q.answer_type {
                AnswerType::Area => assert!(q.question.contains("área"), "{}", q.question),
                AnswerType::Perimeter => {
                    assert!(q.question.contains("perímetro"), "{}", q.question)
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_session() {
        let a = generate_questions(10, &mut rng(42));
        let b = generate_questions(10, &mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_questions(10, &mut rng(1));
        let b = generate_questions(10, &mut rng(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_grading_tolerance_is_strict() {
        assert!(is_answer_correct(12.4, 12.0));
        assert!(is_answer_correct(11.6, 12.0));
        assert!(!is_answer_correct(12.5, 12.0)); // exactly 0.5 off is wrong
        assert!(!is_answer_correct(11.5, 12.0));
        assert!(is_answer_correct(153.94, 153.94));
    }

    #[test]
    fn test_choices_contain_answer_and_are_distinct() {
        let mut r = rng(9);
        for q in generate_questions(20, &mut rng(9)) {
            let options = q.choices(&mut r);
            assert_eq!(options.len(), 4);
            assert!(options.contains(&q.correct_answer));
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert!((a - b).abs() >= 1.0, "too close: {} vs {}", a, b);
                }
                assert!(*a > 0.0);
            }
        }
    }

    #[test]
    fn test_session_scoring() {
        let mut session = QuizSession::new(10, &mut rng(13));
        assert_eq!(session.len(), 10);
        assert!(!session.is_complete());

        // Answer everything correctly using the known answers
        let answers: Vec<f64> = session.questions().iter().map(|q| q.correct_answer).collect();
        for submitted in answers {
            assert_eq!(session.answer(submitted), Some(true));
        }
        assert!(session.is_complete());
        assert_eq!(session.correct_count(), 10);
        assert_eq!(session.final_percent(), 100.0);
        assert!(session.passed(70.0));
        assert!(session.answer(1.0).is_none());
    }

    #[test]
    fn test_session_partial_score() {
        let mut session = QuizSession::new(10, &mut rng(17));
        let answers: Vec<(f64, bool)> = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i < 7 {
                    (q.correct_answer, true)
                } else {
                    (q.correct_answer + 100.0, false)
                }
            })
            .collect();
        for (submitted, expect) in answers {
            assert_eq!(session.answer(submitted), Some(expect));
        }
        assert_eq!(session.correct_count(), 7);
        assert!((session.final_percent() - 70.0).abs() < 1e-9);
        assert!(session.passed(70.0));
        assert!(!session.passed(80.0));
    }

    #[test]
    fn test_empty_session_is_immediately_complete() {
        let session = QuizSession::new(0, &mut rng(1));
        assert!(session.is_empty());
        assert!(session.is_complete());
        assert_eq!(session.final_percent(), 100.0);
        assert!(session.passed(70.0));
    }
}
