//! # Aula CLI
//!
//! Terminal front-end for the Aula math module: an interactive geometry
//! calculator (áreas y perímetros, with step-by-step derivations) and a
//! challenge mode of 10 random questions graded with the engine's
//! tolerance rule. Module completion is persisted to a JSON progress file
//! in the working directory.

use std::io::{self, BufRead, Write};

use edu_core::geometry::{
    validate_polygon, validate_positive, validate_triangle, CalculationResult, ShapeKind,
};
use edu_core::modules::{module_info, ModuleId};
use edu_core::progress::{JsonProgressStore, ProgressStore};
use edu_core::quiz::QuizSession;

const PROGRESS_FILE: &str = "aula_progress.json";
const CHALLENGE_QUESTIONS: usize = 10;

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    read_line()
}

/// Ask for one positive dimension. Mirrors the browser form's validation:
/// a non-number or non-positive value aborts the calculation with a
/// friendly message.
fn prompt_dimension(label: &str) -> Option<f64> {
    let raw = prompt(&format!("{}: ", label));
    match raw.parse::<f64>() {
        Ok(value) if validate_positive(value) => Some(value),
        _ => {
            println!(
                "Por favor ingresa un valor válido para {}",
                label.to_lowercase()
            );
            None
        }
    }
}

fn main() {
    println!("Aula CLI - Geometría Interactiva");
    println!("================================");
    println!("Aprende a calcular áreas y perímetros de figuras geométricas");
    println!();

    let mut store = match JsonProgressStore::open(PROGRESS_FILE) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    loop {
        let progress = store.get(ModuleId::Math);
        if progress > 0 {
            println!("Progreso del módulo: {}%", progress);
            println!();
        }

        println!("Elige una figura:");
        println!("  1) Cuadrado");
        println!("  2) Rectángulo");
        println!("  3) Círculo");
        println!("  4) Triángulo (Base-Altura)");
        println!("  5) Triángulo (3 Lados)");
        println!("  6) Polígono Regular");
        println!("  7) Modo Reto");
        println!("  0) Salir");

        let shape = match prompt("> ").as_str() {
            "1" => prompt_dimension("Lado").map(|side| ShapeKind::Square { side }),
            "2" => (|| {
                let length = prompt_dimension("Largo")?;
                let width = prompt_dimension("Ancho")?;
                Some(ShapeKind::Rectangle { length, width })
            })(),
            "3" => prompt_dimension("Radio").map(|radius| ShapeKind::Circle { radius }),
            "4" => (|| {
                let base = prompt_dimension("Base")?;
                let height = prompt_dimension("Altura")?;
                Some(ShapeKind::TriangleByBaseHeight { base, height })
            })(),
            "5" => (|| {
                let a = prompt_dimension("Lado A")?;
                let b = prompt_dimension("Lado B")?;
                let c = prompt_dimension("Lado C")?;
                if !validate_triangle(a, b, c) {
                    println!("Esos lados no forman un triángulo válido");
                    return None;
                }
                Some(ShapeKind::TriangleBySides { a, b, c })
            })(),
            "6" => (|| {
                let sides = prompt_dimension("Número de lados")?.round() as u32;
                if !validate_polygon(sides) {
                    println!("Un polígono necesita al menos 3 lados");
                    return None;
                }
                let side_length = prompt_dimension("Longitud de cada lado")?;
                Some(ShapeKind::RegularPolygon { sides, side_length })
            })(),
            "7" => {
                run_challenge(&mut store);
                continue;
            }
            "0" | "salir" => break,
            _ => {
                println!("Opción no válida");
                continue;
            }
        };

        let Some(shape) = shape else {
            println!();
            continue;
        };

        let result = shape.calculate();
        print_result(&shape, &result);

        // First successful calculation takes the module to 50%; the
        // challenge is what completes it.
        if store.get(ModuleId::Math) < 50 {
            if let Err(e) = store.set(ModuleId::Math, 50) {
                eprintln!("Error: {}", e);
            }
        }
    }
}

fn print_result(shape: &ShapeKind, result: &CalculationResult) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", shape.name());
    println!("═══════════════════════════════════════");
    println!();
    println!("Área: {:.2} u²", result.area);
    println!("  Fórmula: {}", result.formula.area);
    println!("  Pasos:");
    for step in &result.steps.area {
        println!("    - {}", step);
    }
    println!();
    if result.perimeter.is_nan() {
        println!("Perímetro: no calculable");
    } else {
        println!("Perímetro: {:.2} u", result.perimeter);
    }
    println!("  Fórmula: {}", result.formula.perimeter);
    println!("  Pasos:");
    for step in &result.steps.perimeter {
        println!("    - {}", step);
    }
    println!();

    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("JSON:");
        println!("{}", json);
    }
    println!();
}

fn run_challenge(store: &mut JsonProgressStore) {
    let mut session = QuizSession::new(CHALLENGE_QUESTIONS, &mut rand::thread_rng());
    let total = session.len();

    println!();
    println!("═══════════════════════════════════════");
    println!("  MODO RETO - {} preguntas", total);
    println!("═══════════════════════════════════════");
    println!();

    while let Some(question) = session.current() {
        println!("Pregunta {} / {}", question.id, total);
        println!("{}", question.question);
        let correct_answer = question.correct_answer;

        let submitted = loop {
            match prompt("Tu respuesta: ").parse::<f64>() {
                Ok(value) => break value,
                Err(_) => println!("Ingresa un número"),
            }
        };

        match session.answer(submitted) {
            Some(true) => println!("¡Correcto!"),
            Some(false) => println!("Incorrecto. La respuesta correcta es: {}", correct_answer),
            None => break,
        }
        println!();
    }

    let math = module_info(ModuleId::Math);
    let final_percent = session.final_percent();
    let passed = session.passed(math.pass_threshold_pct);

    println!("═══════════════════════════════════════");
    println!(
        "  {} Obtuviste {} de {} correctas ({:.0}%)",
        if passed { "¡Felicidades!" } else { "¡Buen Intento!" },
        session.correct_count(),
        total,
        final_percent
    );
    println!("═══════════════════════════════════════");

    if passed {
        println!("¡Módulo Completado al 100%!");
        if let Err(e) = store.set(ModuleId::Math, 100) {
            eprintln!("Error: {}", e);
        }
    }
    println!();
}
