//! # Learning Module Registry
//!
//! Static metadata for the three learning modules: display info for the
//! navigation shell and the pass threshold each module's challenge applies
//! to a [`crate::quiz::QuizSession`] score.

use serde::{Deserialize, Serialize};

/// Identifier of a learning module, also used as the progress storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Math,
    Science,
    Social,
}

impl ModuleId {
    pub const ALL: [ModuleId; 3] = [ModuleId::Math, ModuleId::Science, ModuleId::Social];

    /// Stable key under which this module's progress is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            ModuleId::Math => "math",
            ModuleId::Science => "science",
            ModuleId::Social => "social",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<ModuleId> {
        match key {
            "math" => Some(ModuleId::Math),
            "science" => Some(ModuleId::Science),
            "social" => Some(ModuleId::Social),
            _ => None,
        }
    }
}

/// Display metadata and challenge policy for one learning module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Minimum challenge score (percent) that completes the module
    pub pass_threshold_pct: f64,
}

/// The three learning modules.
///
/// Thresholds are module policy, not a generator concern: the chemistry
/// quiz demands 80%, the other two 70%.
pub const MODULES: [ModuleInfo; 3] = [
    ModuleInfo {
        id: ModuleId::Math,
        name: "Matemáticas",
        icon: "📐",
        description: "Calculadora de geometría con áreas y perímetros",
        pass_threshold_pct: 70.0,
    },
    ModuleInfo {
        id: ModuleId::Science,
        name: "Ciencias Naturales",
        icon: "🔬",
        description: "Tabla periódica interactiva con 118 elementos",
        pass_threshold_pct: 80.0,
    },
    ModuleInfo {
        id: ModuleId::Social,
        name: "Ciencias Sociales",
        icon: "🗺️",
        description: "Geografía de Colombia con 32 departamentos",
        pass_threshold_pct: 70.0,
    },
];

/// Look up the registry entry for a module.
pub fn module_info(id: ModuleId) -> &'static ModuleInfo {
    match id {
        ModuleId::Math => &MODULES[0],
        ModuleId::Science => &MODULES[1],
        ModuleId::Social => &MODULES[2],
    }
}
