//! Schema and payload type generation from parsed metadata.

pub mod config;
pub mod reachability;
pub mod types;
pub mod typescript;

pub use config::GeneratorConfig;
pub use reachability::reachable_entities;
pub use typescript::TypeScriptGenerator;

use anyhow::Result;

use crate::metadata::Model;

/// A target-language backend. Takes the parsed model and returns the
/// complete generated module text; writing it anywhere is the caller's
/// job. Additional languages plug in as further implementations sharing
/// the model and reachability logic.
pub trait Generator {
    fn generate(&self, model: &Model) -> Result<String>;
}
