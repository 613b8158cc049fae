use crate::topology::{InteractionGraph, Monotonicity, ARROW_REGULATION, SIF_REGULATION};
use crate::ModelError;
use log::info;
use std::convert::TryFrom;
use std::path::Path;

impl InteractionGraph {
    /// Parse a single regulation line into `(regulator, monotonicity, target)`.
    ///
    /// Returns `None` if the line is not a valid regulation.
    pub fn try_parse_regulation(line: &str) -> Option<(String, Monotonicity, String)> {
        let captures = ARROW_REGULATION
            .captures(line)
            .or_else(|| SIF_REGULATION.captures(line))?;
        let monotonicity = match &captures["monotonicity"] {
            ">" | "activates" => Monotonicity::Activation,
            "|" | "inhibits" => Monotonicity::Inhibition,
            _ => return None,
        };
        Some((
            captures["regulator"].to_string(),
            monotonicity,
            captures["target"].to_string(),
        ))
    }

    /// Read an interaction graph from a file. The model is named after the file, without
    /// directories and extension.
    pub fn from_file(path: &str) -> Result<InteractionGraph, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut graph = InteractionGraph::try_from(content.as_str())?;
        let name = Path::new(path)
            .file_stem()
            .map(|it| it.to_string_lossy().to_string())
            .unwrap_or_default();
        graph.set_model_name(&name);
        info!(
            "Loaded interactions of {} targets from `{}`.",
            graph.targets.len(),
            path
        );
        Ok(graph)
    }
}

/// Read an unnamed interaction graph from regulation lines. Empty lines and `#` comments
/// are skipped.
impl TryFrom<&str> for InteractionGraph {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut graph = InteractionGraph::new("");
        for line in value.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (regulator, monotonicity, target) = InteractionGraph::try_parse_regulation(line)
                .ok_or_else(|| ModelError::InvalidRegulation(line.to_string()))?;
            graph.add_regulation(&regulator, &target, monotonicity)?;
        }
        Ok(graph)
    }
}
