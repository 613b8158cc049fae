use crate::{ModelError, ModelOutputs};
use std::convert::TryFrom;

impl ModelOutputs {
    /// Create output weights with bounds derived from the weights themselves: the minimum is
    /// the sum of all negative weights, the maximum the sum of all positive weights.
    pub fn new(weights: Vec<(String, f64)>) -> ModelOutputs {
        let min_output = weights.iter().map(|(_, w)| w.min(0.0)).sum();
        let max_output = weights.iter().map(|(_, w)| w.max(0.0)).sum();
        ModelOutputs {
            weights,
            min_output,
            max_output,
        }
    }

    /// Create output weights with explicit normalisation bounds.
    pub fn with_bounds(
        weights: Vec<(String, f64)>,
        min_output: f64,
        max_output: f64,
    ) -> Result<ModelOutputs, ModelError> {
        if min_output.is_nan() || max_output.is_nan() || min_output >= max_output {
            return Err(ModelError::InvalidOutputs(format!(
                "Minimum output {} must be smaller than maximum output {}.",
                min_output, max_output
            )));
        }
        Ok(ModelOutputs {
            weights,
            min_output,
            max_output,
        })
    }

    /// Read output weights from a file (see `TryFrom<&str>` for the format).
    pub fn from_file(path: &str) -> Result<ModelOutputs, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_string(),
            source,
        })?;
        ModelOutputs::try_from(content.as_str())
    }

    /// Iterate over `(node, weight)` pairs in declaration order.
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(node, w)| (node.as_str(), *w))
    }

    pub fn weight(&self, node: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(name, _)| name == node)
            .map(|(_, w)| *w)
    }

    pub fn min_output(&self) -> f64 {
        self.min_output
    }

    pub fn max_output(&self) -> f64 {
        self.max_output
    }
}

/// Parse output weights from lines of the form `NODE WEIGHT` (separated by tabs or spaces).
/// Empty lines and `#` comments are skipped.
impl TryFrom<&str> for ModelOutputs {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut weights: Vec<(String, f64)> = Vec::new();
        for line in value.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let segments = line.split_whitespace().collect::<Vec<_>>();
            if segments.len() != 2 {
                return Err(ModelError::InvalidOutputs(format!(
                    "Unexpected line: `{}`",
                    line
                )));
            }
            let weight = segments[1].parse::<f64>().map_err(|_| {
                ModelError::InvalidOutputs(format!("Invalid weight in line `{}`.", line))
            })?;
            if weights.iter().any(|(node, _)| node == segments[0]) {
                return Err(ModelError::InvalidOutputs(format!(
                    "Duplicate weight for `{}`.",
                    segments[0]
                )));
            }
            weights.push((segments[0].to_string(), weight));
        }
        Ok(ModelOutputs::new(weights))
    }
}

#[cfg(test)]
mod tests {
    use crate::ModelOutputs;
    use std::convert::TryFrom;

    #[test]
    fn derived_bounds() {
        let outputs = ModelOutputs::new(vec![
            ("Prosurvival".to_string(), 1.0),
            ("Antisurvival".to_string(), -1.0),
            ("Growth".to_string(), 0.5),
        ]);
        assert_eq!(-1.0, outputs.min_output());
        assert_eq!(1.5, outputs.max_output());
        assert_eq!(Some(0.5), outputs.weight("Growth"));
        assert_eq!(None, outputs.weight("Other"));
    }

    #[test]
    fn explicit_bounds() {
        assert!(ModelOutputs::with_bounds(Vec::new(), 0.0, 0.0).is_err());
        let outputs = ModelOutputs::with_bounds(vec![("A".to_string(), 1.0)], -2.0, 2.0).unwrap();
        assert_eq!(-2.0, outputs.min_output());
        assert_eq!(2.0, outputs.max_output());
    }

    #[test]
    fn parse_outputs() {
        let outputs = ModelOutputs::try_from("# outputs\nA\t1\n\nB  -1.5\n").unwrap();
        let weights = outputs.weights().collect::<Vec<_>>();
        assert_eq!(vec![("A", 1.0), ("B", -1.5)], weights);
        assert_eq!(-1.5, outputs.min_output());
        assert_eq!(1.0, outputs.max_output());

        assert!(ModelOutputs::try_from("A").is_err());
        assert!(ModelOutputs::try_from("A x").is_err());
        assert!(ModelOutputs::try_from("A 1\nA 2").is_err());
    }
}
