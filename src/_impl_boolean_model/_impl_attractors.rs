use crate::{Attractor, AttractorSolver, AttractorTool, BooleanModel, ModelError, ModelOutputs};
use log::{debug, info};

impl BooleanModel {
    /// Compute the attractors of the working equations with the solver family selected by
    /// `tool_name` (see `AttractorTool::from_name`) and store them in the model.
    ///
    /// The first successful computation after loading a `.bnet` file uses the file text as
    /// is. Later computations render the working equations. Solver errors are returned as
    /// `ModelError::Solver` and leave the model untouched.
    pub fn calculate_attractors(
        &mut self,
        tool_name: &str,
        solver: &dyn AttractorSolver,
    ) -> Result<&[Attractor], ModelError> {
        let tool = AttractorTool::from_name(tool_name);
        let bnet = match &self.source_bnet {
            Some(source) => source.clone(),
            None => self.to_bnet(),
        };
        debug!(
            "Computing attractors of `{}` using {:?} ({}).",
            self.model_name, tool, tool_name
        );
        let attractors = solver.compute(tool, &bnet).map_err(ModelError::Solver)?;
        self.source_bnet = None;
        info!(
            "Found {} attractors of `{}`.",
            attractors.len(),
            self.model_name
        );
        self.attractor_tool = tool_name.to_string();
        self.attractors = attractors;
        Ok(&self.attractors)
    }

    /// Compute the global output of the model as the average, over all attractors, of the
    /// weighted sum of output node values. A don't-care node contributes half of its weight.
    ///
    /// With `normalized`, the result is rescaled into `[0, 1]` using the bounds of `outputs`.
    pub fn calculate_global_output(
        &mut self,
        outputs: &ModelOutputs,
        normalized: bool,
    ) -> Result<f64, ModelError> {
        if self.attractors.is_empty() {
            return Err(ModelError::NoAttractors);
        }
        let total: f64 = self
            .attractors
            .iter()
            .map(|attractor| {
                outputs
                    .weights()
                    .filter_map(|(node, weight)| {
                        attractor.get(node).map(|state| weight * state.as_value())
                    })
                    .sum::<f64>()
            })
            .sum();
        let mut output = total / self.attractors.len() as f64;
        if normalized {
            let (min, max) = (outputs.min_output(), outputs.max_output());
            if max.is_nan() || min.is_nan() || max <= min {
                return Err(ModelError::InvalidOutputs(format!(
                    "Cannot normalise with minimum output {} and maximum output {}.",
                    min, max
                )));
            }
            output = (output - min) / (max - min);
        }
        self.global_output = output;
        Ok(output)
    }

    /// Replace the attractors of this model, e.g. with results computed elsewhere.
    pub fn set_attractors(&mut self, attractors: Vec<Attractor>) {
        self.attractors = attractors;
    }

    /// Forget computed attractors and the global output derived from them.
    pub fn reset_attractors(&mut self) {
        self.attractors.clear();
        self.global_output = 0.0;
    }

    pub fn has_attractors(&self) -> bool {
        !self.attractors.is_empty()
    }

    /// Attractors without any don't-care nodes.
    pub fn stable_states(&self) -> Vec<&Attractor> {
        self.attractors
            .iter()
            .filter(|it| it.is_stable_state())
            .collect()
    }

    pub fn has_stable_states(&self) -> bool {
        self.attractors.iter().any(|it| it.is_stable_state())
    }

    /// True if a non-zero global output was computed.
    pub fn has_global_output(&self) -> bool {
        self.global_output != 0.0
    }
}
