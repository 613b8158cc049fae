use crate::_bnet_parser::parse_bnet;
use crate::{
    Attractor, BooleanEquation, BooleanModel, BooleanModelSource, InteractionTopology, ModelError,
    MutationType, Perturbation,
};
use fxhash::FxHashSet;
use log::info;
use std::path::Path;

/// **(internal)** Chromosome encoding, decoding and mutants of a model.
mod _impl_binary;
/// **(internal)** Attractor computation and global output aggregation.
mod _impl_attractors;
/// **(internal)** Node fixation on the working equations.
mod _impl_perturbations;

/// Methods for constructing new instances of `BooleanModel`s.
impl BooleanModel {
    /// Create a model from one of the supported sources.
    ///
    /// Returns `ModelError::MissingSource` if no source is given.
    pub fn new(
        source: Option<BooleanModelSource>,
        mutation_type: MutationType,
    ) -> Result<BooleanModel, ModelError> {
        match source {
            Some(BooleanModelSource::Topology(topology)) => {
                BooleanModel::from_topology(topology, mutation_type)
            }
            Some(BooleanModelSource::BnetFile(path)) => {
                BooleanModel::from_bnet_file(path, mutation_type)
            }
            Some(BooleanModelSource::Equations(equations)) => {
                BooleanModel::from_equations("", equations, mutation_type)
            }
            None => Err(ModelError::MissingSource),
        }
    }

    /// Create a model from an interaction topology. Every regulator starts enabled.
    pub fn from_topology(
        topology: &dyn InteractionTopology,
        mutation_type: MutationType,
    ) -> Result<BooleanModel, ModelError> {
        let equations = (0..topology.size())
            .map(|i| BooleanEquation::from_topology(topology, i))
            .collect::<Result<Vec<_>, _>>()?;
        check_unique_targets(&equations)?;
        Ok(BooleanModel::from_parts(
            topology.model_name(),
            equations,
            mutation_type,
            None,
        ))
    }

    /// Load a model from a `.bnet` file. The model is named after the path without its
    /// extension.
    pub fn from_bnet_file(path: &str, mutation_type: MutationType) -> Result<BooleanModel, ModelError> {
        info!("Loading Boolean model from file: {}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_string(),
            source,
        })?;
        if Path::new(path).extension().and_then(|it| it.to_str()) != Some("bnet") {
            return Err(ModelError::InvalidExtension(path.to_string()));
        }
        let name = path.rsplit_once('.').map(|(name, _)| name).unwrap_or(path);
        BooleanModel::from_bnet_string(name, &content, mutation_type)
    }

    /// Create a model from `.bnet` text.
    ///
    /// The text (without comments and headers) is kept and handed to the solver by the first
    /// attractor computation, unless the working equations change before that.
    pub fn from_bnet_string(
        model_name: &str,
        model_string: &str,
        mutation_type: MutationType,
    ) -> Result<BooleanModel, ModelError> {
        let equations = parse_bnet(model_string)?;
        let source = model_string
            .lines()
            .filter(|it| !crate::_bnet_parser::is_skipped_line(it))
            .map(|it| it.trim())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(BooleanModel::from_parts(
            model_name,
            equations,
            mutation_type,
            Some(source),
        ))
    }

    /// Create a model from an explicit list of equations.
    ///
    /// Returns `ModelError::DuplicateTarget` if two equations share a target.
    pub fn from_equations(
        model_name: &str,
        equations: Vec<BooleanEquation>,
        mutation_type: MutationType,
    ) -> Result<BooleanModel, ModelError> {
        check_unique_targets(&equations)?;
        Ok(BooleanModel::from_parts(
            model_name,
            equations,
            mutation_type,
            None,
        ))
    }

    /// Set the name of the attractor tool used by this model.
    pub fn with_attractor_tool(mut self, attractor_tool: &str) -> BooleanModel {
        self.attractor_tool = attractor_tool.to_string();
        self
    }

    /// **(internal)** Shared constructor; derives the chromosome immediately.
    fn from_parts(
        model_name: &str,
        equations: Vec<BooleanEquation>,
        mutation_type: MutationType,
        source_bnet: Option<String>,
    ) -> BooleanModel {
        let mut model = BooleanModel {
            model_name: model_name.to_string(),
            updated_boolean_equations: equations.clone(),
            boolean_equations: equations,
            binary_boolean_equations: Vec::new(),
            attractors: Vec::new(),
            attractor_tool: String::new(),
            global_output: 0.0,
            fitness: 0.0,
            mutation_type,
            perturbations: Vec::new(),
            source_bnet,
        };
        model.to_binary();
        model
    }

    /// Create a new model whose baseline is the current working state of this model.
    ///
    /// The chromosome, name, attractor tool, mutation type and fitness are copied. The
    /// original baseline, perturbation records, attractors and global output are not. Use
    /// `clone` to keep everything.
    pub fn derive_offspring(&self) -> BooleanModel {
        let mut offspring = BooleanModel::from_parts(
            &self.model_name,
            self.updated_boolean_equations.clone(),
            self.mutation_type,
            None,
        );
        offspring.binary_boolean_equations = self.binary_boolean_equations.clone();
        offspring.attractor_tool = self.attractor_tool.clone();
        offspring.fitness = self.fitness;
        offspring
    }
}

/// **(internal)** Every node of a model has at most one equation.
fn check_unique_targets(equations: &[BooleanEquation]) -> Result<(), ModelError> {
    let mut targets = FxHashSet::default();
    for equation in equations {
        if !targets.insert(equation.target.as_str()) {
            return Err(ModelError::DuplicateTarget(equation.target.clone()));
        }
    }
    Ok(())
}

/// Some basic utility methods for inspecting the `BooleanModel`.
impl BooleanModel {
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn set_model_name(&mut self, model_name: &str) {
        self.model_name = model_name.to_string();
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn attractor_tool(&self) -> &str {
        &self.attractor_tool
    }

    pub fn set_attractor_tool(&mut self, attractor_tool: &str) {
        self.attractor_tool = attractor_tool.to_string();
    }

    pub fn mutation_type(&self) -> MutationType {
        self.mutation_type
    }

    /// The equations the model was constructed with.
    pub fn boolean_equations(&self) -> &[BooleanEquation] {
        &self.boolean_equations
    }

    /// The working equations (after perturbations and decoding).
    pub fn updated_boolean_equations(&self) -> &[BooleanEquation] {
        &self.updated_boolean_equations
    }

    /// The chromosome of the working equations.
    pub fn binary_boolean_equations(&self) -> &[u8] {
        &self.binary_boolean_equations
    }

    pub fn perturbations(&self) -> &[Perturbation] {
        &self.perturbations
    }

    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn global_output(&self) -> f64 {
        self.global_output
    }

    /// The `.bnet` text of the source file, if it has not been used by an attractor
    /// computation yet.
    pub fn bnet_equations(&self) -> Option<&str> {
        self.source_bnet.as_deref()
    }

    /// Index of the working equation of `node_name`, or `None` if there is no such node.
    pub fn get_index_of_equation(&self, node_name: &str) -> Option<usize> {
        self.updated_boolean_equations
            .iter()
            .position(|it| it.target == node_name)
    }

    /// Replace the working equations and re-encode the chromosome.
    ///
    /// The new equations must describe the same targets, in the same order, as the baseline.
    pub fn set_updated_boolean_equations(
        &mut self,
        equations: Vec<BooleanEquation>,
    ) -> Result<(), ModelError> {
        if equations.len() != self.boolean_equations.len() {
            return Err(ModelError::EquationMismatch(format!(
                "expected {} equations, got {}",
                self.boolean_equations.len(),
                equations.len()
            )));
        }
        for (new, old) in equations.iter().zip(&self.boolean_equations) {
            if new.target != old.target {
                return Err(ModelError::EquationMismatch(format!(
                    "expected target `{}`, got `{}`",
                    old.target, new.target
                )));
            }
        }
        self.updated_boolean_equations = equations;
        self.working_equations_changed();
        Ok(())
    }

    /// Produce the `.bnet` text of the working equations.
    pub fn to_bnet(&self) -> String {
        crate::render_bnet(&self.updated_boolean_equations)
    }

    /// **(internal)** Keep the chromosome in sync and drop the raw source text after the
    /// working equations were modified.
    fn working_equations_changed(&mut self) {
        self.source_bnet = None;
        self.to_binary();
    }
}
