//! The upstream interaction topology from which initial equations are built.
//!
//! A topology lists, for every target node, its activating and its inhibitory regulators.
//! The model only depends on the `InteractionTopology` trait. `InteractionGraph` is a simple
//! implementation that can be read from regulation lines:
//!
//! ```text
//!  # Regulators of A
//!  B -> A
//!  C -| A
//!
//!  # The same in the tab-separated `.sif` style
//!  B	activates	A
//!  C	inhibits	A
//! ```

use crate::{BooleanEquation, ModelError};
use fxhash::FxHashMap;
use regex::Regex;

/// **(internal)** Parsing of regulation lines and files.
mod _impl_interaction_graph_parser;

lazy_static! {
    /// Matches a regulation written with an arrow, e.g. `a -> b` or `a -|? b`.
    static ref ARROW_REGULATION: Regex = Regex::new(
        r"^\s*(?P<regulator>[a-zA-Z0-9_{}]+)\s*-(?P<monotonicity>[>|])\??\s*(?P<target>[a-zA-Z0-9_{}]+)\s*$"
    ).unwrap();

    /// Matches a `.sif` interaction, e.g. `a activates b`.
    static ref SIF_REGULATION: Regex = Regex::new(
        r"^\s*(?P<regulator>[a-zA-Z0-9_{}]+)\s+(?P<monotonicity>activates|inhibits)\s+(?P<target>[a-zA-Z0-9_{}]+)\s*$"
    ).unwrap();
}

/// Possible monotonous effects of a regulation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Monotonicity {
    Activation,
    Inhibition,
}

/// An index-based source of target nodes and their regulators.
pub trait InteractionTopology {
    /// Name of the model described by this topology.
    fn model_name(&self) -> &str;

    /// Number of target nodes.
    fn size(&self) -> usize;

    /// Name of the target node at `index`.
    fn target(&self, index: usize) -> Option<&str>;

    /// Activating regulators of the target node at `index`, in order.
    fn activating_regulators(&self, index: usize) -> Option<&[String]>;

    /// Inhibitory regulators of the target node at `index`, in order.
    fn inhibitory_regulators(&self, index: usize) -> Option<&[String]>;
}

/// An in-memory interaction topology.
///
/// Targets are kept in the order in which their first regulation was added.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InteractionGraph {
    model_name: String,
    targets: Vec<String>,
    activating: Vec<Vec<String>>,
    inhibitory: Vec<Vec<String>>,
    target_to_index: FxHashMap<String, usize>,
}

impl InteractionGraph {
    pub fn new(model_name: &str) -> InteractionGraph {
        InteractionGraph {
            model_name: model_name.to_string(),
            ..Default::default()
        }
    }

    /// Add a regulation of `target` by `regulator`.
    ///
    /// Returns `Err` if the regulator already regulates the target (with any monotonicity).
    pub fn add_regulation(
        &mut self,
        regulator: &str,
        target: &str,
        monotonicity: Monotonicity,
    ) -> Result<(), ModelError> {
        let index = match self.target_to_index.get(target) {
            Some(index) => *index,
            None => {
                self.target_to_index
                    .insert(target.to_string(), self.targets.len());
                self.targets.push(target.to_string());
                self.activating.push(Vec::new());
                self.inhibitory.push(Vec::new());
                self.targets.len() - 1
            }
        };
        let is_duplicate = self.activating[index]
            .iter()
            .chain(self.inhibitory[index].iter())
            .any(|it| it == regulator);
        if is_duplicate {
            return Err(ModelError::InvalidRegulation(format!(
                "{} already regulates {}",
                regulator, target
            )));
        }
        let group = match monotonicity {
            Monotonicity::Activation => &mut self.activating[index],
            Monotonicity::Inhibition => &mut self.inhibitory[index],
        };
        group.push(regulator.to_string());
        Ok(())
    }

    /// Find the index of a target node.
    pub fn find_target(&self, name: &str) -> Option<usize> {
        self.target_to_index.get(name).cloned()
    }

    pub fn set_model_name(&mut self, name: &str) {
        self.model_name = name.to_string();
    }
}

impl InteractionTopology for InteractionGraph {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn size(&self) -> usize {
        self.targets.len()
    }

    fn target(&self, index: usize) -> Option<&str> {
        self.targets.get(index).map(|it| it.as_str())
    }

    fn activating_regulators(&self, index: usize) -> Option<&[String]> {
        self.activating.get(index).map(|it| it.as_slice())
    }

    fn inhibitory_regulators(&self, index: usize) -> Option<&[String]> {
        self.inhibitory.get(index).map(|it| it.as_slice())
    }
}

impl BooleanEquation {
    /// Build the equation of the target at `index`. Every regulator is enabled, regulators
    /// are joined by `Or` and the link is `And` when both groups are non-empty.
    pub fn from_topology(
        topology: &dyn InteractionTopology,
        index: usize,
    ) -> Result<BooleanEquation, ModelError> {
        let out_of_range = || ModelError::TopologyIndex {
            index,
            size: topology.size(),
        };
        let target = topology.target(index).ok_or_else(out_of_range)?;
        let activating = topology
            .activating_regulators(index)
            .ok_or_else(out_of_range)?;
        let inhibitory = topology
            .inhibitory_regulators(index)
            .ok_or_else(out_of_range)?;
        Ok(BooleanEquation::from_regulator_names(
            target, activating, inhibitory,
        ))
    }
}
