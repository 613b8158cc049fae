//! Boolean regulatory network models prepared for genetic-algorithm optimisation.
//!
//! Every node of a model has exactly one update rule, a `BooleanEquation`, which is an
//! OR-composition of *activating* regulators combined (using `&` or `|`) with an
//! OR-composition of negated *inhibitory* regulators. A `BooleanModel` keeps the baseline
//! equations, a mutable working copy and a flat binary chromosome that encodes the working
//! copy under one `MutationType`. Mutated chromosomes are decoded back into equations, the
//! equations are rendered as `.bnet` text for an external `AttractorSolver`, and the
//! resulting attractors are aggregated into a single global output.

#[macro_use]
extern crate lazy_static;

use fxhash::FxHashMap;

pub mod attractors;
pub mod codec;
pub mod error;
pub mod topology;

/// **(internal)** `.bnet` parser for single equations and whole models.
mod _bnet_parser;
/// **(internal)** Utility methods for `BinaryOp`.
mod _impl_binary_op;
/// **(internal)** Construction, invariants and BooleanNet-style display of `BooleanEquation`.
mod _impl_boolean_equation;
/// **(internal)** The `BooleanModel` container.
mod _impl_boolean_model;
/// **(internal)** `BooleanEquation` list to `.bnet` string.
mod _impl_equations_to_bnet;
/// **(internal)** Parsing and bounds of `ModelOutputs`.
mod _impl_model_outputs;
/// **(internal)** Node fixation semantics.
mod _impl_perturbation;
/// **(internal)** The ordered regulator map.
mod _impl_regulators;

pub use _bnet_parser::parse_bnet;
pub use _impl_equations_to_bnet::render_bnet;
pub use attractors::{Attractor, AttractorSolver, AttractorTool, ExtendedBoolean};
pub use codec::{EquationCodec, MutationType};
pub use error::{ModelError, Result};
pub use topology::{InteractionGraph, InteractionTopology};

/// Binary operators that can join regulators of a `BooleanEquation`.
///
/// In `.bnet`, `And` is written as `&` and `Or` as `|`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
}

/// An insertion-ordered mapping from regulator names to inclusion flags.
///
/// A flag of `1` means the regulator takes part in the update rule, `0` means it is
/// excluded (it is kept in the map so that the chromosome length stays fixed). The order
/// of insertion is the order in which the regulators are OR-joined when rendered.
#[derive(Clone, Debug, Default)]
pub struct Regulators {
    entries: Vec<(String, u8)>,
    name_to_index: FxHashMap<String, usize>,
}

/// The update rule of a single network node.
///
/// The `link` operator joins the activating and inhibitory clauses. It is `None` unless both
/// regulator groups are non-empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BooleanEquation {
    target: String,
    activating_regulators: Regulators,
    inhibitory_regulators: Regulators,
    activating_operators: Vec<BinaryOp>,
    inhibitory_operators: Vec<BinaryOp>,
    link: Option<BinaryOp>,
}

/// Effect of a perturbation on its target nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PerturbationEffect {
    /// Fixes the targets to `0`.
    Inhibits,
    /// Fixes the targets to `1`.
    Activates,
}

/// A group of nodes that are all fixed to the same value (e.g. the targets of one drug).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Perturbation {
    targets: Vec<String>,
    effect: PerturbationEffect,
}

/// Weights of model output nodes, used to aggregate attractors into a single value.
///
/// `min_output` and `max_output` are the extreme values the weighted sum can reach and are
/// used to normalise the global output into `[0,1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelOutputs {
    weights: Vec<(String, f64)>,
    min_output: f64,
    max_output: f64,
}

/// The initial source of equations used when constructing a `BooleanModel`.
pub enum BooleanModelSource<'a> {
    /// An upstream interaction topology; every regulator starts enabled.
    Topology(&'a dyn InteractionTopology),
    /// Path to a `.bnet` file.
    BnetFile(&'a str),
    /// An explicit list of equations.
    Equations(Vec<BooleanEquation>),
}

/// A Boolean model evolved by the genetic algorithm.
///
/// `boolean_equations` never change after construction. `updated_boolean_equations` is the
/// working copy that is modified by perturbations and by decoding chromosomes, and
/// `binary_boolean_equations` is its encoding under `mutation_type`.
#[derive(Clone, Debug)]
pub struct BooleanModel {
    model_name: String,
    boolean_equations: Vec<BooleanEquation>,
    updated_boolean_equations: Vec<BooleanEquation>,
    binary_boolean_equations: Vec<u8>,
    attractors: Vec<Attractor>,
    attractor_tool: String,
    global_output: f64,
    fitness: f64,
    mutation_type: MutationType,
    perturbations: Vec<Perturbation>,
    /// Raw `.bnet` text of the source file, used once by the first attractor computation.
    source_bnet: Option<String>,
}
