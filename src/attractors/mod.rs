//! Results of attractor computations and the interface of external attractor solvers.
//!
//! The model never computes attractors itself. It renders its working equations as `.bnet`
//! and hands them to an `AttractorSolver`, which returns a list of `Attractor`s. Each
//! attractor is a partial assignment of network nodes, where a node can be `0`, `1`, or `-`
//! (any value, e.g. a node that oscillates inside a trap space).
//!
//! Two solver families are supported: trap-space enumeration (minimal trap spaces, which
//! approximate all attractors) and stable-state enumeration (fixed points only). Which one is
//! used is decided by the name of the attractor tool, see `AttractorTool::from_name`.

/// **(internal)** Basic convenience methods for extended Booleans, like display and parsing.
mod _impl_extended_boolean;

/// **(internal)** Basic convenience methods for working with attractors.
mod _impl_attractor;

/// An enum representing the possible state of each node in an attractor.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExtendedBoolean {
    Zero,
    One,
    Any,
}

/// A partial assignment of node states, as reported by an attractor solver.
///
/// Nodes are kept in the order in which they were inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attractor(Vec<(String, ExtendedBoolean)>);

/// The family of attractor solver that should be used for a model.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttractorTool {
    /// Minimal trap spaces (e.g. `mpbn_trapspaces`, `pyboolnet_trapspaces`).
    TrapSpaces,
    /// Fixed points only (e.g. `biolqm_stable_states`).
    StableStates,
}

impl AttractorTool {
    /// Select the solver family from a tool name: names containing `stable` select
    /// `StableStates`, everything else selects `TrapSpaces`.
    pub fn from_name(tool_name: &str) -> AttractorTool {
        if tool_name.contains("stable") {
            AttractorTool::StableStates
        } else {
            AttractorTool::TrapSpaces
        }
    }
}

/// An external attractor solver.
///
/// Both methods receive a complete `.bnet` model and are expected to be synchronous. Errors
/// are reported as plain messages and are propagated to the caller without modification.
pub trait AttractorSolver {
    /// Enumerate the minimal trap spaces of the model.
    fn trap_spaces(&self, bnet: &str) -> Result<Vec<Attractor>, String>;

    /// Enumerate the stable states (fixed points) of the model.
    fn stable_states(&self, bnet: &str) -> Result<Vec<Attractor>, String>;

    /// Dispatch to the method that corresponds to `tool`.
    fn compute(&self, tool: AttractorTool, bnet: &str) -> Result<Vec<Attractor>, String> {
        match tool {
            AttractorTool::TrapSpaces => self.trap_spaces(bnet),
            AttractorTool::StableStates => self.stable_states(bnet),
        }
    }
}
