use crate::{BooleanEquation, Perturbation, PerturbationEffect};
use log::{debug, warn};

impl PerturbationEffect {
    /// Read an effect name: `inhibits` fixes targets to `0`, any other name fixes them to `1`.
    pub fn from_name(name: &str) -> PerturbationEffect {
        if name.trim() == "inhibits" {
            PerturbationEffect::Inhibits
        } else {
            PerturbationEffect::Activates
        }
    }

    /// The value that perturbed nodes are fixed to.
    pub fn fixed_value(&self) -> bool {
        match self {
            PerturbationEffect::Inhibits => false,
            PerturbationEffect::Activates => true,
        }
    }
}

impl Perturbation {
    pub fn new<S: AsRef<str>>(targets: &[S], effect: PerturbationEffect) -> Perturbation {
        Perturbation {
            targets: targets.iter().map(|it| it.as_ref().to_string()).collect(),
            effect,
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn effect(&self) -> PerturbationEffect {
        self.effect
    }
}

/// **(internal)** Replace the equations of all `nodes` with constant rules.
///
/// Returns the names that do not match any equation target. These are skipped.
pub(crate) fn perturb_equations<S: AsRef<str>>(
    equations: &mut [BooleanEquation],
    nodes: &[S],
    effect: PerturbationEffect,
) -> Vec<String> {
    let value = effect.fixed_value();
    let mut skipped = Vec::new();
    for node in nodes {
        let node = node.as_ref();
        if let Some(equation) = equations.iter_mut().find(|it| it.target == node) {
            *equation = BooleanEquation::constant(node, value);
            debug!("Node `{}` fixed to {}.", node, u8::from(value));
        } else {
            warn!("Perturbation target `{}` is not a node of the model.", node);
            skipped.push(node.to_string());
        }
    }
    skipped
}
