use crate::_impl_perturbation::perturb_equations;
use crate::{BooleanModel, Perturbation, PerturbationEffect};

impl BooleanModel {
    /// Fix every node in `node_names` to the value given by `effect`, replacing its working
    /// equation with a constant rule.
    ///
    /// Names that are not nodes of the model are skipped and returned. If every name is
    /// skipped, the model is not modified.
    pub fn perturb_nodes<S: AsRef<str>>(
        &mut self,
        node_names: &[S],
        effect: PerturbationEffect,
    ) -> Vec<String> {
        let skipped = perturb_equations(&mut self.updated_boolean_equations, node_names, effect);
        if skipped.len() < node_names.len() {
            self.working_equations_changed();
        }
        skipped
    }

    /// Apply perturbations in order, without recording them. Later perturbations override
    /// earlier ones on shared targets.
    ///
    /// Returns the skipped target names of all perturbations.
    pub fn apply_perturbations(&mut self, perturbations: &[Perturbation]) -> Vec<String> {
        let mut skipped = Vec::new();
        for perturbation in perturbations {
            let targets = perturbation.targets.as_slice();
            skipped.extend(self.perturb_nodes(targets, perturbation.effect));
        }
        skipped
    }

    /// Apply perturbations (like `apply_perturbations`) and make them the perturbation
    /// records of this model, replacing any previous records. Equations fixed by earlier
    /// calls stay fixed.
    pub fn add_perturbations(&mut self, perturbations: Vec<Perturbation>) -> Vec<String> {
        let skipped = self.apply_perturbations(&perturbations);
        self.perturbations = perturbations;
        skipped
    }
}

#[cfg(test)]
mod tests {
    use crate::_impl_boolean_model::tests::MODEL;
    use crate::{BooleanModel, MutationType, Perturbation, PerturbationEffect};
    use pretty_assertions::assert_eq;

    #[test]
    fn perturb_nodes_fixes_output() {
        let mut model = BooleanModel::from_bnet_string("test", MODEL, MutationType::Mixed).unwrap();
        let skipped = model.perturb_nodes(&["A"], PerturbationEffect::Inhibits);
        assert!(skipped.is_empty());
        assert_eq!("A, 0\nB, A | C\nC, !A", model.to_bnet());
        assert_eq!(Some(false), model.updated_boolean_equations()[0].constant_value());
        // The constant placeholder is a single flag without a link.
        assert_eq!(&[1, 1, 1, 1], model.binary_boolean_equations());
        assert_eq!(None, model.bnet_equations());
        assert_eq!("A, B & !C", model.boolean_equations()[0].to_bnet());
    }

    #[test]
    fn perturbations_apply_in_order() {
        let mut model = BooleanModel::from_bnet_string("test", MODEL, MutationType::Mixed).unwrap();
        let skipped = model.add_perturbations(vec![
            Perturbation::new(&["A", "B"], PerturbationEffect::Inhibits),
            Perturbation::new(&["B", "Unknown"], PerturbationEffect::from_name("activates")),
        ]);
        assert_eq!(vec!["Unknown".to_string()], skipped);
        assert_eq!("A, 0\nB, 1\nC, !A", model.to_bnet());
        assert_eq!(2, model.perturbations().len());

        model.apply_perturbations(&[Perturbation::new(&["C"], PerturbationEffect::Activates)]);
        assert_eq!("A, 0\nB, 1\nC, 1", model.to_bnet());
        assert_eq!(2, model.perturbations().len());
    }

    #[test]
    fn records_are_replaced() {
        let mut model = BooleanModel::from_bnet_string("test", MODEL, MutationType::Mixed).unwrap();
        model.add_perturbations(vec![Perturbation::new(&["A"], PerturbationEffect::Inhibits)]);
        let second = vec![Perturbation::new(&["C"], PerturbationEffect::Activates)];
        model.add_perturbations(second.clone());
        assert_eq!(second.as_slice(), model.perturbations());
        assert_eq!("A, 0\nB, A | C\nC, 1", model.to_bnet());
    }

    #[test]
    fn unknown_targets_keep_model_unchanged() {
        let source = "A, B | !C\nB, A | C\nC, !A";
        let mut model =
            BooleanModel::from_bnet_string("test", source, MutationType::Mixed).unwrap();
        let skipped = model.perturb_nodes(&["Unknown"], PerturbationEffect::Inhibits);
        assert_eq!(vec!["Unknown".to_string()], skipped);
        assert_eq!(Some(source), model.bnet_equations());
        assert_eq!(&[1, 1, 1, 1, 1, 1], model.binary_boolean_equations());

        let skipped = model.perturb_nodes::<&str>(&[], PerturbationEffect::Activates);
        assert!(skipped.is_empty());
        assert_eq!(Some(source), model.bnet_equations());
    }
}
