use crate::BinaryOp::And;
use crate::BooleanEquation;

impl BooleanEquation {
    /// Produce the `.bnet` line of this equation (without a trailing newline).
    ///
    /// Enabled activating regulators are OR-joined, enabled inhibitory regulators are negated
    /// and OR-joined, and the two clauses are combined using `link`. If one clause is empty,
    /// only the other one is written; if both are empty, the rule is the constant `0`.
    pub fn to_bnet(&self) -> String {
        let activation = self
            .activating_regulators
            .enabled()
            .collect::<Vec<_>>()
            .join(" | ");
        let inhibition = self
            .inhibitory_regulators
            .enabled()
            .map(|it| format!("!{}", it))
            .collect::<Vec<_>>()
            .join(" | ");

        let expression = match (activation.is_empty(), inhibition.is_empty()) {
            (false, false) => {
                let link = self.link.unwrap_or(And);
                format!("{} {} {}", activation, link, inhibition)
            }
            (false, true) => activation,
            (true, false) => inhibition,
            (true, true) => "0".to_string(),
        };

        format!("{}, {}", self.target, expression)
            .replace(['(', ')'], "")
    }
}

/// Produce a `.bnet` model from a list of equations, one line per equation.
///
/// The result has no header and no trailing newline.
pub fn render_bnet(equations: &[BooleanEquation]) -> String {
    equations
        .iter()
        .map(|it| it.to_bnet())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use crate::BinaryOp::Or;
    use crate::{parse_bnet, render_bnet, BooleanEquation, Regulators};
    use pretty_assertions::assert_eq;
    use std::convert::TryFrom;

    #[test]
    fn equation_to_bnet() {
        let eq = BooleanEquation::from_regulator_names("A", &["B"], &["C"]);
        assert_eq!("A, B & !C", eq.to_bnet());

        let mut eq = BooleanEquation::from_regulator_names("A", &["B", "C"], &["D", "E"]);
        eq.set_link(Or);
        assert_eq!("A, B | C | !D | !E", eq.to_bnet());

        let eq = BooleanEquation::from_regulator_names::<&str>("A", &[], &["D", "E"]);
        assert_eq!("A, !D | !E", eq.to_bnet());

        assert_eq!("A, 0", BooleanEquation::constant("A", false).to_bnet());
        assert_eq!("A, 1", BooleanEquation::constant("A", true).to_bnet());
    }

    #[test]
    fn disabled_regulators_are_dropped() {
        let activating: Regulators = vec![("B", 0), ("C", 1)].into_iter().collect();
        let inhibitory: Regulators = vec![("D", 0)].into_iter().collect();
        let eq = BooleanEquation::new("A", activating, inhibitory);
        assert_eq!("A, C", eq.to_bnet());

        let activating: Regulators = vec![("B", 0)].into_iter().collect();
        let eq = BooleanEquation::new("A", activating, Regulators::new());
        assert_eq!("A, 0", eq.to_bnet());
    }

    #[test]
    fn parse_render_round_trip() {
        let model = "A, B & !C\nB, A | C\nC, !A | !B\nD, 0\nE, E | A & !B | !C";
        let equations = parse_bnet(model).unwrap();
        let rendered = render_bnet(&equations);
        assert_eq!(model, rendered);

        let again = render_bnet(&parse_bnet(&rendered).unwrap());
        assert_eq!(rendered, again);
    }

    #[test]
    fn parse_of_render_is_identity_for_enabled_regulators() {
        let equations = vec![
            BooleanEquation::from_regulator_names("X", &["Y", "Z"], &["W"]),
            BooleanEquation::from_regulator_names::<&str>("Y", &["X"], &[]),
        ];
        for eq in &equations {
            assert_eq!(eq, &BooleanEquation::try_from(eq.to_bnet().as_str()).unwrap());
        }
    }
}
