use crate::BinaryOp::{And, Or};
use crate::{BinaryOp, BooleanEquation, Regulators};
use std::fmt::{Display, Error, Formatter};

/// Methods for safely constructing new instances of `BooleanEquation`s.
impl BooleanEquation {
    /// Create an equation from two regulator groups.
    ///
    /// Regulators within a group are joined by `Or` and the `link` is `And` when both groups
    /// are non-empty (and `None` otherwise).
    pub fn new(
        target: &str,
        activating_regulators: Regulators,
        inhibitory_regulators: Regulators,
    ) -> BooleanEquation {
        let activating_operators = vec![Or; activating_regulators.len().saturating_sub(1)];
        let inhibitory_operators = vec![Or; inhibitory_regulators.len().saturating_sub(1)];
        let mut equation = BooleanEquation {
            target: target.to_string(),
            activating_regulators,
            inhibitory_regulators,
            activating_operators,
            inhibitory_operators,
            link: None,
        };
        equation.recompute_link();
        equation
    }

    /// Create an equation where every listed regulator is enabled.
    pub fn from_regulator_names<S: AsRef<str>>(
        target: &str,
        activating: &[S],
        inhibitory: &[S],
    ) -> BooleanEquation {
        let activating = activating.iter().map(|it| (it.as_ref(), 1)).collect();
        let inhibitory = inhibitory.iter().map(|it| (it.as_ref(), 1)).collect();
        BooleanEquation::new(target, activating, inhibitory)
    }

    /// A rule that keeps `target` at a constant value.
    ///
    /// The only activating "regulator" is the placeholder `"0"` or `"1"`, which renders as the
    /// corresponding `.bnet` constant.
    pub fn constant(target: &str, value: bool) -> BooleanEquation {
        let placeholder = if value { "1" } else { "0" };
        BooleanEquation {
            target: target.to_string(),
            activating_regulators: vec![(placeholder, 1)].into_iter().collect(),
            inhibitory_regulators: Regulators::new(),
            activating_operators: Vec::new(),
            inhibitory_operators: Vec::new(),
            link: None,
        }
    }

    /// Reset `link` to the value implied by the regulator groups: `And` if both groups are
    /// non-empty, `None` otherwise.
    pub fn recompute_link(&mut self) {
        self.link = if self.has_both_groups() {
            Some(And)
        } else {
            None
        };
    }

    /// Replace the link operator. Does nothing unless both regulator groups are non-empty,
    /// so the link invariant holds after every call.
    pub fn set_link(&mut self, link: BinaryOp) {
        if self.has_both_groups() {
            self.link = Some(link);
        }
    }
}

/// Some basic utility methods for inspecting the `BooleanEquation`.
impl BooleanEquation {
    pub fn get_target(&self) -> &str {
        &self.target
    }

    pub fn activating_regulators(&self) -> &Regulators {
        &self.activating_regulators
    }

    pub fn inhibitory_regulators(&self) -> &Regulators {
        &self.inhibitory_regulators
    }

    pub fn activating_operators(&self) -> &[BinaryOp] {
        &self.activating_operators
    }

    pub fn inhibitory_operators(&self) -> &[BinaryOp] {
        &self.inhibitory_operators
    }

    pub fn link(&self) -> Option<BinaryOp> {
        self.link
    }

    /// True if both the activating and the inhibitory group are non-empty.
    pub fn has_both_groups(&self) -> bool {
        !self.activating_regulators.is_empty() && !self.inhibitory_regulators.is_empty()
    }

    /// Check that `link` is present exactly when both regulator groups are non-empty.
    pub fn is_link_consistent(&self) -> bool {
        self.link.is_some() == self.has_both_groups()
    }

    /// If this is a constant rule (see `BooleanEquation::constant`), return its value.
    pub fn constant_value(&self) -> Option<bool> {
        if !self.inhibitory_regulators.is_empty() || self.activating_regulators.len() != 1 {
            return None;
        }
        match self.activating_regulators.iter().next() {
            Some(("0", 1)) => Some(false),
            Some(("1", 1)) => Some(true),
            _ => None,
        }
    }
}

/// BooleanNet-style rendering: `A *= (B or C) and (not D or not E)`.
///
/// Only enabled regulators appear. An equation with no enabled regulators displays as `0`.
impl Display for BooleanEquation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let activating = self.activating_regulators.enabled().collect::<Vec<_>>();
        let inhibitory = self
            .inhibitory_regulators
            .enabled()
            .map(|it| format!("not {}", it))
            .collect::<Vec<_>>();

        write!(f, "{} *= ", self.target)?;
        match (activating.is_empty(), inhibitory.is_empty()) {
            (false, false) => {
                let link = self.link.unwrap_or(And);
                write!(
                    f,
                    "({}) {} ({})",
                    activating.join(" or "),
                    link.keyword(),
                    inhibitory.join(" or ")
                )
            }
            (false, true) => write!(f, "{}", activating.join(" or ")),
            (true, false) => write!(f, "{}", inhibitory.join(" or ")),
            (true, true) => write!(f, "0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BinaryOp::{And, Or};
    use crate::{BooleanEquation, Regulators};

    #[test]
    fn new_equation_computes_operators_and_link() {
        let eq = BooleanEquation::from_regulator_names("A", &["B", "C", "D"], &["E"]);
        assert_eq!("A", eq.get_target());
        assert_eq!(&[Or, Or], eq.activating_operators());
        assert!(eq.inhibitory_operators().is_empty());
        assert_eq!(Some(And), eq.link());
        assert!(eq.is_link_consistent());

        let eq = BooleanEquation::from_regulator_names::<&str>("A", &[], &["E", "F"]);
        assert_eq!(None, eq.link());
        assert_eq!(&[Or], eq.inhibitory_operators());
        assert!(eq.is_link_consistent());

        let eq = BooleanEquation::new("A", Regulators::new(), Regulators::new());
        assert_eq!(None, eq.link());
        assert!(eq.activating_operators().is_empty());
    }

    #[test]
    fn set_link_respects_invariant() {
        let mut eq = BooleanEquation::from_regulator_names("A", &["B"], &["C"]);
        eq.set_link(Or);
        assert_eq!(Some(Or), eq.link());
        eq.recompute_link();
        assert_eq!(Some(And), eq.link());

        let mut eq = BooleanEquation::from_regulator_names::<&str>("A", &["B"], &[]);
        eq.set_link(Or);
        assert_eq!(None, eq.link());
    }

    #[test]
    fn constant_equation() {
        let eq = BooleanEquation::constant("A", false);
        assert_eq!(Some(false), eq.constant_value());
        assert_eq!(None, eq.link());
        assert!(eq.is_link_consistent());
        assert_eq!(Some(true), BooleanEquation::constant("A", true).constant_value());
        let eq = BooleanEquation::from_regulator_names::<&str>("A", &["B"], &[]);
        assert_eq!(None, eq.constant_value());
    }

    #[test]
    fn display_equation() {
        let eq = BooleanEquation::from_regulator_names("A", &["B", "C"], &["D"]);
        assert_eq!("A *= (B or C) and (not D)", eq.to_string());

        let mut eq = BooleanEquation::from_regulator_names("A", &["B"], &["D", "E"]);
        eq.set_link(Or);
        assert_eq!("A *= (B) or (not D or not E)", eq.to_string());

        let eq = BooleanEquation::from_regulator_names::<&str>("A", &[], &["D"]);
        assert_eq!("A *= not D", eq.to_string());

        let activating: Regulators = vec![("B", 0)].into_iter().collect();
        let eq = BooleanEquation::new("A", activating, Regulators::new());
        assert_eq!("A *= 0", eq.to_string());
    }
}
