use crate::attractors::{Attractor, ExtendedBoolean};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

impl Attractor {
    pub fn new() -> Attractor {
        Attractor::default()
    }

    /// Read an attractor from a string of node states (`0`, `1`, `-` or `*`), where the i-th
    /// character is the state of the i-th node in `names`.
    pub fn from_state_string<S: AsRef<str>>(names: &[S], states: &str) -> Result<Attractor, String> {
        let states = states.trim().chars().collect::<Vec<_>>();
        if states.len() != names.len() {
            return Err(format!(
                "Expected {} node states, found {}.",
                names.len(),
                states.len()
            ));
        }
        let mut result = Attractor::new();
        for (name, state) in names.iter().zip(states) {
            result.insert(name.as_ref(), ExtendedBoolean::try_from(state)?);
        }
        Ok(result)
    }

    /// Set the state of a node, overwriting any previous value.
    pub fn insert(&mut self, node: &str, state: ExtendedBoolean) {
        if let Some(entry) = self.0.iter_mut().find(|(name, _)| name == node) {
            entry.1 = state;
        } else {
            self.0.push((node.to_string(), state));
        }
    }

    /// State of the given node, or `None` if the attractor does not mention it.
    pub fn get(&self, node: &str) -> Option<ExtendedBoolean> {
        self.0
            .iter()
            .find(|(name, _)| name == node)
            .map(|(_, state)| *state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ExtendedBoolean)> + '_ {
        self.0.iter().map(|(name, state)| (name.as_str(), *state))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An attractor is a stable state if no node is a don't-care.
    pub fn is_stable_state(&self) -> bool {
        self.0.iter().all(|(_, state)| state.is_fixed())
    }
}

impl<'a> FromIterator<(&'a str, ExtendedBoolean)> for Attractor {
    fn from_iter<T: IntoIterator<Item = (&'a str, ExtendedBoolean)>>(iter: T) -> Self {
        let mut result = Attractor::new();
        for (node, state) in iter {
            result.insert(node, state);
        }
        result
    }
}

/// Read an attractor from `name: value` pairs separated by commas, e.g. `A: 1, B: -`.
///
/// Surrounding braces are optional, so the `Display` form of an attractor is accepted.
impl TryFrom<&str> for Attractor {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let value = value
            .strip_prefix('{')
            .and_then(|it| it.strip_suffix('}'))
            .unwrap_or(value);
        let mut result = Attractor::new();
        for pair in value.split(',').map(|it| it.trim()).filter(|it| !it.is_empty()) {
            let (name, state) = pair
                .split_once(':')
                .ok_or_else(|| format!("Expected `name: value`, found `{}`.", pair))?;
            let name = name.trim();
            let mut chars = state.trim().chars();
            let state = match (chars.next(), chars.next()) {
                (Some(c), None) => ExtendedBoolean::try_from(c)?,
                _ => return Err(format!("Invalid state of `{}` in `{}`.", name, pair)),
            };
            if name.is_empty() {
                return Err(format!("Missing node name in `{}`.", pair));
            }
            result.insert(name, state);
        }
        Ok(result)
    }
}

impl Display for Attractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, state)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, state)?;
        }
        write!(f, "}}")
    }
}
