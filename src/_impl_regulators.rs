use crate::Regulators;

/// Methods for constructing and modifying `Regulators`.
impl Regulators {
    /// Create an empty regulator map.
    pub fn new() -> Regulators {
        Regulators::default()
    }

    /// Insert a regulator with the given flag.
    ///
    /// If the regulator is already present, only its flag is overwritten and its position
    /// is kept. Any non-zero flag is stored as `1`.
    pub fn insert(&mut self, name: &str, flag: u8) {
        let flag = u8::from(flag != 0);
        if let Some(index) = self.name_to_index.get(name) {
            self.entries[*index].1 = flag;
        } else {
            self.name_to_index
                .insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), flag));
        }
    }

    /// Overwrite the flags of all regulators in order. Regulator identity is not changed.
    ///
    /// Returns `false` (and leaves the map unchanged) if `flags` has the wrong length or
    /// contains a value other than `0` or `1`.
    pub fn set_flags(&mut self, flags: &[u8]) -> bool {
        if flags.len() != self.entries.len() || flags.iter().any(|it| *it > 1) {
            return false;
        }
        for (entry, flag) in self.entries.iter_mut().zip(flags) {
            entry.1 = *flag;
        }
        true
    }
}

/// Some basic utility methods for inspecting `Regulators`.
impl Regulators {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag of the given regulator, or `None` if it is not part of the map.
    pub fn get(&self, name: &str) -> Option<u8> {
        self.name_to_index.get(name).map(|i| self.entries[*i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Iterate over `(name, flag)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.entries.iter().map(|(name, flag)| (name.as_str(), *flag))
    }

    /// Flags of all regulators in insertion order.
    pub fn flags(&self) -> Vec<u8> {
        self.entries.iter().map(|(_, flag)| *flag).collect()
    }

    /// Names of regulators whose flag is `1`, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|(_, flag)| *flag == 1)
            .map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Regulators {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Regulators {}

impl<'a> FromIterator<(&'a str, u8)> for Regulators {
    fn from_iter<T: IntoIterator<Item = (&'a str, u8)>>(iter: T) -> Self {
        let mut result = Regulators::new();
        for (name, flag) in iter {
            result.insert(name, flag);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::Regulators;

    #[test]
    fn regulators_keep_insertion_order() {
        let mut regulators = Regulators::new();
        regulators.insert("c", 1);
        regulators.insert("a", 0);
        regulators.insert("b", 1);
        regulators.insert("c", 0);

        assert_eq!(3, regulators.len());
        let names = regulators.iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(vec!["c", "a", "b"], names);
        assert_eq!(vec![0, 0, 1], regulators.flags());
        assert_eq!(vec!["b"], regulators.enabled().collect::<Vec<_>>());
        assert_eq!(Some(0), regulators.get("a"));
        assert_eq!(None, regulators.get("d"));
    }

    #[test]
    fn regulators_set_flags() {
        let mut regulators: Regulators = vec![("x", 1), ("y", 1)].into_iter().collect();
        assert!(!regulators.set_flags(&[0]));
        assert_eq!(vec![1, 1], regulators.flags());
        assert!(!regulators.set_flags(&[0, 2]));
        assert_eq!(vec![1, 1], regulators.flags());
        assert!(regulators.set_flags(&[0, 1]));
        assert_eq!(vec![0, 1], regulators.flags());
        regulators.insert("z", 7);
        assert_eq!(Some(1), regulators.get("z"));
        assert!(regulators.contains("x"));
    }

    #[test]
    fn regulators_equality_is_ordered() {
        let a: Regulators = vec![("x", 1), ("y", 1)].into_iter().collect();
        let b: Regulators = vec![("y", 1), ("x", 1)].into_iter().collect();
        let c: Regulators = vec![("x", 1), ("y", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }
}
