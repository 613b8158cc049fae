use crate::attractors::ExtendedBoolean;
use std::convert::TryFrom;
use std::fmt::{Debug, Display, Formatter};
use ExtendedBoolean::{Any, One, Zero};

impl Debug for ExtendedBoolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Zero => write!(f, "0"),
            One => write!(f, "1"),
            Any => write!(f, "-"),
        }
    }
}

impl Display for ExtendedBoolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<bool> for ExtendedBoolean {
    fn from(value: bool) -> Self {
        if value {
            One
        } else {
            Zero
        }
    }
}

/// Solvers write don't-care values either as `-` or as `*`.
impl TryFrom<char> for ExtendedBoolean {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Zero),
            '1' => Ok(One),
            '-' | '*' => Ok(Any),
            _ => Err(format!("Unexpected node state `{}`.", value)),
        }
    }
}

impl ExtendedBoolean {
    pub fn is_any(&self) -> bool {
        *self == Any
    }

    pub fn is_fixed(&self) -> bool {
        *self != Any
    }

    pub fn try_as_bool(&self) -> Option<bool> {
        match self {
            Zero => Some(false),
            One => Some(true),
            Any => None,
        }
    }

    /// Numeric value used when aggregating outputs. A don't-care state counts as `0.5`.
    pub fn as_value(&self) -> f64 {
        match self {
            Zero => 0.0,
            One => 1.0,
            Any => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::attractors::ExtendedBoolean::{Any, One, Zero};
    use crate::attractors::ExtendedBoolean;
    use std::convert::TryFrom;

    #[test]
    fn extended_boolean_parsing() {
        assert_eq!(Ok(Zero), ExtendedBoolean::try_from('0'));
        assert_eq!(Ok(One), ExtendedBoolean::try_from('1'));
        assert_eq!(Ok(Any), ExtendedBoolean::try_from('-'));
        assert_eq!(Ok(Any), ExtendedBoolean::try_from('*'));
        assert!(ExtendedBoolean::try_from('x').is_err());
        assert_eq!("-", Any.to_string());
    }

    #[test]
    fn extended_boolean_values() {
        assert_eq!(0.0, Zero.as_value());
        assert_eq!(1.0, One.as_value());
        assert_eq!(0.5, Any.as_value());
        assert_eq!(Some(true), One.try_as_bool());
        assert_eq!(None, Any.try_as_bool());
        assert!(Any.is_any());
        assert!(ExtendedBoolean::from(false).is_fixed());
    }
}
