use crate::BinaryOp;
use crate::BinaryOp::*;
use std::fmt::{Display, Error, Formatter};

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let symbol = match self {
            And => "&",
            Or => "|",
        };
        write!(f, "{}", symbol)?;
        Ok(())
    }
}

impl BinaryOp {
    /// The keyword form of the operator (`and`/`or`), as used by the BooleanNet-style display.
    pub fn keyword(&self) -> &'static str {
        match self {
            And => "and",
            Or => "or",
        }
    }

    /// The chromosome bit of a link operator: `And` is `1`, `Or` is `0`.
    pub fn to_bit(self) -> u8 {
        match self {
            And => 1,
            Or => 0,
        }
    }

    /// Inverse of `to_bit`. Any bit other than `1` is read as `Or`.
    pub fn from_bit(bit: u8) -> BinaryOp {
        if bit == 1 {
            And
        } else {
            Or
        }
    }
}
