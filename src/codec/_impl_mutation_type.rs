use crate::codec::MutationType;
use crate::ModelError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

impl Display for MutationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationType::Topology => "topology",
            MutationType::Balanced => "balanced",
            MutationType::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MutationType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "topology" => Ok(MutationType::Topology),
            "balanced" => Ok(MutationType::Balanced),
            "mixed" => Ok(MutationType::Mixed),
            _ => Err(ModelError::UnknownMutationType(s.to_string())),
        }
    }
}
