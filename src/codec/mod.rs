//! Conversion between a list of `BooleanEquation`s and a flat binary chromosome.
//!
//! The layout of the chromosome depends on the `MutationType`:
//!
//!  - `Topology`: for every equation, the flags of its activating regulators followed by the
//!    flags of its inhibitory regulators. Decoding only changes regulator flags.
//!  - `Balanced`: one bit per equation that has a link (`1` for `And`, `0` for `Or`).
//!    Equations without a link contribute nothing. Decoding only changes links.
//!  - `Mixed`: the topology flags of an equation followed by its balanced link bit.
//!
//! The length of a chromosome is fully determined by the shape of the equations, so decoding
//! always works relative to a "template" list of equations. Every codec describes one equation
//! at a time and the provided methods of `EquationCodec` concatenate them, so the encoding and
//! decoding of a list always walk the equations in the same order.

use crate::{BooleanEquation, ModelError};
use log::debug;

/// **(internal)** `FromStr`/`Display` for `MutationType`.
mod _impl_mutation_type;
/// **(internal)** The three equation codecs.
mod _impl_codecs;
/// **(internal)** Random bit-flip mutants of a chromosome.
mod _impl_mutated_lists;

pub use _impl_codecs::{BalancedCodec, MixedCodec, TopologyCodec};
pub(crate) use _impl_mutated_lists::flip_bits;
pub use _impl_mutated_lists::{generate_mutated_lists, generate_mutated_lists_with_rng};

/// Selects which parts of the equations are exposed to mutation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MutationType {
    /// Regulator inclusion flags.
    Topology,
    /// Link operators between activating and inhibitory clauses.
    Balanced,
    /// Both regulator flags and link operators.
    #[default]
    Mixed,
}

/// A binary encoding of equations.
pub trait EquationCodec {
    /// Number of bits used by `equation`.
    fn equation_len(&self, equation: &BooleanEquation) -> usize;

    /// Append the bits of `equation` to `output`.
    fn encode_equation(&self, equation: &BooleanEquation, output: &mut Vec<u8>);

    /// Produce a copy of `template` updated with `bits`, which should be exactly
    /// `equation_len(template)` binary values long. Otherwise `template` is returned unchanged.
    fn decode_equation(&self, template: &BooleanEquation, bits: &[u8]) -> BooleanEquation;

    /// Total number of bits used by `equations`.
    fn encoded_len(&self, equations: &[BooleanEquation]) -> usize {
        equations.iter().map(|it| self.equation_len(it)).sum()
    }

    /// Encode all equations into one chromosome.
    fn encode(&self, equations: &[BooleanEquation]) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.encoded_len(equations));
        for equation in equations {
            self.encode_equation(equation, &mut output);
        }
        output
    }

    /// Decode `chromosome` into a copy of `templates`, consuming the bits left to right.
    ///
    /// Returns an error if the chromosome length does not match `encoded_len(templates)` or
    /// if any position holds a value other than `0` or `1`.
    fn decode(
        &self,
        templates: &[BooleanEquation],
        chromosome: &[u8],
    ) -> Result<Vec<BooleanEquation>, ModelError> {
        let expected = self.encoded_len(templates);
        if chromosome.len() != expected {
            return Err(ModelError::ChromosomeLength {
                expected,
                actual: chromosome.len(),
            });
        }
        check_bits(chromosome)?;
        let mut index = 0;
        let mut result = Vec::with_capacity(templates.len());
        for template in templates {
            let len = self.equation_len(template);
            result.push(self.decode_equation(template, &chromosome[index..(index + len)]));
            index += len;
        }
        debug!(
            "Decoded {} bits into {} equations.",
            chromosome.len(),
            result.len()
        );
        Ok(result)
    }
}

/// Check that every position of `chromosome` is `0` or `1`.
pub fn check_bits(chromosome: &[u8]) -> Result<(), ModelError> {
    match chromosome.iter().position(|it| *it > 1) {
        Some(index) => Err(ModelError::InvalidBit {
            index,
            value: chromosome[index],
        }),
        None => Ok(()),
    }
}

impl MutationType {
    /// The codec implementing this mutation type.
    pub fn codec(&self) -> &'static dyn EquationCodec {
        match self {
            MutationType::Topology => &TopologyCodec,
            MutationType::Balanced => &BalancedCodec,
            MutationType::Mixed => &MixedCodec,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BinaryOp::{And, Or};
    use crate::codec::check_bits;
    use crate::{BooleanEquation, ModelError, MutationType};
    use pretty_assertions::assert_eq;

    fn equations() -> Vec<BooleanEquation> {
        vec![
            BooleanEquation::from_regulator_names("A", &["B", "C"], &["D"]),
            BooleanEquation::from_regulator_names::<&str>("B", &["A"], &[]),
            BooleanEquation::from_regulator_names("C", &["A"], &["B", "C"]),
            BooleanEquation::from_regulator_names::<&str>("D", &[], &[]),
        ]
    }

    #[test]
    fn mixed_example() {
        let template = vec![BooleanEquation::from_regulator_names("A", &["B", "C"], &["D"])];
        let codec = MutationType::Mixed.codec();
        assert_eq!(vec![1, 1, 1, 1], codec.encode(&template));

        let decoded = codec.decode(&template, &[1, 1, 0, 0]).unwrap();
        assert_eq!(vec![1, 1], decoded[0].activating_regulators().flags());
        assert_eq!(vec![0], decoded[0].inhibitory_regulators().flags());
        assert_eq!(Some(Or), decoded[0].link());
        assert_eq!(template[0].get_target(), decoded[0].get_target());
        assert_eq!(
            template[0].activating_operators(),
            decoded[0].activating_operators()
        );
    }

    #[test]
    fn encoded_lengths() {
        let equations = equations();
        assert_eq!(7, MutationType::Topology.codec().encoded_len(&equations));
        assert_eq!(2, MutationType::Balanced.codec().encoded_len(&equations));
        assert_eq!(9, MutationType::Mixed.codec().encoded_len(&equations));
    }

    #[test]
    fn decode_of_encode_is_identity() {
        let equations = equations();
        for mutation_type in [
            MutationType::Topology,
            MutationType::Balanced,
            MutationType::Mixed,
        ] {
            let codec = mutation_type.codec();
            let bits = codec.encode(&equations);
            assert_eq!(equations, codec.decode(&equations, &bits).unwrap());
        }
    }

    #[test]
    fn encode_of_decode_is_identity() {
        let equations = equations();
        let chromosomes = [
            (MutationType::Topology, vec![0, 1, 0, 1, 1, 0, 0]),
            (MutationType::Balanced, vec![0, 1]),
            (MutationType::Mixed, vec![1, 0, 1, 0, 1, 1, 0, 1, 0]),
        ];
        for (mutation_type, bits) in chromosomes {
            let codec = mutation_type.codec();
            let decoded = codec.decode(&equations, &bits).unwrap();
            assert_eq!(bits, codec.encode(&decoded));
            assert!(decoded.iter().all(|it| it.is_link_consistent()));
        }
    }

    #[test]
    fn balanced_only_touches_links() {
        let equations = equations();
        let codec = MutationType::Balanced.codec();
        let decoded = codec.decode(&equations, &[0, 1]).unwrap();
        assert_eq!(Some(Or), decoded[0].link());
        assert_eq!(Some(And), decoded[2].link());
        assert_eq!(equations[1], decoded[1]);
        assert_eq!(equations[3], decoded[3]);
        assert_eq!(
            equations[0].activating_regulators(),
            decoded[0].activating_regulators()
        );
    }

    #[test]
    fn topology_keeps_links() {
        let mut equations = equations();
        equations[0].set_link(Or);
        let codec = MutationType::Topology.codec();
        let decoded = codec.decode(&equations, &[0, 0, 0, 1, 1, 1, 1]).unwrap();
        assert_eq!(Some(Or), decoded[0].link());
        assert_eq!(vec![0, 0], decoded[0].activating_regulators().flags());
        assert_eq!("A, 0", decoded[0].to_bnet());
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let equations = equations();
        let codec = MutationType::Mixed.codec();
        let result = codec.decode(&equations, &[1, 0, 1]);
        assert!(matches!(
            result,
            Err(ModelError::ChromosomeLength {
                expected: 9,
                actual: 3
            })
        ));
        assert!(codec.decode(&equations, &[0; 10]).is_err());
    }

    #[test]
    fn decode_rejects_non_binary_values() {
        let equations = equations();
        let codec = MutationType::Topology.codec();
        let result = codec.decode(&equations, &[1, 1, 1, 2, 1, 1, 1]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidBit { index: 3, value: 2 })
        ));
        let result = MutationType::Balanced.codec().decode(&equations, &[1, 7]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidBit { index: 1, value: 7 })
        ));
        assert!(check_bits(&[0, 1, 1, 0]).is_ok());
        assert!(check_bits(&[]).is_ok());
    }
}
