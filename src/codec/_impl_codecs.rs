use crate::codec::EquationCodec;
use crate::{BinaryOp, BooleanEquation};

/// **(internal)** True if `bits` is a valid encoding of `len` binary positions.
fn fits(bits: &[u8], len: usize) -> bool {
    bits.len() == len && bits.iter().all(|it| *it <= 1)
}

/// Encodes regulator inclusion flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologyCodec;

/// Encodes link operators.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalancedCodec;

/// Encodes regulator flags followed by the link operator.
#[derive(Clone, Copy, Debug, Default)]
pub struct MixedCodec;

impl EquationCodec for TopologyCodec {
    fn equation_len(&self, equation: &BooleanEquation) -> usize {
        equation.activating_regulators.len() + equation.inhibitory_regulators.len()
    }

    fn encode_equation(&self, equation: &BooleanEquation, output: &mut Vec<u8>) {
        output.extend(equation.activating_regulators.iter().map(|(_, flag)| flag));
        output.extend(equation.inhibitory_regulators.iter().map(|(_, flag)| flag));
    }

    fn decode_equation(&self, template: &BooleanEquation, bits: &[u8]) -> BooleanEquation {
        let mut result = template.clone();
        if !fits(bits, self.equation_len(template)) {
            return result;
        }
        let (activating, inhibitory) = bits.split_at(template.activating_regulators.len());
        result.activating_regulators.set_flags(activating);
        result.inhibitory_regulators.set_flags(inhibitory);
        result
    }
}

impl EquationCodec for BalancedCodec {
    fn equation_len(&self, equation: &BooleanEquation) -> usize {
        usize::from(equation.link.is_some())
    }

    fn encode_equation(&self, equation: &BooleanEquation, output: &mut Vec<u8>) {
        if let Some(link) = equation.link {
            output.push(link.to_bit());
        }
    }

    fn decode_equation(&self, template: &BooleanEquation, bits: &[u8]) -> BooleanEquation {
        let mut result = template.clone();
        if fits(bits, self.equation_len(template)) {
            if let Some(bit) = bits.first() {
                result.set_link(BinaryOp::from_bit(*bit));
            }
        }
        result
    }
}

impl EquationCodec for MixedCodec {
    fn equation_len(&self, equation: &BooleanEquation) -> usize {
        TopologyCodec.equation_len(equation) + BalancedCodec.equation_len(equation)
    }

    fn encode_equation(&self, equation: &BooleanEquation, output: &mut Vec<u8>) {
        TopologyCodec.encode_equation(equation, output);
        BalancedCodec.encode_equation(equation, output);
    }

    fn decode_equation(&self, template: &BooleanEquation, bits: &[u8]) -> BooleanEquation {
        if !fits(bits, self.equation_len(template)) {
            return template.clone();
        }
        let (flags, link) = bits.split_at(TopologyCodec.equation_len(template));
        let result = TopologyCodec.decode_equation(template, flags);
        BalancedCodec.decode_equation(&result, link)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{BalancedCodec, MixedCodec, TopologyCodec};
    use crate::BinaryOp::{And, Or};
    use crate::{BooleanEquation, EquationCodec};

    #[test]
    fn single_equation_layouts() {
        let mut eq = BooleanEquation::from_regulator_names("A", &["B", "C"], &["D"]);
        eq.set_link(Or);

        let mut bits = Vec::new();
        TopologyCodec.encode_equation(&eq, &mut bits);
        assert_eq!(vec![1, 1, 1], bits);

        let mut bits = Vec::new();
        BalancedCodec.encode_equation(&eq, &mut bits);
        assert_eq!(vec![0], bits);

        let mut bits = Vec::new();
        MixedCodec.encode_equation(&eq, &mut bits);
        assert_eq!(vec![1, 1, 1, 0], bits);

        let decoded = MixedCodec.decode_equation(&eq, &[0, 1, 1, 1]);
        assert_eq!(vec![0, 1], decoded.activating_regulators().flags());
        assert_eq!(Some(And), decoded.link());
    }

    #[test]
    fn equations_without_link() {
        let eq = BooleanEquation::from_regulator_names::<&str>("A", &["B"], &[]);
        assert_eq!(0, BalancedCodec.equation_len(&eq));
        assert_eq!(1, MixedCodec.equation_len(&eq));
        let decoded = BalancedCodec.decode_equation(&eq, &[]);
        assert_eq!(eq, decoded);
        let decoded = MixedCodec.decode_equation(&eq, &[0]);
        assert_eq!(None, decoded.link());
        assert_eq!(vec![0], decoded.activating_regulators().flags());
    }

    #[test]
    fn malformed_bits_keep_template() {
        let eq = BooleanEquation::from_regulator_names("A", &["B", "C"], &["D"]);
        assert_eq!(eq, TopologyCodec.decode_equation(&eq, &[1]));
        assert_eq!(eq, TopologyCodec.decode_equation(&eq, &[0, 2, 1]));
        assert_eq!(eq, BalancedCodec.decode_equation(&eq, &[7]));
        assert_eq!(eq, BalancedCodec.decode_equation(&eq, &[0, 0]));
        assert_eq!(eq, MixedCodec.decode_equation(&eq, &[0, 0]));
        assert_eq!(eq, MixedCodec.decode_equation(&eq, &[0, 0, 0, 3]));
    }
}
