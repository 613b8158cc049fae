use crate::BinaryOp::{And, Or};
use crate::{BinaryOp, BooleanEquation, ModelError, Regulators};
use fxhash::FxHashSet;
use std::convert::TryFrom;

/// **(internal)** Tokens of the flat `.bnet` expression scanner.
#[derive(Debug, Eq, PartialEq)]
enum Token {
    Not,          // '!' or 'not'
    Op(BinaryOp), // '&', '|', 'and', 'or'
    Name(String), // 'name'
}

impl TryFrom<&str> for BooleanEquation {
    type Error = ModelError;

    /// Parse a single `TARGET, EXPRESSION` line.
    ///
    /// The expression is scanned left to right. A literal preceded by `!` becomes an inhibitory
    /// regulator, every other literal an activating one. Parentheses are ignored and the
    /// resulting `link` only depends on which regulator groups are non-empty.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let line = value.trim();
        let invalid = |reason: &str| ModelError::InvalidEquation {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let (target, expression) = line
            .split_once(',')
            .ok_or_else(|| invalid("Equation must start with `TARGET,`."))?;
        let target = target.trim();
        if target.is_empty() || target.contains(char::is_whitespace) {
            return Err(invalid("Equation must start with `TARGET,`."));
        }

        let mut activating = Regulators::new();
        let mut inhibitory = Regulators::new();
        let mut activating_operators = Vec::new();
        let mut inhibitory_operators = Vec::new();

        // `true` until a negation is seen; reset after the negated literal is consumed.
        let mut before_not = true;
        for token in tokenize(expression) {
            match token {
                Token::Not => before_not = !before_not,
                Token::Op(op) => {
                    if before_not {
                        activating_operators.push(op);
                    } else {
                        inhibitory_operators.push(op);
                    }
                }
                Token::Name(name) => {
                    if before_not {
                        activating.insert(&name, 1);
                    } else {
                        inhibitory.insert(&name, 1);
                        before_not = true;
                    }
                }
            }
        }

        // The operator joining the two groups ends up in one of the sequences, so both are
        // aligned with their regulator counts before the link is recomputed.
        align_operators(&mut activating_operators, activating.len());
        align_operators(&mut inhibitory_operators, inhibitory.len());

        let mut equation = BooleanEquation {
            target: target.to_string(),
            activating_regulators: activating,
            inhibitory_regulators: inhibitory,
            activating_operators,
            inhibitory_operators,
            link: None,
        };
        equation.recompute_link();
        Ok(equation)
    }
}

/// Parse all equations of a `.bnet` model.
///
/// Comments (`#`), empty lines and the `targets, factors` header are skipped. Every node
/// can only be declared once.
pub fn parse_bnet(model_string: &str) -> Result<Vec<BooleanEquation>, ModelError> {
    let mut targets = FxHashSet::default();
    let mut equations = Vec::new();
    for line in model_string.lines() {
        if is_skipped_line(line) {
            continue;
        }
        let equation = BooleanEquation::try_from(line)?;
        if !targets.insert(equation.target.clone()) {
            return Err(ModelError::InvalidEquation {
                line: line.trim().to_string(),
                reason: format!("Duplicate function declaration for `{}`.", equation.target),
            });
        }
        equations.push(equation);
    }
    Ok(equations)
}

/// **(internal)** True for comments, empty lines and the `targets, factors` header.
pub(crate) fn is_skipped_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty()
        || line.starts_with('#')
        || line
            .split(',')
            .next()
            .map(|it| it.trim() == "targets")
            .unwrap_or(false)
}

/// **(internal)** Split an expression into flat tokens. Parentheses are dropped.
fn tokenize(expression: &str) -> Vec<Token> {
    let mut output = Vec::new();
    let mut data = expression.chars().peekable();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* Skip whitespace */ }
            '(' | ')' => { /* Grouping does not change the scan */ }
            '!' => output.push(Token::Not),
            '&' => output.push(Token::Op(And)),
            '|' => output.push(Token::Op(Or)),
            c => {
                let mut name = vec![c];
                while let Some(c) = data.peek() {
                    if c.is_whitespace() || is_special(*c) {
                        break;
                    } else {
                        name.push(*c);
                        data.next();
                    }
                }
                let name: String = name.into_iter().collect();
                output.push(match name.as_str() {
                    "not" => Token::Not,
                    "and" => Token::Op(And),
                    "or" => Token::Op(Or),
                    _ => Token::Name(name),
                });
            }
        }
    }
    output
}

/// **(internal)** Characters that terminate a regulator name.
fn is_special(c: char) -> bool {
    matches!(c, '!' | '&' | '|' | '(' | ')')
}

/// **(internal)** Make an operator sequence exactly `count - 1` long, padding with `Or`.
fn align_operators(operators: &mut Vec<BinaryOp>, count: usize) {
    operators.resize(count.saturating_sub(1), Or);
}
