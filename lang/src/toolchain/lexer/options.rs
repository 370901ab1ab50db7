use std::str::FromStr;

/// How a `-` immediately followed by a digit is classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NegativeLiterals {
    /// The minus always joins the number, so `a-5` lexes as `a` followed by `-5`.
    #[default]
    Legacy,

    /// The minus joins the number only when the previous token can't end an operand. After an
    /// identifier, number, string literal, `)` or `]` it is an operator, so `a-5` lexes as `a`,
    /// `-`, `5` while `(-5` and `return -5` still produce `-5`.
    AfterOperator,
}

impl FromStr for NegativeLiterals {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(NegativeLiterals::Legacy),
            "after-operator" => Ok(NegativeLiterals::AfterOperator),
            _ => Err("expected 'legacy' or 'after-operator'"),
        }
    }
}

/// Lexer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    pub negative_literals: NegativeLiterals,
}

impl LexerOptions {
    pub fn with_negative_literals(mut self, negative_literals: NegativeLiterals) -> LexerOptions {
        self.negative_literals = negative_literals;
        self
    }
}
