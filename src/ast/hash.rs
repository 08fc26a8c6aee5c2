use std::fmt::{self, Display};

use crate::lexer::Token;

use super::{Expression, Node};

/// `{k1: v1, k2: v2, ...}`. Pairs are kept in source order (an ordinary
/// `Vec`, not a map) so the printable form is deterministic per source
/// text, per §3.2's invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl Node for HashLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{items}}}")
    }
}
