use std::fmt::{self, Display};

use crate::lexer::Token;

use super::{Expression, Node};

/// A bare expression used as a statement, e.g. `5 + 5;`. This is how the
/// language gets its expression-oriented feel: the last expression
/// statement of a block/program is the block/program's value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
