//! Expression rules
//!
//! Precedence climbing, lowest-binding level first; binding strength is
//! encoded in the call nesting rather than a numeric table:
//!
//! ```text
//! expression     ::= and_expr ( '||' and_expr )*
//! and_expr       ::= equality ( '&&' equality )*
//! equality       ::= relational [ ( '==' | '!=' ) relational ]
//! relational     ::= additive [ ( '<' | '<=' | '>' | '>=' ) additive ]
//! additive       ::= multiplicative ( ( '+' | '-' ) multiplicative )*
//! multiplicative ::= primary ( ( '*' | '/' | '%' ) primary )*
//! primary        ::= identifier | integer | float | string | char
//!                  | '(' expression ')'
//!                  | ( '+' | '-' | '!' ) primary
//! ```
//!
//! The equality and relational levels apply their operator at most once.
//! That asymmetry against the repeating levels comes straight from the
//! grammar and is kept as given: `a + b + c` is one additive chain, while
//! the second `==` in `a == b == c` is left for the caller to reject.

use super::{RecognitionError, Recognizer};
use crate::lexer::token::TokenKind;

impl Recognizer<'_> {
    pub(crate) fn expression(&mut self) -> Result<(), RecognitionError> {
        self.and_expression()?;
        while self.at_operator("||") {
            self.advance();
            self.and_expression()?;
        }
        Ok(())
    }

    fn and_expression(&mut self) -> Result<(), RecognitionError> {
        self.equality_expression()?;
        while self.at_operator("&&") {
            self.advance();
            self.equality_expression()?;
        }
        Ok(())
    }

    fn equality_expression(&mut self) -> Result<(), RecognitionError> {
        self.relational_expression()?;
        if self.at_operator("==") || self.at_operator("!=") {
            self.advance();
            self.relational_expression()?;
        }
        Ok(())
    }

    fn relational_expression(&mut self) -> Result<(), RecognitionError> {
        self.additive_expression()?;
        if self.at_operator("<")
            || self.at_operator("<=")
            || self.at_operator(">")
            || self.at_operator(">=")
        {
            self.advance();
            self.additive_expression()?;
        }
        Ok(())
    }

    fn additive_expression(&mut self) -> Result<(), RecognitionError> {
        self.multiplicative_expression()?;
        while self.at_operator("+") || self.at_operator("-") {
            self.advance();
            self.multiplicative_expression()?;
        }
        Ok(())
    }

    fn multiplicative_expression(&mut self) -> Result<(), RecognitionError> {
        self.primary()?;
        while self.at_operator("*") || self.at_operator("/") || self.at_operator("%") {
            self.advance();
            self.primary()?;
        }
        Ok(())
    }

    fn primary(&mut self) -> Result<(), RecognitionError> {
        if matches!(
            self.peek().kind,
            TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Char
        ) {
            self.advance();
            Ok(())
        } else if self.at_symbol("(") {
            self.advance();
            self.expression()?;
            self.expect_lexeme(TokenKind::Symbol, ")")
        } else if self.at_operator("+") || self.at_operator("-") || self.at_operator("!") {
            // Unary operators recurse on primary, so they stack.
            self.advance();
            self.primary()
        } else {
            Err(RecognitionError::InvalidPrimaryExpression {
                found: self.peek().clone(),
            })
        }
    }
}
