//! Statement rules
//!
//! One method per production, dispatched on the current token. The first
//! applicable alternative wins:
//!
//! ```text
//! statement ::= ';'
//!             | print_stmt | putc_stmt
//!             | while_stmt | if_stmt
//!             | assignment
//!             | block
//! ```
//!
//! `print` and `putc` are not reserved words, so they reach the recognizer
//! classified as identifiers; their rules are tested by lexeme before the
//! generic assignment rule, which would otherwise shadow them.

use super::{RecognitionError, Recognizer, StatementKind};
use crate::lexer::token::TokenKind;

impl Recognizer<'_> {
    /// A maximal run of statements, stopping at end of input or at a `}`
    /// (left for the enclosing block rule to consume).
    pub(crate) fn statement_list(&mut self) -> Result<(), RecognitionError> {
        while !self.is_at_end() && !self.at_symbol("}") {
            self.statement()?;
        }
        Ok(())
    }

    pub(crate) fn statement(&mut self) -> Result<(), RecognitionError> {
        if self.at_symbol(";") {
            self.trace.push(StatementKind::Empty);
            self.advance();
            Ok(())
        } else if self.at_word("print") {
            self.print_statement()
        } else if self.at_word("putc") {
            self.putc_statement()
        } else if self.at_keyword("while") {
            self.while_statement()
        } else if self.at_keyword("if") {
            self.if_statement()
        } else if self.at_kind(TokenKind::Identifier) {
            self.assignment()
        } else if self.at_symbol("{") {
            self.block()
        } else {
            Err(RecognitionError::InvalidStatement {
                found: self.peek().clone(),
            })
        }
    }

    /// identifier [ '=' expression ] ';'
    fn assignment(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::Assignment);
        self.expect(TokenKind::Identifier)?;
        if self.at_operator("=") {
            self.advance();
            self.expression()?;
        }
        self.expect_lexeme(TokenKind::Symbol, ";")
    }

    /// 'while' '(' expression ')' statement
    fn while_statement(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::While);
        self.advance();
        self.paren_expression()?;
        self.statement()
    }

    /// 'if' '(' expression ')' statement [ 'else' statement ]
    fn if_statement(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::If);
        self.advance();
        self.paren_expression()?;
        self.statement()?;
        if self.at_keyword("else") {
            self.advance();
            self.statement()?;
        }
        Ok(())
    }

    /// 'print' '(' print_list ')' ';'
    fn print_statement(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::Print);
        self.advance();
        self.expect_lexeme(TokenKind::Symbol, "(")?;
        self.print_list()?;
        self.expect_lexeme(TokenKind::Symbol, ")")?;
        self.expect_lexeme(TokenKind::Symbol, ";")
    }

    /// 'putc' '(' expression ')' ';'
    fn putc_statement(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::Putc);
        self.advance();
        self.paren_expression()?;
        self.expect_lexeme(TokenKind::Symbol, ";")
    }

    /// '{' statement_list '}'
    fn block(&mut self) -> Result<(), RecognitionError> {
        self.trace.push(StatementKind::Block);
        self.advance();
        self.statement_list()?;
        self.expect_lexeme(TokenKind::Symbol, "}")
    }

    /// Zero or more print arguments separated by commas. A comma followed
    /// by anything other than a string, integer, float, or identifier is a
    /// violation; an empty list is not.
    fn print_list(&mut self) -> Result<(), RecognitionError> {
        if !self.at_print_argument() {
            return Ok(());
        }
        self.advance();
        while self.at_symbol(",") {
            self.advance();
            if self.at_print_argument() {
                self.advance();
            } else {
                return Err(RecognitionError::InvalidPrintArgument {
                    found: self.peek().clone(),
                });
            }
        }
        Ok(())
    }

    /// '(' expression ')'
    pub(crate) fn paren_expression(&mut self) -> Result<(), RecognitionError> {
        self.expect_lexeme(TokenKind::Symbol, "(")?;
        self.expression()?;
        self.expect_lexeme(TokenKind::Symbol, ")")
    }

    fn at_print_argument(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::String | TokenKind::Integer | TokenKind::Float | TokenKind::Identifier
        )
    }

    /// Lookahead by lexeme for the unreserved statement words.
    fn at_word(&self, word: &str) -> bool {
        let token = self.peek();
        matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword) && token.lexeme == word
    }
}
