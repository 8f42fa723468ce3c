//! Parser state machine and low-level operations.
//!
//! Single left-to-right scan over the token stream. Open brackets are kept on
//! an explicit stack instead of the call stack, so nesting depth is bounded
//! only by input length.

use rowan::TextSize;

use super::error::ParseError;
use super::expr::TypeExpr;
use super::lexer::{Token, TokenKind, lex, token_text};

/// An expression whose `[` has been consumed but whose `]` has not.
#[derive(Debug)]
struct OpenBracket {
    name: String,
    params: Vec<TypeExpr>,
    offset: TextSize,
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    stack: Vec<OpenBracket>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            stack: Vec::new(),
        }
    }

    /// Parse the whole input as one type expression.
    ///
    /// Halts at the first error without scanning further.
    pub fn parse(mut self) -> Result<TypeExpr, ParseError> {
        loop {
            let name = self.name()?;
            self.skip_trivia();

            if self.current() == Some(TokenKind::BracketOpen) {
                let offset = self.offset();
                self.bump();
                self.stack.push(OpenBracket {
                    name,
                    params: Vec::new(),
                    offset,
                });
                continue;
            }

            let mut current = TypeExpr::new(name);
            loop {
                self.skip_trivia();
                if self.stack.is_empty() {
                    return self.finish(current);
                }
                match self.current() {
                    Some(TokenKind::Comma) => {
                        self.bump();
                        self.push_param(current);
                        break;
                    }
                    Some(TokenKind::BracketClose) => {
                        self.bump();
                        current = self.close_bracket(current);
                    }
                    None => return Err(self.unclosed()),
                    Some(_) => return Err(self.extra_characters()),
                }
            }
        }
    }

    /// Depth zero, complete expression: only the end of input may follow.
    fn finish(&self, expr: TypeExpr) -> Result<TypeExpr, ParseError> {
        match self.current() {
            None => Ok(expr),
            Some(TokenKind::BracketClose) => Err(ParseError::RightBracket {
                offset: self.offset().into(),
            }),
            Some(_) => Err(self.extra_characters()),
        }
    }

    /// Consume a name: exactly one name token. Whitespace ends a name, so
    /// `a b` leaves `b` to be reported as trailing input.
    fn name(&mut self) -> Result<String, ParseError> {
        self.skip_trivia();

        let Some(token) = self.tokens.get(self.pos).filter(|t| t.kind == TokenKind::Name) else {
            return Err(self.missing_name());
        };
        let name = token_text(self.source, token).to_string();
        self.bump();
        Ok(name)
    }

    fn missing_name(&self) -> ParseError {
        match self.current() {
            // `typeB[` is unterminated, not nameless
            None if !self.stack.is_empty() => self.unclosed(),
            Some(TokenKind::BracketClose) if self.stack.is_empty() => ParseError::RightBracket {
                offset: self.offset().into(),
            },
            _ => ParseError::MissingTypeName {
                offset: self.offset().into(),
            },
        }
    }

    fn unclosed(&self) -> ParseError {
        let offset = self
            .stack
            .last()
            .map_or(TextSize::from(0), |open| open.offset);
        ParseError::LeftBracket {
            offset: offset.into(),
        }
    }

    fn extra_characters(&self) -> ParseError {
        let offset = self.offset();
        ParseError::ExtraCharacters {
            offset: offset.into(),
            rest: self.source[usize::from(offset)..].to_string(),
        }
    }

    fn push_param(&mut self, expr: TypeExpr) {
        if let Some(open) = self.stack.last_mut() {
            open.params.push(expr);
        }
    }

    fn close_bracket(&mut self, expr: TypeExpr) -> TypeExpr {
        let Some(mut open) = self.stack.pop() else {
            return expr;
        };
        open.params.push(expr);
        TypeExpr {
            name: open.name,
            params: open.params,
        }
    }

    fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Offset of the current token, or end of input.
    fn offset(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .map_or(TextSize::of(self.source), |t| t.span.start())
    }

    fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while self.current() == Some(TokenKind::Whitespace) {
            self.bump();
        }
    }
}
