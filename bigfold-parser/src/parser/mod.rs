pub mod error;
pub mod fmt;
pub mod node;
pub mod stream;
pub mod token;
pub mod tree;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{kind, Error};
use node::Tree;
use rug::Integer;
use std::ops::Range;
use stream::{FlatKind, FlatToken};
use token::op::{BinOp, BinOpKind};

/// The default maximum nesting depth of parentheses and function calls.
pub const MAX_DEPTH: usize = 256;

/// What the most recently emitted token was, which decides whether an implicit multiplication or
/// a leading zero has to be inserted before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    /// Nothing has been emitted yet.
    Start,

    /// A literal, variable, or closing parenthesis.
    Operand,

    /// A binary operator.
    Operator,

    /// An opening parenthesis.
    Open,

    /// An argument separator.
    Separator,
}

/// The tokenizer. Consumes the classified character runs of an expression and produces the flat
/// token stream, with implicit multiplication and leading zeros already inserted.
///
/// Whitespace only separates tokens of different classes; digits or letters on either side of
/// whitespace still join into the same pending run.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being tokenized.
    source: &'source str,

    /// The tokens emitted so far.
    output: Vec<FlatToken>,

    /// The pending run of digits and its span.
    number: Option<(String, Range<usize>)>,

    /// The pending run of letters, with the span of each letter.
    letters: Vec<(char, Range<usize>)>,

    /// The kind of the last emitted token.
    last: Last,
}

impl<'source> Parser<'source> {
    /// Creates a new tokenizer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            output: Vec::new(),
            number: None,
            letters: Vec::new(),
            last: Last::Start,
        }
    }

    /// Tokenizes the entire source, returning the flat token stream.
    pub fn flatten(mut self) -> Result<Vec<FlatToken>, Error> {
        let tokens = tokenize_complete(self.source);
        for token in tokens.iter() {
            self.push(token)?;
        }
        self.flush()?;
        Ok(self.output)
    }

    /// Consumes one classified run.
    fn push(&mut self, token: &Token) -> Result<(), Error> {
        if let Some(op) = BinOpKind::from_token(token.kind) {
            return self.push_operator(op, token.span.clone());
        }

        match token.kind {
            TokenKind::Number => {
                self.flush_letters();
                self.push_number(token);
                Ok(())
            },
            TokenKind::Letters => {
                self.flush_number()?;
                self.push_letters(token);
                Ok(())
            },
            TokenKind::OpenParen => self.push_open(token.span.clone()),
            TokenKind::CloseParen => {
                self.flush()?;
                self.output.push(FlatToken::new(FlatKind::CloseParen, token.span.clone()));
                self.last = Last::Operand;
                Ok(())
            },
            TokenKind::Comma => {
                self.flush()?;
                self.output.push(FlatToken::new(FlatKind::Separator, token.span.clone()));
                self.last = Last::Separator;
                Ok(())
            },
            TokenKind::Symbol => Err(Error::new(
                vec![token.span.clone()],
                kind::InvalidCharacter {
                    character: token.lexeme.chars().next().unwrap_or_default(),
                },
            )),
            // whitespace
            _ => Ok(()),
        }
    }

    /// Extends the pending number, or starts a new one.
    fn push_number(&mut self, token: &Token) {
        match &mut self.number {
            Some((digits, span)) => {
                digits.push_str(token.lexeme);
                span.end = token.span.end;
            },
            None => self.number = Some((token.lexeme.to_string(), token.span.clone())),
        }
    }

    /// Extends the pending run of letters.
    fn push_letters(&mut self, token: &Token) {
        let start = token.span.start;
        self.letters.extend(
            token.lexeme
                .char_indices()
                .map(|(i, c)| (c, start + i..start + i + c.len_utf8())),
        );
    }

    /// Emits a binary operator, synthesizing a leading `0` if the operator is a sign at the start
    /// of the expression, a group, or a function argument.
    fn push_operator(&mut self, op: BinOpKind, span: Range<usize>) -> Result<(), Error> {
        self.flush()?;
        if matches!(op, BinOpKind::Add | BinOpKind::Sub)
            && matches!(self.last, Last::Start | Last::Open | Last::Separator)
        {
            self.output.push(FlatToken::new(
                FlatKind::Literal(Integer::new()),
                span.start..span.start,
            ));
        }
        self.output.push(FlatToken::new(FlatKind::Operator(BinOp::explicit(op)), span));
        self.last = Last::Operator;
        Ok(())
    }

    /// Emits an opening parenthesis. A pending run of letters directly before it becomes the name
    /// of a function call.
    fn push_open(&mut self, span: Range<usize>) -> Result<(), Error> {
        self.flush_number()?;

        let name_span = match (self.letters.first(), self.letters.last()) {
            (Some((_, first)), Some((_, last))) => Some(first.start..last.end),
            _ => None,
        };

        if let Some(name_span) = name_span {
            let name = self.letters.drain(..).map(|(c, _)| c).collect::<String>();
            self.implicit_mul(name_span.start);
            self.output.push(FlatToken::new(FlatKind::Function(name), name_span));
        } else {
            self.implicit_mul(span.start);
        }

        self.output.push(FlatToken::new(FlatKind::OpenParen, span));
        self.last = Last::Open;
        Ok(())
    }

    /// Flushes both pending runs.
    fn flush(&mut self) -> Result<(), Error> {
        self.flush_number()?;
        self.flush_letters();
        Ok(())
    }

    /// Emits the pending number as a literal.
    fn flush_number(&mut self) -> Result<(), Error> {
        let Some((digits, span)) = self.number.take() else {
            return Ok(());
        };

        let value = if digits.contains('.') {
            None
        } else {
            Integer::from_str_radix(&digits, 10).ok()
        };
        let Some(value) = value else {
            return Err(Error::new(
                vec![span.clone()],
                kind::InvalidNumber { lexeme: self.source[span].to_string() },
            ));
        };

        self.implicit_mul(span.start);
        self.output.push(FlatToken::new(FlatKind::Literal(value), span));
        self.last = Last::Operand;
        Ok(())
    }

    /// Emits the pending letters as one variable each, multiplied together.
    fn flush_letters(&mut self) {
        let letters = std::mem::take(&mut self.letters);
        for (name, span) in letters {
            self.implicit_mul(span.start);
            self.output.push(FlatToken::new(FlatKind::Variable(name), span));
            self.last = Last::Operand;
        }
    }

    /// Inserts an implicit multiplication at the given position if the last token was an operand.
    fn implicit_mul(&mut self, at: usize) {
        if self.last == Last::Operand {
            self.output.push(FlatToken::new(FlatKind::Operator(BinOp::implicit_mul()), at..at));
            self.last = Last::Operator;
        }
    }
}

/// Parses the given source into a token tree, using the default maximum nesting depth.
pub fn parse(source: &str) -> Result<Tree, Error> {
    parse_with_depth(source, MAX_DEPTH)
}

/// Parses the given source into a token tree, failing if parentheses and function calls are nested
/// more than `max_depth` levels deep.
pub fn parse_with_depth(source: &str, max_depth: usize) -> Result<Tree, Error> {
    let tokens = Parser::new(source).flatten()?;
    tree::build(tokens, max_depth)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Tokenizes the source and renders the flat stream back into text.
    fn flat(source: &str) -> String {
        Parser::new(source)
            .flatten()
            .unwrap()
            .into_iter()
            .map(|token| match token.kind {
                FlatKind::Literal(value) => value.to_string(),
                FlatKind::Variable(name) => name.to_string(),
                FlatKind::Operator(op) => op.kind.to_string(),
                FlatKind::Function(name) => name,
                FlatKind::OpenParen => "(".to_string(),
                FlatKind::CloseParen => ")".to_string(),
                FlatKind::Separator => ",".to_string(),
            })
            .collect()
    }

    #[test]
    fn implicit_mul_between_number_and_letters() {
        assert_eq!(flat("5x+1+1"), "5*x+1+1");
        assert_eq!(flat("xy"), "x*y");
        assert_eq!(flat("2xyz"), "2*x*y*z");
        assert_eq!(flat("x2"), "x*2");
    }

    #[test]
    fn implicit_mul_around_parentheses() {
        assert_eq!(flat("3(1+2)"), "3*(1+2)");
        assert_eq!(flat("(1+2)3"), "(1+2)*3");
        assert_eq!(flat("(1)(2)"), "(1)*(2)");
        assert_eq!(flat("x(y)"), "x(y)");
        assert_eq!(flat("2abs(x)"), "2*abs(x)");
        assert_eq!(flat("(x)y"), "(x)*y");
    }

    #[test]
    fn leading_zero() {
        assert_eq!(flat("-1+2"), "0-1+2");
        assert_eq!(flat("+1"), "0+1");
        assert_eq!(flat("(-3)"), "(0-3)");
        assert_eq!(flat("mod(-7, -3)"), "mod(0-7,0-3)");
        assert_eq!(flat("2*-3"), "2*-3");
    }

    #[test]
    fn whitespace() {
        assert_eq!(flat("3 * 4"), "3*4");
        assert_eq!(flat(" 1 2 "), "12");
        assert_eq!(flat("x y"), "x*y");
    }

    #[test]
    fn synthesized_spans() {
        let tokens = Parser::new("-5x").flatten().unwrap();
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..0, 0..1, 1..2, 2..2, 2..3]);
        assert!(tokens[0].is_synthesized());
        assert!(!tokens[2].is_synthesized());
        assert_eq!(tokens[3].kind, FlatKind::Operator(BinOp::implicit_mul()));
    }

    #[test]
    fn function_name_span() {
        let tokens = Parser::new("invmod(301,400)").flatten().unwrap();
        assert_eq!(tokens[0], FlatToken::new(FlatKind::Function("invmod".to_string()), 0..6));
        assert_eq!(tokens[1], FlatToken::new(FlatKind::OpenParen, 6..7));
    }

    #[test]
    fn huge_literal() {
        let source = "123456789012345678901234567890123456789012345678901234567890";
        let tokens = Parser::new(source).flatten().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, FlatKind::Literal(source.parse::<Integer>().unwrap()));
    }

    #[test]
    fn invalid_number() {
        let err = Parser::new("1+2.5").flatten().unwrap_err();
        assert_eq!(err.spans, vec![2..5]);
        assert_eq!(err.downcast_ref::<kind::InvalidNumber>().unwrap().lexeme, "2.5");
    }

    #[test]
    fn invalid_character() {
        let err = Parser::new("2 $ 3").flatten().unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(err.downcast_ref::<kind::InvalidCharacter>(), Some(&kind::InvalidCharacter { character: '$' }));
    }
}
