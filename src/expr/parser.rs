//! Pratt parser from tokens to [`Expr`].

use crate::error::ParseError;
use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::lexer::{Spanned, Token};

/// Binding power of prefix minus: below `^`, above `*` and `/`.
///
/// `-x^2` parses as `-(x^2)`.
const PREFIX_PRECEDENCE: u8 = 25;

/// Limit on both parser recursion and the height of the resulting tree.
///
/// Resolution and evaluation recurse over the tree.
pub(crate) const MAX_DEPTH: usize = 256;

pub(crate) fn parse_tokens(tokens: &[Spanned]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let tree = parser.parse_expr(0)?;
    match parser.current() {
        None => Ok(tree.expr),
        Some(spanned) => Err(ParseError::UnexpectedToken {
            expected: "operator or end of formula",
            found: spanned.token.describe(),
            pos: spanned.pos,
        }),
    }
}

/// A parsed expression with the height of its tree.
struct Subtree {
    expr: Expr,
    height: usize,
}

impl Subtree {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Byte offset of the current token, or of the last one at end of input.
    fn offset(&self) -> usize {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(0, |spanned| spanned.pos)
    }

    fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            limit: MAX_DEPTH,
            pos: self.offset(),
        }
    }

    /// Height of a new node over children of height `children`.
    fn grow(&self, children: usize) -> Result<usize, ParseError> {
        let height = children + 1;
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok(height)
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        match self.current() {
            Some(spanned) if spanned.token == token => {
                self.advance();
                Ok(())
            }
            Some(spanned) => Err(ParseError::UnexpectedToken {
                expected,
                found: spanned.token.describe(),
                pos: spanned.pos,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Subtree, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let result = self.parse_infix(min_precedence);
        self.depth -= 1;
        result
    }

    fn parse_infix(&mut self, min_precedence: u8) -> Result<Subtree, ParseError> {
        let mut left = self.parse_prefix()?;

        while let Some(Spanned {
            token: Token::Op(op),
            ..
        }) = self.current()
        {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();
            // Power is right associative.
            let next = if *op == BinaryOp::Pow {
                precedence
            } else {
                precedence + 1
            };
            let right = self.parse_expr(next)?;
            let height = self.grow(left.height.max(right.height))?;
            left = Subtree {
                expr: Expr::binary(*op, left.expr, right.expr),
                height,
            };
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Subtree, ParseError> {
        let spanned = self.current().ok_or(ParseError::UnexpectedEnd)?;
        match &spanned.token {
            Token::Number(n) => {
                self.advance();
                Ok(Subtree::leaf(Expr::Number(*n)))
            }
            Token::Ident(name) => {
                self.advance();
                if matches!(self.current(), Some(s) if s.token == Token::LeftParen) {
                    self.advance();
                    let args = self.parse_arguments()?;
                    self.expect(Token::RightParen, "')'")?;
                    let tallest = args.iter().map(|arg| arg.height).max().unwrap_or(0);
                    let height = self.grow(tallest)?;
                    Ok(Subtree {
                        expr: Expr::Call {
                            name: name.clone(),
                            args: args.into_iter().map(|arg| arg.expr).collect(),
                        },
                        height,
                    })
                } else {
                    Ok(Subtree::leaf(Expr::Symbol(name.clone())))
                }
            }
            Token::Op(BinaryOp::Sub) => {
                self.advance();
                let inner = self.parse_expr(PREFIX_PRECEDENCE)?;
                let height = self.grow(inner.height)?;
                Ok(Subtree {
                    expr: Expr::Neg(Box::new(inner.expr)),
                    height,
                })
            }
            Token::Op(BinaryOp::Add) => {
                self.advance();
                self.parse_expr(PREFIX_PRECEDENCE)
            }
            Token::LeftParen => {
                self.advance();
                let inner = self.parse_expr(0)?;
                self.expect(Token::RightParen, "')'")?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                expected: "number, name, or '('",
                found: other.describe(),
                pos: spanned.pos,
            }),
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<Subtree>, ParseError> {
        let mut args = Vec::new();
        if matches!(self.current(), Some(s) if s.token == Token::RightParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr(0)?);
            match self.current() {
                Some(Spanned {
                    token: Token::Comma,
                    ..
                }) => self.advance(),
                _ => return Ok(args),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::lex;

    fn parse(input: &str) -> Result<Expr, ParseError> {
        parse_tokens(&lex(input)?)
    }

    #[test]
    fn precedence_and_grouping() {
        match parse("x + 2 * 3").expect("parses") {
            Expr::Binary(BinaryOp::Add, lhs, rhs) => {
                assert_eq!(*lhs, Expr::Symbol("x".into()));
                assert!(matches!(*rhs, Expr::Binary(BinaryOp::Mul, _, _)));
            }
            other => panic!("expected Add at top level, got {other:?}"),
        }
        assert!(matches!(
            parse("(x + 1) * 2").expect("parses"),
            Expr::Binary(BinaryOp::Mul, _, _)
        ));
    }

    #[test]
    fn power_is_right_associative() {
        match parse("2^3^2").expect("parses") {
            Expr::Binary(BinaryOp::Pow, lhs, rhs) => {
                assert_eq!(*lhs, Expr::Number(2.0));
                assert!(matches!(*rhs, Expr::Binary(BinaryOp::Pow, _, _)));
            }
            other => panic!("expected Pow at top level, got {other:?}"),
        }
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert!(matches!(parse("-x^2").expect("parses"), Expr::Neg(_)));
    }

    #[test]
    fn calls_collect_arguments() {
        match parse("logb(8, 2)").expect("parses") {
            Expr::Call { name, args } => {
                assert_eq!(name, "logb");
                assert_eq!(args, vec![Expr::Number(8.0), Expr::Number(2.0)]);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("(x + 1"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(
            parse("()"),
            Err(ParseError::UnexpectedToken { pos: 1, .. })
        ));
        assert!(matches!(
            parse("x 2"),
            Err(ParseError::UnexpectedToken { pos: 2, .. })
        ));
        assert!(matches!(
            parse("sin(x,"),
            Err(ParseError::UnexpectedEnd)
        ));
    }

    #[test]
    fn unbounded_nesting_is_an_error() {
        let inputs = [
            "(".repeat(100_000),
            format!("{}x", "(".repeat(3_000)),
            format!("{}x", "-".repeat(3_000)),
            format!("{}x", "+".repeat(3_000)),
            format!("{}x{}", "sin(".repeat(3_000), ")".repeat(3_000)),
            format!("x{}", "+x".repeat(3_000)),
            format!("x{}", "^x".repeat(3_000)),
        ];
        for input in &inputs {
            assert!(
                matches!(parse(input), Err(ParseError::TooDeep { limit: MAX_DEPTH, .. })),
                "accepted {} bytes",
                input.len()
            );
            assert!(crate::expr::compile(input, "x").is_err());
        }
    }

    #[test]
    fn nesting_below_the_limit_is_accepted() {
        let parens = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&parens), Ok(Expr::Symbol("x".into())));
        let chain = format!("x{}", "+x".repeat(100));
        let f = crate::expr::compile(&chain, "x").expect("compiles");
        assert_eq!(f.eval(1.0), 101.0);
    }
}
