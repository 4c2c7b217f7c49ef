//! Formula tokenizer.

use crate::error::ParseError;
use crate::expr::ast::BinaryOp;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Op(BinaryOp),
    LeftParen,
    RightParen,
    Comma,
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Ident(name) => format!("'{name}'"),
            Self::Op(op) => format!("operator {op:?}"),
            Self::LeftParen => "'('".to_string(),
            Self::RightParen => "')'".to_string(),
            Self::Comma => "','".to_string(),
        }
    }
}

/// Token with its byte offset in the source text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

pub(crate) fn lex(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];
        let start = pos;
        let token = match ch {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
                continue;
            }
            b'+' => Token::Op(BinaryOp::Add),
            b'-' => Token::Op(BinaryOp::Sub),
            b'/' => Token::Op(BinaryOp::Div),
            b'^' => Token::Op(BinaryOp::Pow),
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 1;
                Token::Op(BinaryOp::Pow)
            }
            b'*' => Token::Op(BinaryOp::Mul),
            b'(' => Token::LeftParen,
            b')' => Token::RightParen,
            b',' => Token::Comma,
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &input[start..pos];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    pos: start,
                })?;
                tokens.push(Spanned {
                    token: Token::Number(value),
                    pos: start,
                });
                continue;
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                tokens.push(Spanned {
                    token: Token::Ident(input[start..pos].to_string()),
                    pos: start,
                });
                continue;
            }
            _ => {
                let ch = input[start..].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedChar { ch, pos: start });
            }
        };
        tokens.push(Spanned { token, pos: start });
        pos += 1;
    }

    Ok(tokens)
}

/// Scan `digits [. digits] [e [+-] digits]`, returning the end offset.
///
/// The exponent is only consumed when digits follow it, so `2e` stays a
/// number followed by an identifier.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            pos = exp;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        lex(input)
            .expect("lexes")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            vec![
                Token::Ident("x".into()),
                Token::Op(BinaryOp::Pow),
                Token::Number(2.0)
            ]
        );
    }

    #[test]
    fn scientific_literals() {
        assert_eq!(kinds("1.5e3"), vec![Token::Number(1500.0)]);
        assert_eq!(kinds("2e-1"), vec![Token::Number(0.2)]);
        assert_eq!(
            kinds("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            lex("x $ 2"),
            Err(ParseError::UnexpectedChar { ch: '$', pos: 2 })
        );
        assert!(matches!(
            lex("1.2.3"),
            Err(ParseError::InvalidNumber { pos: 0, .. })
        ));
    }
}
