//! Python tokenizer producing the layout-preserving token stream.
//!
//! Mirrors the token classes of the reference Python tokenizer closely
//! enough for layout-sensitive checks:
//! - `Indent`/`Dedent` from an indentation stack, dedents positioned at the
//!   first token of the closing line
//! - `Newline` at the end of logical lines, `BlankLine` for blank and
//!   comment-only lines and for newlines inside brackets
//! - keywords are plain `Name` tokens

use regex::Regex;
use thiserror::Error;

use super::{Position, Token, TokenKind};

/// Errors raised on sources the tokenizer cannot split.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("{position}: unindent does not match any outer indentation level")]
    InconsistentDedent { position: Position },
    #[error("{position}: unterminated string literal")]
    UnterminatedString { position: Position },
    #[error("{position}: unexpected character {found:?}")]
    UnexpectedCharacter { position: Position, found: char },
}

impl TokenizeError {
    pub fn position(&self) -> Position {
        match self {
            TokenizeError::InconsistentDedent { position }
            | TokenizeError::UnterminatedString { position }
            | TokenizeError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

lazy_static::lazy_static! {
    static ref NAME: Regex = Regex::new(r"^[^\W\d]\w*").unwrap();
    static ref NUMBER: Regex = Regex::new(
        r"^(?:0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|(?:\d[\d_]*(?:\.[\d_]*)?|\.\d[\d_]*)(?:[eE][+-]?\d[\d_]*)?[jJ]?)"
    )
    .unwrap();
    static ref STRING_START: Regex =
        Regex::new(r#"^(?i:rb|br|fr|rf|[rbuf])?(?:'''|"""|'|")"#).unwrap();
    static ref OPERATOR: Regex = Regex::new(
        r"^(?:\*\*=|//=|>>=|<<=|\.\.\.|->|:=|\*\*|//|<<|>>|<=|>=|==|!=|[-+*/%@&|^]=|[-+*/%@&|^~<>()\[\]{},:.;=!])"
    )
    .unwrap();
}

/// Split Python source into tokens, ending with an `EndMarker`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(source).run()
}

/// Outcome of reading the indentation of a physical line.
enum LineStart {
    Code,
    Blank,
    End,
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    depth: usize,
    indents: Vec<usize>,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            line_start: 0,
            depth: 0,
            indents: vec![0],
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, TokenizeError> {
        let mut at_line_start = true;
        let mut continued = false;

        loop {
            if at_line_start {
                if self.depth == 0 && !continued {
                    match self.indentation()? {
                        LineStart::Blank => continue,
                        LineStart::End => break,
                        LineStart::Code => {}
                    }
                }
                at_line_start = false;
                continued = false;
            }

            let src = self.src;
            let rest = &src[self.pos..];
            let Some(c) = rest.chars().next() else {
                break;
            };

            match c {
                ' ' | '\t' | '\x0c' => self.pos += 1,
                '\\' if rest[1..].starts_with('\n') || rest[1..].starts_with("\r\n") => {
                    self.pos += 1;
                    self.consume_newline();
                    continued = true;
                    at_line_start = true;
                }
                '\r' | '\n' => {
                    let kind = if self.depth == 0 {
                        TokenKind::Newline
                    } else {
                        TokenKind::BlankLine
                    };
                    let start = self.here();
                    let text = self.consume_newline();
                    self.tokens.push(Token::new(kind, text, start));
                    at_line_start = true;
                }
                '#' => self.comment(),
                _ => self.lex(c)?,
            }
        }

        Ok(self.finish())
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.src[self.line_start..self.pos].chars().count())
    }

    /// Read leading whitespace of a logical line and emit indent/dedent tokens.
    fn indentation(&mut self) -> Result<LineStart, TokenizeError> {
        let start = self.pos;
        let mut column = 0;
        for b in self.src[start..].bytes() {
            match b {
                b' ' => column += 1,
                b'\t' => column = (column / 8 + 1) * 8,
                b'\x0c' => column = 0,
                _ => break,
            }
            self.pos += 1;
        }

        let src = self.src;
        let rest = &src[self.pos..];
        if rest.is_empty() {
            return Ok(LineStart::End);
        }
        if rest.starts_with('#') || rest.starts_with('\n') || rest.starts_with('\r') {
            if rest.starts_with('#') {
                self.comment();
            }
            let at = self.here();
            let text = self.consume_newline();
            self.tokens.push(Token::new(TokenKind::BlankLine, text, at));
            return Ok(LineStart::Blank);
        }

        let current = self.indents.last().copied().unwrap_or(0);
        if column > current {
            self.indents.push(column);
            let text = &self.src[start..self.pos];
            self.tokens
                .push(Token::new(TokenKind::Indent, text, Position::new(self.line, 0)));
        } else if column < current {
            while column < self.indents.last().copied().unwrap_or(0) {
                self.indents.pop();
                self.tokens.push(Token::new(TokenKind::Dedent, "", self.here()));
            }
            if column != self.indents.last().copied().unwrap_or(0) {
                return Err(TokenizeError::InconsistentDedent {
                    position: self.here(),
                });
            }
        }

        Ok(LineStart::Code)
    }

    /// Consume one line break, returning its text (empty at end of input).
    fn consume_newline(&mut self) -> &'a str {
        let src = self.src;
        let rest = &src[self.pos..];
        let len = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\n') || rest.starts_with('\r') {
            1
        } else {
            0
        };
        let text = &rest[..len];
        self.pos += len;
        if len > 0 {
            self.line += 1;
            self.line_start = self.pos;
        }
        text
    }

    fn comment(&mut self) {
        let rest = &self.src[self.pos..];
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        self.push(TokenKind::Comment, end);
    }

    /// Push a single-line token of `len` bytes starting at the cursor.
    fn push(&mut self, kind: TokenKind, len: usize) {
        let start = self.here();
        let text = &self.src[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, text, start));
        self.pos += len;
    }

    fn lex(&mut self, c: char) -> Result<(), TokenizeError> {
        let src = self.src;
        let rest = &src[self.pos..];

        if let Some(m) = STRING_START.find(rest) {
            let opener = m.as_str();
            let quote_len = if opener.ends_with("'''") || opener.ends_with("\"\"\"") {
                3
            } else {
                1
            };
            return self.string(m.end(), &opener[opener.len() - quote_len..]);
        }

        if c.is_ascii_digit() || (c == '.' && rest[1..].starts_with(|d: char| d.is_ascii_digit())) {
            let len = NUMBER.find(rest).map(|m| m.end()).unwrap_or(1);
            self.push(TokenKind::Number, len);
            return Ok(());
        }

        if let Some(m) = NAME.find(rest) {
            self.push(TokenKind::Name, m.end());
            return Ok(());
        }

        if let Some(m) = OPERATOR.find(rest) {
            let kind = match m.as_str() {
                "(" | "[" | "{" => {
                    self.depth += 1;
                    TokenKind::Op
                }
                ")" | "]" | "}" => {
                    self.depth = self.depth.saturating_sub(1);
                    TokenKind::Op
                }
                ":" => TokenKind::Colon,
                _ => TokenKind::Op,
            };
            self.push(kind, m.end());
            return Ok(());
        }

        Err(TokenizeError::UnexpectedCharacter {
            position: self.here(),
            found: c,
        })
    }

    /// Lex a string literal whose opener (prefix + quote) is `opener_len` bytes.
    fn string(&mut self, opener_len: usize, quote: &str) -> Result<(), TokenizeError> {
        let start = self.here();
        let bytes = self.src.as_bytes();
        let delimiter = quote.as_bytes();
        let triple = delimiter.len() == 3;
        let mut i = self.pos + opener_len;

        loop {
            let Some(&b) = bytes.get(i) else {
                return Err(TokenizeError::UnterminatedString { position: start });
            };
            match b {
                b'\\' if bytes[i + 1..].starts_with(b"\r\n") => i += 3,
                b'\\' => i += 2,
                b'\n' | b'\r' if !triple => {
                    return Err(TokenizeError::UnterminatedString { position: start });
                }
                _ if b == delimiter[0] && bytes[i..].starts_with(delimiter) => {
                    i += delimiter.len();
                    break;
                }
                _ => i += 1,
            }
        }

        let src = self.src;
        let text = &src[self.pos..i];
        self.tokens.push(Token::new(TokenKind::String, text, start));
        for (offset, b) in text.bytes().enumerate() {
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + offset + 1;
            }
        }
        self.pos = i;
        Ok(())
    }

    fn finish(mut self) -> Vec<Token> {
        let ends_logical_line = matches!(
            self.tokens.last().map(|t| t.kind),
            None | Some(TokenKind::Newline) | Some(TokenKind::BlankLine)
        );
        if !ends_logical_line {
            let at = self.here();
            self.tokens.push(Token::new(TokenKind::Newline, "", at));
        }

        let end = if self.pos == self.line_start {
            self.here()
        } else {
            Position::new(self.line + 1, 0)
        };
        while self.indents.len() > 1 {
            self.indents.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", end));
        }
        self.tokens.push(Token::new(TokenKind::EndMarker, "", end));
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_statement() {
        use TokenKind::*;
        assert_eq!(
            kinds("x = 1\n"),
            vec![Name, Op, Number, Newline, EndMarker]
        );
    }

    #[test]
    fn test_indent_and_dedent_positions() {
        let source = "if a:\n    x = 1\nelse:\n    y = 2\n";
        let tokens = tokenize(source).unwrap();

        let indent = tokens.iter().find(|t| t.kind == TokenKind::Indent).unwrap();
        assert_eq!(indent.position, Position::new(2, 0));
        assert_eq!(indent.text, "    ");

        let else_index = tokens.iter().position(|t| t.is_keyword("else")).unwrap();
        let dedent = &tokens[else_index - 1];
        assert_eq!(dedent.kind, TokenKind::Dedent);
        assert_eq!(dedent.position, Position::new(3, 0));
        assert_eq!(tokens[else_index + 1].kind, TokenKind::Colon);

        // Trailing dedent closes the else body before the end marker.
        let n = tokens.len();
        assert_eq!(tokens[n - 2].kind, TokenKind::Dedent);
        assert_eq!(tokens[n - 1].kind, TokenKind::EndMarker);
    }

    #[test]
    fn test_blank_and_comment_lines_do_not_dedent() {
        use TokenKind::*;
        let source = "def f():\n    x = 1\n\n    # note\n    return x\n";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.iter().filter(|t| t.kind == Dedent).count(), 1);
        assert!(tokens.iter().any(|t| t.kind == Comment && t.text == "# note"));
        assert_eq!(tokens.iter().filter(|t| t.kind == BlankLine).count(), 2);
    }

    #[test]
    fn test_newlines_inside_brackets_are_blank_lines() {
        use TokenKind::*;
        let source = "x = (\n    1,\n)\n";
        assert_eq!(
            kinds(source),
            vec![Name, Op, Op, BlankLine, Number, Op, BlankLine, Op, Newline, EndMarker]
        );
    }

    #[test]
    fn test_strings_with_prefixes_and_triple_quotes() {
        let source = "a = rb'x\\'y'\nb = \"\"\"one\ntwo\"\"\"\nc = 1\n";
        let tokens = tokenize(source).unwrap();
        let strings: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::String)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(strings, vec!["rb'x\\'y'", "\"\"\"one\ntwo\"\"\""]);

        let c = tokens.iter().find(|t| t.text == "c").unwrap();
        assert_eq!(c.position, Position::new(4, 0));
    }

    #[test]
    fn test_line_continuation_suppresses_indent() {
        use TokenKind::*;
        let source = "x = 1 + \\\n        2\ny = 3\n";
        let tokens = tokenize(source).unwrap();
        assert!(!tokens.iter().any(|t| t.kind == Indent));
        assert_eq!(tokens.iter().filter(|t| t.kind == Newline).count(), 2);
    }

    #[test]
    fn test_missing_final_newline() {
        use TokenKind::*;
        assert_eq!(
            kinds("if a:\n    pass"),
            vec![Name, Name, Colon, Newline, Indent, Name, Newline, Dedent, EndMarker]
        );
    }

    #[test]
    fn test_operators_and_numbers() {
        let tokens = tokenize("x **= 0x1F + .5e3 // 2\n").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "**=", "0x1F", "+", ".5e3", "//", "2", "\n", ""]);
    }

    #[test]
    fn test_inconsistent_dedent_is_an_error() {
        let err = tokenize("if a:\n    x = 1\n  y = 2\n").unwrap_err();
        assert!(matches!(err, TokenizeError::InconsistentDedent { .. }));
        assert_eq!(err.position().line, 3);
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let err = tokenize("x = 'abc\n").unwrap_err();
        assert_eq!(
            err,
            TokenizeError::UnterminatedString {
                position: Position::new(1, 4)
            }
        );
    }

    #[test]
    fn test_crlf_continuation_inside_string() {
        let tokens = tokenize("x = 'a\\\r\nb'\r\n").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "'a\\\r\nb'");
        assert_eq!(tokens[3].kind, TokenKind::Newline);
        assert_eq!(tokens[3].position.line, 2);
    }
}
