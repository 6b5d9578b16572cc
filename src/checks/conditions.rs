//! Condition checks that need the raw token stream.
//!
//! `elif b:` and `else:` followed by a lone `if b:` build the same tree,
//! so telling them apart means looking at the keywords and indentation
//! actually written.

use crate::engine::{CheckError, TokenCheck, TokenContext};
use crate::syntax::{Token, TokenKind};
use crate::violations::refactoring::IMPLICIT_ELIF;

/// Token kinds allowed between `else` and the `if` it wraps.
const ELSE_TO_IF: &[TokenKind] = &[
    TokenKind::Newline,
    TokenKind::BlankLine,
    TokenKind::Colon,
    TokenKind::Indent,
];

/// Flags `else:` blocks whose only content is an `if` statement.
pub struct ImplicitElifCheck;

impl TokenCheck for ImplicitElifCheck {
    fn name(&self) -> &'static str {
        "implicit_elif"
    }

    fn token_kinds(&self) -> &'static [TokenKind] {
        &[TokenKind::Name]
    }

    fn visit_token(
        &self,
        index: usize,
        tokens: &[Token],
        ctx: &mut TokenContext<'_>,
    ) -> Result<(), CheckError> {
        if !tokens[index].is_keyword("else") || !else_belongs_to_if(tokens, index) {
            return Ok(());
        }

        let Some(offset) = tokens[index + 1..]
            .iter()
            .position(|t| !ELSE_TO_IF.contains(&t.kind))
        else {
            return Ok(());
        };
        let if_index = index + 1 + offset;
        if !tokens[if_index].is_keyword("if") {
            return Ok(());
        }

        if !has_code_after_if(tokens, if_index) {
            ctx.add_violation(&IMPLICIT_ELIF, tokens[if_index].position)?;
        }
        Ok(())
    }
}

/// Whether the `else` at `index` closes an `if`/`elif` rather than a loop
/// or `try`, or is part of a conditional expression.
fn else_belongs_to_if(tokens: &[Token], index: usize) -> bool {
    let Some(dedent) = index.checked_sub(1).map(|i| &tokens[i]) else {
        return false;
    };
    // not first on its line, e.g. `a if b else c`
    if dedent.kind != TokenKind::Dedent {
        return false;
    }

    tokens[..index - 1]
        .iter()
        .rev()
        .filter(|t| t.kind == TokenKind::Name)
        .find(|t| t.position.column == dedent.position.column)
        .map(|owner| owner.text == "if" || owner.text == "elif")
        .unwrap_or(false)
}

/// Whether any statement follows the body of the `if` at `if_index`
/// inside the enclosing `else` block.
fn has_code_after_if(tokens: &[Token], if_index: usize) -> bool {
    let is_block_edge = |t: &Token| matches!(t.kind, TokenKind::Indent | TokenKind::Dedent);

    let Some(offset) = tokens[if_index + 1..].iter().position(is_block_edge) else {
        return false;
    };
    let mut cursor = if_index + 1 + offset + 1;

    // walk to the end of the `if` body
    let mut depth = 1usize;
    while depth > 0 {
        let Some(token) = tokens.get(cursor) else {
            return false;
        };
        match token.kind {
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => depth -= 1,
            _ => {}
        }
        cursor += 1;
    }

    match tokens.get(cursor) {
        Some(next) => next.kind != TokenKind::Dedent,
        None => false,
    }
}
