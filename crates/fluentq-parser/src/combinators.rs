//! Common parser combinators for where expressions

use fluentq_ast::Literal;
use winnow::ascii::{digit1, multispace0};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

/// Parser input: a plain string slice, manually checkpointed where needed
pub type Input<'a> = &'a str;

/// Result type shared by all parser functions
pub type PResult<T> = winnow::error::ModalResult<T>;

/// Skip any amount of whitespace
pub fn ws(input: &mut Input<'_>) -> PResult<()> {
    multispace0.void().parse_next(input)
}

/// Match an exact token such as `"=="` or `"("`
pub fn lit<'a>(token: &'static str) -> impl Parser<Input<'a>, &'a str, ErrMode<ContextError>> {
    literal(token)
}

/// Match a keyword: the word itself, not followed by an identifier character
pub fn keyword<'a>(word: &'static str) -> impl Parser<Input<'a>, (), ErrMode<ContextError>> {
    move |input: &mut Input<'a>| {
        let checkpoint = *input;
        literal(word).void().parse_next(input)?;
        if input
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            *input = checkpoint;
            return Err(ErrMode::Backtrack(ContextError::new()));
        }
        Ok(())
    }
}

/// Match a keyword surrounded by optional whitespace
pub fn padded_keyword<'a>(word: &'static str) -> impl Parser<Input<'a>, (), ErrMode<ContextError>> {
    move |input: &mut Input<'a>| {
        let checkpoint = *input;
        ws.parse_next(input)?;
        match keyword(word).parse_next(input) {
            Ok(()) => {
                ws.parse_next(input)?;
                Ok(())
            }
            Err(err) => {
                *input = checkpoint;
                Err(err)
            }
        }
    }
}

/// Match a symbolic operator token surrounded by optional whitespace
pub fn padded_lit<'a>(token: &'static str) -> impl Parser<Input<'a>, (), ErrMode<ContextError>> {
    move |input: &mut Input<'a>| {
        let checkpoint = *input;
        ws.parse_next(input)?;
        match lit(token).void().parse_next(input) {
            Ok(()) => {
                ws.parse_next(input)?;
                Ok(())
            }
            Err(err) => {
                *input = checkpoint;
                Err(err)
            }
        }
    }
}

/// Check if a word is reserved by the expression grammar
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "and"
            | "or"
            | "not"
            | "in"
            | "contains"
            | "starts"
            | "ends"
            | "with"
            | "matches"
            | "true"
            | "false"
            | "null"
    )
}

/// Parse an identifier (not a keyword): letter or `_`, then alphanumerics or `_`
pub fn identifier(input: &mut Input<'_>) -> PResult<String> {
    let checkpoint = *input;
    let ident = (
        one_of(|c: char| c.is_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)?;

    if is_keyword(ident) {
        *input = checkpoint;
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok(ident.to_string())
}

/// Parse a string literal, single- or double-quoted, with backslash escapes
pub fn string_literal(input: &mut Input<'_>) -> PResult<String> {
    let checkpoint = *input;
    let quote = one_of(['\'', '"']).parse_next(input)?;

    let rest = *input;
    let mut result = String::new();
    let mut chars = rest.char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch == quote {
            *input = &rest[offset + ch.len_utf8()..];
            return Ok(result);
        }
        if ch == '\\' {
            match chars.next() {
                Some((_, 'n')) => result.push('\n'),
                Some((_, 't')) => result.push('\t'),
                Some((_, escaped)) => result.push(escaped),
                None => break,
            }
        } else {
            result.push(ch);
        }
    }

    // Unterminated string
    *input = checkpoint;
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Parse a number literal; a decimal point with digits makes it a float
pub fn number(input: &mut Input<'_>) -> PResult<Literal> {
    let start = *input;
    digit1.void().parse_next(input)?;

    let mut is_float = false;
    let checkpoint = *input;
    if lit(".").parse_next(input).is_ok() {
        if digit1::<_, ErrMode<ContextError>>.void().parse_next(input).is_ok() {
            is_float = true;
        } else {
            *input = checkpoint;
        }
    }

    let consumed = &start[..start.len() - input.len()];
    if is_float {
        Ok(Literal::Float(consumed.parse().unwrap_or(0.0)))
    } else {
        Ok(Literal::Int(consumed.parse().unwrap_or(0)))
    }
}

/// Parse a boolean or null keyword literal
pub fn keyword_literal(input: &mut Input<'_>) -> PResult<Literal> {
    if keyword("true").parse_next(input).is_ok() {
        Ok(Literal::Bool(true))
    } else if keyword("false").parse_next(input).is_ok() {
        Ok(Literal::Bool(false))
    } else if keyword("null").parse_next(input).is_ok() {
        Ok(Literal::Null)
    } else {
        Err(ErrMode::Backtrack(ContextError::new()))
    }
}
