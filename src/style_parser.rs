use winnow::prelude::*;
use winnow::ascii::{float, multispace0};
use winnow::combinator::{alt, eof, opt, repeat};
use winnow::token::take_while;

use crate::map_ast::Position;

/// Reads `left`/`top` from an inline `style` attribute. `Ok(None)` when
/// either declaration is absent.
pub fn parse_position(style: &str) -> Result<Option<Position>, String> {
    let mut input = style;
    let decls = declarations(&mut input).map_err(|_| {
        format!("syntax error in style attribute: unexpected `{}`", context(input))
    })?;

    let mut left = None;
    let mut top = None;
    for (name, value) in decls {
        let slot = if name.eq_ignore_ascii_case("left") {
            &mut left
        } else if name.eq_ignore_ascii_case("top") {
            &mut top
        } else {
            continue;
        };
        let mut value_input = value;
        let px = pixels(&mut value_input)
            .map_err(|_| format!("invalid `{name}` value: `{}`", context(value)))?;
        *slot = Some(px);
    }

    Ok(match (left, top) {
        (Some(left), Some(top)) => Some(Position { left, top }),
        _ => None,
    })
}

fn context(input: &str) -> String {
    let input = input.trim();
    if input.len() > 40 {
        let cut = (0..=40).rev().find(|&i| input.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &input[..cut])
    } else {
        input.to_string()
    }
}

fn declarations<'s>(input: &mut &'s str) -> winnow::Result<Vec<(&'s str, &'s str)>> {
    let items: Vec<Option<(&str, &str)>> = repeat(
        0..,
        alt(((multispace0, ';').map(|_| None), declaration.map(Some))),
    )
    .parse_next(input)?;
    multispace0.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(items.into_iter().flatten().collect())
}

fn declaration<'s>(input: &mut &'s str) -> winnow::Result<(&'s str, &'s str)> {
    multispace0.parse_next(input)?;
    let name = take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)?;
    multispace0.parse_next(input)?;
    ':'.parse_next(input)?;
    let value = take_while(0.., |c: char| c != ';').parse_next(input)?;
    opt(';').parse_next(input)?;
    Ok((name, value.trim()))
}

fn pixels(input: &mut &str) -> winnow::Result<f64> {
    let value: f64 = float.parse_next(input)?;
    opt("px").parse_next(input)?;
    eof.parse_next(input)?;
    Ok(value)
}
