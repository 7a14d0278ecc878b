use std::{iter::Peekable, str::CharIndices};

use crate::{error::{MarketError, Result}, models::item::{Item, DEFAULT_CURRENCY_ID}};

/// Parses one line of an input file: `"<name>" <appId>[ <currencyId>]`.
///
/// A `\"` inside the quotes is a literal quote. Trailing whitespace is ignored.
pub fn parse_item_line(line: &str) -> Result<Item> {
    let trimmed = line.trim_end();
    let format_err = || MarketError::Format { line: line.to_string() };

    let mut chars = trimmed.char_indices().peekable();

    let name = quoted_name(&mut chars).ok_or_else(format_err)?;
    if !eat_space(&mut chars) { return Err(format_err()) }

    let app_id = number(trimmed, &mut chars).ok_or_else(format_err)?;

    let currency_id = if chars.peek().is_none() { DEFAULT_CURRENCY_ID }
    else {
        if !eat_space(&mut chars) { return Err(format_err()) }
        number(trimmed, &mut chars).ok_or_else(format_err)?
    };

    if chars.peek().is_some() { return Err(format_err()) }

    Item::with_currency(name, app_id, currency_id)
}

fn quoted_name(chars: &mut Peekable<CharIndices>) -> Option<String> {
    if chars.next()?.1 != '"' { return None }

    let mut name = String::new();
    loop {
        match chars.next()?.1 {
            '"' => break,
            '\\' if chars.peek().is_some_and(|&(_, c)| c == '"') => {
                chars.next();
                name.push('"');
            }
            c => name.push(c),
        }
    }

    if name.is_empty() { None } else { Some(name) }
}

fn eat_space(chars: &mut Peekable<CharIndices>) -> bool {
    chars.next_if(|&(_, c)| c == ' ').is_some()
}

// One or more ASCII digits that fit in a u32
fn number(line: &str, chars: &mut Peekable<CharIndices>) -> Option<u32> {
    let start = chars.peek()?.0;
    let mut end = start;

    while let Some((i, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        end = i + c.len_utf8();
    }

    if end == start { return None }
    line[start..end].parse::<u32>().ok()
}
