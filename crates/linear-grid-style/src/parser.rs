//! Color string parsing.
//!
//! Accepted forms:
//!
//! - `#RRGGBB` (opaque)
//! - `#AARRGGBB` (alpha first)
//! - a named color, case-insensitive: `black`, `darkgray`, `gray`,
//!   `lightgray`, `white`, `red`, `green`, `blue`, `yellow`, `cyan`,
//!   `magenta`, `aqua`, `fuchsia`, `darkgrey`, `grey`, `lightgrey`, `lime`,
//!   `maroon`, `navy`, `olive`, `purple`, `silver`, `teal`
//!
//! The whole string must be exactly one of these forms. Whitespace, comments
//! and escape sequences are rejected.

use cssparser::{Parser, ParserInput, Token};
use linear_grid_core::logging::targets;

use crate::error::{Result, StyleError};
use crate::types::Color;

/// Named colors as packed `0xAARRGGBB` values.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Parse a color string such as `"#DEDEDE"`, `"#80FF0000"` or `"teal"`.
///
/// # Errors
///
/// Returns [`StyleError::ColorParse`] when the input is not one of the
/// accepted forms.
///
/// # Example
///
/// ```
/// use linear_grid_style::{parse_color, Color};
///
/// assert_eq!(parse_color("#DEDEDE").unwrap(), Color::from_rgb8(222, 222, 222));
/// assert!(parse_color("notacolor").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);

    // The token must cover the whole input verbatim: no whitespace, comments
    // or escapes around or inside it.
    let color = match parser.next_including_whitespace_and_comments() {
        Ok(Token::Hash(hex)) | Ok(Token::IDHash(hex))
            if input.strip_prefix('#') == Some(&**hex) =>
        {
            parse_hex(hex)
                .ok_or_else(|| StyleError::color_parse(input, "expected #RRGGBB or #AARRGGBB"))?
        }
        Ok(Token::Ident(name)) if &**name == input => named_color(name)
            .ok_or_else(|| StyleError::color_parse(input, "not a known color name"))?,
        Ok(token) => {
            return Err(StyleError::color_parse(
                input,
                format!("unexpected token {token:?}"),
            ));
        }
        Err(err) => return Err(StyleError::color_parse(input, format!("{:?}", err.kind))),
    };

    tracing::trace!(target: targets::STYLE, input, ?color, "parsed color");
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb32(0xFF00_0000 | value)),
        8 => Some(Color::from_argb32(value)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, argb)| Color::from_argb32(argb))
}
