//! Property parsing: declaration text → typed [`ComputedValues`] fields.
//!
//! Only the properties the element utilities read are understood. There is
//! no selector matching or cascade here; a declaration block is applied in
//! order on top of whatever values it is given.

use crate::style::scalar::{Scalar, ScalarBox};
use crate::style::tokenizer::{tokenize, Token};
use crate::style::values::{Clip, ComputedValues, Overflow};

/// Errors from property parsing.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
    #[error("malformed declaration: {0}")]
    Malformed(String),
}

/// A single value in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationValue {
    /// A keyword like `hidden` or `auto`.
    Ident(String),
    /// A bare number like `10` or `2`.
    Number(f32),
    /// A number with a unit suffix like `10px` or `50%`.
    Dimension(f32, String),
}

/// Parse a declaration block on top of [`ComputedValues::default`].
pub fn parse_declarations(input: &str) -> Result<ComputedValues, PropertyError> {
    let mut values = ComputedValues::default();
    apply_declarations(&mut values, input)?;
    Ok(values)
}

/// Apply every `property: value...;` declaration in `input` to `values`.
///
/// Stops at the first error; declarations before it stay applied.
pub fn apply_declarations(values: &mut ComputedValues, input: &str) -> Result<(), PropertyError> {
    let tokens = tokenize(input)?;
    for declaration in tokens.split(|(token, _)| *token == Token::Semicolon) {
        if declaration.is_empty() {
            continue;
        }
        let property = match &declaration[0] {
            (Token::Ident, name) => name.to_ascii_lowercase(),
            (_, text) => return Err(PropertyError::Malformed(format!("expected property name, got: {text}"))),
        };
        match declaration.get(1) {
            Some((Token::Colon, _)) => {}
            _ => return Err(PropertyError::Malformed(format!("expected ':' after {property}"))),
        }
        let parsed = declaration[2..]
            .iter()
            .map(|(token, text)| to_value(token, text))
            .collect::<Result<Vec<_>, _>>()?;
        apply_declaration(values, &property, &parsed)?;
    }
    Ok(())
}

fn to_value(token: &Token, text: &str) -> Result<DeclarationValue, PropertyError> {
    let number = |digits: &str| {
        digits
            .parse::<f32>()
            .map_err(|e| PropertyError::Malformed(format!("bad number {text}: {e}")))
    };
    match token {
        Token::Ident => Ok(DeclarationValue::Ident(text.to_ascii_lowercase())),
        Token::Number => Ok(DeclarationValue::Number(number(text)?)),
        Token::Dimension => {
            let split = text
                .find(|c: char| c == '%' || c.is_ascii_alphabetic())
                .unwrap_or(text.len());
            Ok(DeclarationValue::Dimension(number(&text[..split])?, text[split..].to_string()))
        }
        Token::Colon | Token::Semicolon => {
            Err(PropertyError::Malformed(format!("unexpected '{text}' in value")))
        }
    }
}

/// Parse a single declaration value into a [`Scalar`].
pub fn parse_scalar(value: &DeclarationValue) -> Result<Scalar, PropertyError> {
    match value {
        DeclarationValue::Number(n) => Ok(Scalar::px(*n)),
        DeclarationValue::Dimension(n, unit) => match unit.as_str() {
            "px" => Ok(Scalar::px(*n)),
            "%" => Ok(Scalar::percent(*n)),
            other => Err(PropertyError::InvalidValue {
                property: "length".into(),
                message: format!("unknown unit: {other}"),
            }),
        },
        DeclarationValue::Ident(name) if name == "auto" => Ok(Scalar::auto()),
        other => Err(PropertyError::InvalidValue {
            property: "length".into(),
            message: format!("expected number, dimension, or 'auto', got: {other:?}"),
        }),
    }
}

/// Parse 1-4 values into a [`ScalarBox`] (CSS shorthand).
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_scalar_box(values: &[DeclarationValue], property: &str) -> Result<ScalarBox, PropertyError> {
    let scalars = values.iter().map(parse_scalar).collect::<Result<Vec<_>, _>>()?;
    match scalars.as_slice() {
        [all] => Ok(ScalarBox::all(*all)),
        [vertical, horizontal] => Ok(ScalarBox::symmetric(*vertical, *horizontal)),
        [top, horizontal, bottom] => Ok(ScalarBox::new(*top, *horizontal, *bottom, *horizontal)),
        [top, right, bottom, left] => Ok(ScalarBox::new(*top, *right, *bottom, *left)),
        other => Err(PropertyError::InvalidValue {
            property: property.into(),
            message: format!("expected 1-4 values, got {}", other.len()),
        }),
    }
}

fn require_single<'a>(
    values: &'a [DeclarationValue],
    property: &str,
) -> Result<&'a DeclarationValue, PropertyError> {
    match values {
        [value] => Ok(value),
        _ => Err(PropertyError::InvalidValue {
            property: property.into(),
            message: format!("expected 1 value, got {}", values.len()),
        }),
    }
}

fn parse_overflow(value: &DeclarationValue, property: &str) -> Result<Overflow, PropertyError> {
    match value {
        DeclarationValue::Ident(name) => match name.as_str() {
            "visible" => Ok(Overflow::Visible),
            "hidden" => Ok(Overflow::Hidden),
            "auto" => Ok(Overflow::Auto),
            "scroll" => Ok(Overflow::Scroll),
            other => Err(PropertyError::InvalidValue {
                property: property.into(),
                message: format!("expected visible|hidden|auto|scroll, got: {other}"),
            }),
        },
        other => Err(PropertyError::InvalidValue {
            property: property.into(),
            message: format!("expected identifier, got: {other:?}"),
        }),
    }
}

fn parse_clip(value: &DeclarationValue) -> Result<Clip, PropertyError> {
    let invalid = |message: String| PropertyError::InvalidValue {
        property: "clip".into(),
        message,
    };
    match value {
        DeclarationValue::Ident(name) => match name.as_str() {
            "auto" => Ok(Clip::Auto),
            "none" => Ok(Clip::None),
            "always" => Ok(Clip::Always),
            other => Err(invalid(format!("expected auto|none|always|<integer>, got: {other}"))),
        },
        DeclarationValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Ok(Clip::Number(*n as u32)),
        other => Err(invalid(format!("expected a non-negative integer, got: {other:?}"))),
    }
}

/// Apply one declaration (property name + values) to `computed`.
pub fn apply_declaration(
    computed: &mut ComputedValues,
    property: &str,
    values: &[DeclarationValue],
) -> Result<(), PropertyError> {
    match property {
        "overflow" => match values {
            [both] => {
                let overflow = parse_overflow(both, property)?;
                computed.overflow_x = overflow;
                computed.overflow_y = overflow;
            }
            [x, y] => {
                computed.overflow_x = parse_overflow(x, property)?;
                computed.overflow_y = parse_overflow(y, property)?;
            }
            _ => {
                return Err(PropertyError::InvalidValue {
                    property: property.into(),
                    message: format!("expected 1-2 values, got {}", values.len()),
                });
            }
        },
        "overflow-x" => computed.overflow_x = parse_overflow(require_single(values, property)?, property)?,
        "overflow-y" => computed.overflow_y = parse_overflow(require_single(values, property)?, property)?,
        "clip" => computed.clip = parse_clip(require_single(values, property)?)?,
        "width" => computed.width = parse_scalar(require_single(values, property)?)?,
        "height" => computed.height = parse_scalar(require_single(values, property)?)?,
        "margin" => computed.margin = parse_scalar_box(values, property)?,
        "padding" => computed.padding = parse_scalar_box(values, property)?,
        "border-width" => computed.border_width = parse_scalar_box(values, property)?,
        other => return Err(PropertyError::UnknownProperty(other.to_string())),
    }
    Ok(())
}
