//! XML decoding: a schema-less byte stream to [`Value`] conversion.
//!
//! A single pass over quick-xml events drives a stack of in-progress
//! frames, one per open element. An element that accumulated child
//! elements becomes a mapping; an element with only character data is a
//! leaf, coerced through the configured [`NumberMode`]. Repeated sibling
//! elements with the same name collapse into an ordered sequence of their
//! values, in document order.

use std::collections::BTreeMap;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal::Decimal;

use crate::error::{CodecError, Result};
use crate::value::{Number, Value};
use crate::xml::NumberMode;

/// Decodes an XML document into a value tree.
///
/// The result is always a mapping with exactly one entry, keyed by the
/// root element's name; the entry's value is the nested structure.
pub fn from_xml(src: &str, numbers: NumberMode) -> Result<Value> {
    let mut reader = Reader::from_str(src);
    // Stack of suspended parent frames: (child elements, text fragments).
    let mut stack: Vec<(BTreeMap<String, Value>, Vec<String>)> = Vec::new();
    let mut children: BTreeMap<String, Value> = BTreeMap::new();
    let mut text: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                stack.push((std::mem::take(&mut children), std::mem::take(&mut text)));
            }
            Event::Empty(start) => {
                let name = element_name(start.name().as_ref())?;
                merge_child(&mut children, name, leaf_value("", numbers));
            }
            Event::Text(fragment) => {
                let decoded = fragment.decode().map_err(CodecError::unparsable)?;
                let unescaped =
                    quick_xml::escape::unescape(&decoded).map_err(CodecError::unparsable)?;
                text.push(unescaped.into_owned());
            }
            Event::CData(fragment) => {
                let decoded = reader
                    .decoder()
                    .decode(&fragment)
                    .map_err(CodecError::unparsable)?;
                text.push(decoded.into_owned());
            }
            Event::GeneralRef(reference) => {
                let name = reader
                    .decoder()
                    .decode(&reference)
                    .map_err(CodecError::unparsable)?;
                text.push(resolve_reference(&name)?);
            }
            Event::End(end) => {
                let name = element_name(end.name().as_ref())?;
                let value = if children.is_empty() {
                    let joined = text.concat();
                    leaf_value(joined.trim(), numbers)
                } else {
                    // Mixed content: child elements win, stray text drops.
                    Value::Mapping(std::mem::take(&mut children))
                };
                let (parent_children, parent_text) = stack
                    .pop()
                    .ok_or_else(|| CodecError::unparsable("unbalanced element close"))?;
                children = parent_children;
                text = parent_text;
                merge_child(&mut children, name, value);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::unparsable("unexpected end of document"));
    }
    if children.len() != 1 {
        return Err(CodecError::unparsable(
            "document must have exactly one root element",
        ));
    }
    Ok(Value::Mapping(children))
}

fn element_name(raw: &[u8]) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(CodecError::unparsable)
}

/// Merges a closed element into its parent under the repeated-sibling rule:
/// first occurrence is stored as-is, later occurrences promote the entry to
/// a sequence and append.
fn merge_child(parent: &mut BTreeMap<String, Value>, name: String, value: Value) {
    match parent.get_mut(&name) {
        None => {
            parent.insert(name, value);
        }
        Some(Value::Sequence(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::replace(existing, Value::Null);
            *existing = Value::Sequence(vec![first, value]);
        }
    }
}

/// Resolves a general reference (`&name;`) to its character data: the five
/// predefined entities plus numeric character references. Anything else
/// would need a DTD, which decoding never reads.
fn resolve_reference(name: &str) -> Result<String> {
    let resolved = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            let digits = name.strip_prefix('#').ok_or_else(|| {
                CodecError::unparsable(format!("unknown entity: &{};", name))
            })?;
            let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16),
                None => digits.parse::<u32>(),
            }
            .map_err(|_| CodecError::unparsable(format!("invalid character reference: &{};", name)))?;
            char::from_u32(code).ok_or_else(|| {
                CodecError::unparsable(format!("invalid character reference: &{};", name))
            })?
        }
    };
    Ok(resolved.to_string())
}

/// Converts trimmed leaf text into a scalar under the number mode.
fn leaf_value(text: &str, numbers: NumberMode) -> Value {
    if text.is_empty() {
        return Value::empty_text();
    }
    match numbers {
        NumberMode::Decimal => Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map(|decimal| Value::Number(Number::Decimal(decimal)))
            .unwrap_or_else(|_| Value::Text(text.to_string())),
        NumberMode::Basic => text
            .parse::<i64>()
            .map(Number::Int)
            .or_else(|_| text.parse::<f64>().map(Number::Float))
            .map(Value::Number)
            .unwrap_or_else(|_| Value::Text(text.to_string())),
        NumberMode::Off => Value::Text(text.to_string()),
    }
}
