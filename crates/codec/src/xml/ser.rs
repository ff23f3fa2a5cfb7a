//! XML encoding: recursive [`Value`] to byte-stream conversion.
//!
//! Mappings become elements named by their keys; sequence items are
//! wrapped in `{parent_key}_item` elements (the key defaults to the empty
//! string when no parent key is known); scalars emit as character data and
//! `Null` emits nothing. The whole value is wrapped once in the configured
//! root element, after an XML declaration carrying the charset.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::charset;
use crate::error::{CodecError, Result};
use crate::value::Value;

/// Encodes a value tree as an XML document under the given root element.
pub fn to_xml(value: &Value, root: &str, encoding: &str) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::with_capacity(128));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding), None)))?;
    write_element(&mut writer, root, value, None)?;
    let text = String::from_utf8(writer.into_inner()).map_err(CodecError::unencodable)?;
    charset::encode(&text, encoding)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
    key: Option<&str>,
) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    write_value(writer, value, key)?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn write_value<W: Write>(writer: &mut Writer<W>, value: &Value, key: Option<&str>) -> io::Result<()> {
    match value {
        // Null emits no characters: the element stays empty.
        Value::Null => Ok(()),
        Value::Bool(flag) => write_text(writer, if *flag { "true" } else { "false" }),
        Value::Text(text) => write_text(writer, text),
        Value::Number(number) => write_text(writer, &number.to_string()),
        Value::Sequence(items) => {
            let item_name = item_element_name(key);
            for item in items {
                // Items recurse without a key; a nested sequence falls
                // back to the bare "_item" wrapper.
                write_element(writer, &item_name, item, None)?;
            }
            Ok(())
        }
        Value::Mapping(entries) => {
            for (name, entry) in entries {
                write_element(writer, name, entry, Some(name))?;
            }
            Ok(())
        }
    }
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> io::Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))
}

/// The wrapper element name for sequence items under the given parent key.
fn item_element_name(key: Option<&str>) -> String {
    format!("{}_item", key.unwrap_or_default())
}
