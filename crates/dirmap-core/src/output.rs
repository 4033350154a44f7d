//! JSON rendering of a directory map.
//!
//! The compact layout keeps everything on one line but puts a space after
//! `,` and `:` (`{"a": "/base/a", "b": "/base/b"}`), which is what callers
//! capturing the printed line expect. Escaping is left to serde_json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;

/// How the map is laid out when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Single line, `", "` and `": "` separators.
    #[default]
    Compact,
    /// Multi-line, two-space indent.
    Pretty,
}

/// Single-line formatter with a space after each separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` to a JSON string in the given style.
pub fn to_json<T: Serialize + ?Sized>(value: &T, style: OutputStyle) -> Result<String> {
    match style {
        OutputStyle::Compact => {
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut ser).context("serialize directory map")?;
            String::from_utf8(buf).context("serialized map is not UTF-8")
        }
        OutputStyle::Pretty => {
            serde_json::to_string_pretty(value).context("serialize directory map")
        }
    }
}
