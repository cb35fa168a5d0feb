//! Writers for the `get_tpl` output contract.
//!
//! A matched template prints as its bare name on one line. When nothing
//! matches, the supplied fields print as a pretty JSON object mapping each
//! field name to its detected type tag; with no fields at all that
//! degenerates to `{}`. Writers take any `Write` so tests capture into
//! buffers.

use std::collections::BTreeMap;
use std::io::Write;

use crate::core::FieldType;

/// Write the matched template name as a single plain-text line
pub fn write_match<W: Write>(writer: &mut W, name: &str) -> anyhow::Result<()> {
    writeln!(writer, "{name}")?;
    Ok(())
}

/// Write the per-field type report as a pretty-printed JSON object
pub fn write_type_report<W: Write>(
    writer: &mut W,
    report: &BTreeMap<String, FieldType>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
