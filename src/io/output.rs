use crate::core::FunctionRecord;
use std::io::Write;

pub trait OutputWriter {
    fn write_records(&mut self, records: &[FunctionRecord]) -> anyhow::Result<()>;
}

/// Writes the record sequence as one JSON array, once, after the full
/// pass completes. There is no incremental emission; a failed run must
/// produce no output at all.
pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_records(&mut self, records: &[FunctionRecord]) -> anyhow::Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_list_writes_empty_array() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_records(&[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_records_use_wire_field_names() {
        let mut buf = Vec::new();
        let record = FunctionRecord {
            line: 4,
            ast_count: 9,
            func_call_count: 1,
            has_noinline: false,
            has_any_calls: true,
        };
        JsonWriter::new(&mut buf).write_records(&[record]).unwrap();

        let json = String::from_utf8(buf).unwrap();
        assert_eq!(
            json,
            "[{\"line\":4,\"astCount\":9,\"funcCallCount\":1,\"hasNoinline\":false,\"hasAnyCalls\":true}]\n"
        );
    }
}
