use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::table::MutationTable;

/// Read a delimited mutation table from `path`, or from stdin when `path` is `-`.
pub fn open_table(path: &Path, delimiter: u8) -> Result<MutationTable> {
    let table = if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        MutationTable::from_reader(BufReader::new(stdin.lock()), delimiter)?
    } else {
        let file = std::fs::File::open(path).map(BufReader::new)?;
        MutationTable::from_reader(file, delimiter)?
    };
    tracing::info!(
        "Loaded {} records with {} fields from {}",
        table.len(),
        table.header().len(),
        path.display()
    );
    Ok(table)
}

/// Parse a single-byte field delimiter. A literal `\t` and `tab` both mean a tab.
pub fn parse_delimiter(arg: &str) -> std::result::Result<u8, String> {
    match arg {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match arg.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{arg}'")),
        },
    }
}

/// Write `records` as tab-separated lines, preceded by a header of their field names.
pub fn write_records<W, T>(wtr: W, records: &[T]) -> Result<()>
where
    W: std::io::Write,
    T: serde::Serialize,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(wtr);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
