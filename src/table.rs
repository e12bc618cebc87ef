//! In-memory tabular dataset of mutation records.
//!
//! A table is a header of field names plus rows of string values, one value per field.
//! Statistics look up the columns they need by name, so any extra columns in an ICGC
//! release file are carried along untouched.
use crate::error::{Error, Result};

pub const MUTATED_FROM_ALLELE: &str = "mutated_from_allele";
pub const MUTATED_TO_ALLELE: &str = "mutated_to_allele";
pub const ICGC_MUTATION_ID: &str = "icgc_mutation_id";
pub const ICGC_SAMPLE_ID: &str = "icgc_sample_id";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MutationTable {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(header: I) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    pub fn from_rows<S, H, R>(header: H, rows: R) -> Result<Self>
    where
        S: Into<String>,
        H: IntoIterator<Item = S>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
    {
        let mut table = Self::new(header);
        for row in rows {
            table.push_row(row.into_iter().map(Into::into).collect())?;
        }
        Ok(table)
    }

    /// Parse delimited text with a header line, e.g. an ICGC `simple_somatic_mutation` TSV.
    pub fn from_reader<R: std::io::Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);
        let mut table = Self::new(rdr.headers()?.iter());
        for record in rdr.records() {
            let record = record?;
            table.push_row(record.iter().map(|x| x.to_string()).collect())?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(Error::RaggedRow {
                row: self.rows.len(),
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the field `name`, in row order.
    pub fn column(&self, name: &str) -> Result<Column<'_>> {
        let idx = self
            .header
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| Error::missing_field(name))?;
        Ok(Column {
            rows: self.rows.iter(),
            idx,
        })
    }
}

pub struct Column<'a> {
    rows: std::slice::Iter<'a, Vec<String>>,
    idx: usize,
}

impl<'a> Iterator for Column<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| row[self.idx].as_str())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Column<'_> {}
