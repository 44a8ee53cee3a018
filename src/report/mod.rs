//! Report rendering
//!
//! Turns the selected blobs into the final table, CSV or JSON output.

mod table;

use std::io::{self, Write};

use serde::Serialize;

use crate::model::{BlobRecord, SizeMetric};
use crate::util::to_kb;

pub use table::align;

pub const HEADER: &str = "size,pack,hash,path";
pub const NO_MATCHES: &str = "No files found which match those criteria.";
pub const TABLE_PREAMBLE: &str =
    "All sizes in kB. The pack column is the compressed size of the object inside the pack file.";

/// How the report is written
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Column-aligned table
    #[default]
    Table,
    /// RFC 4180 CSV with a header
    Csv,
    /// Pretty-printed JSON array
    Json,
}

/// One JSON entry; sizes are given both in kB and in bytes
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    hash: String,
    size: u64,
    pack: u64,
    size_bytes: u64,
    pack_bytes: u64,
    path: Option<&'a str>,
}

/// Selected blobs, largest first by the active metric
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<BlobRecord>,
}

impl Report {
    /// Order `blobs` largest-first by `metric`; ties keep their input order
    pub fn new(mut blobs: Vec<BlobRecord>, metric: SizeMetric) -> Self {
        blobs.sort_by(|a, b| metric.compare_desc(a, b));
        Self { rows: blobs }
    }

    pub fn rows(&self) -> &[BlobRecord] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one record: size in kB, pack size in kB, hash, path
    fn cells(blob: &BlobRecord) -> Vec<String> {
        vec![
            to_kb(blob.size).to_string(),
            to_kb(blob.packed_size).to_string(),
            blob.oid.to_string(),
            blob.display_path().to_string(),
        ]
    }

    fn header_cells() -> Vec<String> {
        HEADER.split(',').map(str::to_string).collect()
    }

    /// Header followed by one column-aligned line per record
    pub fn table_lines(&self) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(Self::header_cells());
        rows.extend(self.rows.iter().map(Self::cells));
        align(&rows)
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Json => self.write_json(out),
            _ if self.is_empty() => writeln!(out, "{}", NO_MATCHES),
            OutputFormat::Table => {
                writeln!(out)?;
                writeln!(out, "{}", TABLE_PREAMBLE)?;
                writeln!(out)?;
                for line in self.table_lines() {
                    writeln!(out, "{}", line)?;
                }
                Ok(())
            }
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    /// Header and records, quoted where a cell holds a comma, quote or newline
    fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(Self::header_cells())?;
        for blob in &self.rows {
            writer.write_record(Self::cells(blob))?;
        }
        writer.flush()
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rows: Vec<JsonRow> = self
            .rows
            .iter()
            .map(|blob| JsonRow {
                hash: blob.oid.to_string(),
                size: to_kb(blob.size),
                pack: to_kb(blob.packed_size),
                size_bytes: blob.size,
                pack_bytes: blob.packed_size,
                path: blob.path.as_deref(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)
    }
}
