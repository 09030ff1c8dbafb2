//! Spreadsheet output and column-contract verification.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use calamine::{open_workbook_auto, Data, Reader};
use phonefeed_core::{ProductRow, PRODUCT_COLUMNS};
use rust_xlsxwriter::Workbook;
use serde_json::Value;

/// Result of a successful [`verify_sheet`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SheetReport {
    pub rows: usize,
}

/// Writes `rows` to a single-sheet workbook at `path`, header first.
///
/// Each row is projected through [`PRODUCT_COLUMNS`]; a column the row does
/// not carry is written as an empty string. Any existing file is replaced.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// workbook cannot be serialized or saved.
pub(crate) fn write_rows(rows: &[ProductRow], path: &Path, sheet_name: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in (0u16..).zip(PRODUCT_COLUMNS) {
        worksheet.write_string(0, col, name)?;
    }

    for (row_idx, row) in (1u32..).zip(rows) {
        let record = serde_json::to_value(row)
            .with_context(|| format!("failed to serialize row {}", row.id))?;
        for (col, name) in (0u16..).zip(PRODUCT_COLUMNS) {
            match record.get(name) {
                Some(Value::Bool(flag)) => worksheet.write_boolean(row_idx, col, *flag)?,
                Some(Value::Number(n)) => {
                    worksheet.write_number(row_idx, col, n.as_f64().unwrap_or_default())?
                }
                Some(Value::String(text)) => worksheet.write_string(row_idx, col, text)?,
                _ => worksheet.write_string(row_idx, col, "")?,
            };
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Opens a spreadsheet and checks that its first sheet satisfies the column
/// contract: the header row equals [`PRODUCT_COLUMNS`] and the `id` column
/// holds each of `1..=N` exactly once.
///
/// # Errors
///
/// Returns an error describing the first violation found, or if the file
/// cannot be opened.
pub(crate) fn verify_sheet(path: &Path) -> anyhow::Result<SheetReport> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("{} has no worksheets", path.display()))?
        .with_context(|| format!("failed to read first sheet of {}", path.display()))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();

    if header != PRODUCT_COLUMNS {
        anyhow::bail!(
            "header mismatch in {}: expected [{}], found [{}]",
            path.display(),
            PRODUCT_COLUMNS.join(", "),
            header.join(", ")
        );
    }

    let mut ids = BTreeSet::new();
    let mut count = 0usize;
    for (offset, cells) in rows.enumerate() {
        let line = offset + 2;
        let raw = cells.first().map(cell_text).unwrap_or_default();
        let id: usize = raw
            .parse()
            .with_context(|| format!("row {line}: id {raw:?} is not a positive integer"))?;
        if !ids.insert(id) {
            anyhow::bail!("row {line}: duplicate id {id}");
        }
        count += 1;
    }

    if let Some(bad) = ids.iter().zip(1..).find(|(id, expected)| **id != *expected) {
        anyhow::bail!("ids are not dense: expected {}, found {}", bad.1, bad.0);
    }

    Ok(SheetReport { rows: count })
}

fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

#[cfg(test)]
#[path = "sheet_test.rs"]
mod tests;
