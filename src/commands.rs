use crate::cli::{CompareArgs, InputArgs, ShowArgs};
use anyhow::{bail, Context, Result};
use oxirow::{Config, Row};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reads a JSON array of rows. Any row with absent fields fails the whole load.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let rows: Vec<Row> = serde_json::from_reader(BufReader::new(file))
        .map_err(oxirow::OxirowError::from)
        .with_context(|| format!("failed to read rows from '{}'", path.display()))?;
    info!(path = %path.display(), count = rows.len(), "loaded rows");
    Ok(rows)
}

pub fn run_show<W: Write>(args: &ShowArgs, config: &Config, out: &mut W) -> Result<()> {
    let mut rows = load_rows(&args.input.input)?;
    if args.sort || config.sort_by_key {
        debug!("sorting rows by key");
        rows.sort_by(Row::compare_to);
    }
    let show_hash = args.hash || config.show_hash;
    for row in &rows {
        if show_hash {
            writeln!(out, "{row}\t{}", row.hash_code())?;
        } else {
            writeln!(out, "{row}")?;
        }
    }
    Ok(())
}

pub fn run_hash<W: Write>(args: &InputArgs, out: &mut W) -> Result<()> {
    for row in load_rows(&args.input)? {
        writeln!(out, "{}\t{}", row.key(), row.hash_code())?;
    }
    Ok(())
}

fn row_at(rows: &[Row], index: usize) -> Result<&Row> {
    match rows.get(index) {
        Some(row) => Ok(row),
        None => bail!("row index {index} out of range (file has {} rows)", rows.len()),
    }
}

pub fn run_compare<W: Write>(args: &CompareArgs, out: &mut W) -> Result<()> {
    let rows = load_rows(&args.input.input)?;
    let left = row_at(&rows, args.left)?;
    let right = row_at(&rows, args.right)?;

    writeln!(out, "left:  {left}")?;
    writeln!(out, "right: {right}")?;
    writeln!(out, "order: {:?}", left.compare_to(right))?;
    writeln!(out, "equal: {}", left == right)?;
    Ok(())
}
