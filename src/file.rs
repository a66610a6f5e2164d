// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::{GameManifest, OutputFormat, OutputOptions};
use crate::csv::{parse_rows, rows_to_string, write_row, Delim};
use crate::data::{DataSet, PlayRow, Section};
use crate::error::{Error, Result};
use crate::reconcile::report_headers;
use crate::runner::{GameInput, GameReport};

/// Delimiter implied by a file extension: `.tsv`/`.txt` are tab-separated,
/// everything else is CSV.
pub fn delim_for(path: &Path) -> Delim {
    match OutputFormat::from_path(path) {
        Some(OutputFormat::Tsv) => Delim::Tsv,
        _ => Delim::Csv,
    }
}

/// Read a CSV/TSV table whose first row is the header.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let ds = DataSet::from_rows(parse_rows(&text, delim_for(path)));
    if ds.headers.is_empty() {
        log::warn!("{} is empty", path.display());
    }
    Ok(ds)
}

/// Load one game's tables. Batting sections are named after their file stem
/// with "batting" appended when the stem lacks it, so every listed file counts.
pub fn load_game(manifest: &GameManifest) -> Result<GameInput> {
    let pbp = load_dataset(&manifest.play_by_play)?;

    let mut sections = Vec::with_capacity(manifest.batting.len());
    for path in &manifest.batting {
        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let id = if stem.to_ascii_lowercase().contains("batting") { stem } else { join!(&stem, "_batting") };
        sections.push(Section::new(id, load_dataset(path)?));
    }

    Ok(GameInput { id: manifest.id.clone(), play_by_play: PlayRow::from_dataset(&pbp), sections })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Input(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Write `rows` (with headers if asked) to `path`, creating parent directories.
pub fn write_table(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: Delim,
) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    let write = |out: &mut BufWriter<File>| -> std::io::Result<()> {
        if let Some(h) = headers {
            write_row(&mut *out, h, delim)?;
        }
        for row in rows {
            write_row(&mut *out, row, delim)?;
        }
        out.flush()
    };
    write(&mut out).map_err(|e| Error::io(path, e))
}

/// Render a game report in the configured format.
pub fn render_report(report: &GameReport, opts: &OutputOptions) -> Result<String> {
    let rows: Vec<_> = report
        .rows
        .iter()
        .filter(|r| !opts.only_diffs || r.has_diffs())
        .collect();

    match opts.format.delim() {
        Some(delim) => {
            let headers = report_headers();
            let cells: Vec<Vec<String>> = rows.iter().map(|r| r.to_cells()).collect();
            Ok(rows_to_string(&cells, opts.include_headers.then_some(headers.as_slice()), delim))
        }
        None => {
            let json = serde_json::json!({
                "id": report.id,
                "rows": rows,
                "summary": report.summary,
                "coverage": report.coverage,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// Render a game report and write it to `path`. Returns the path written to.
pub fn write_report(path: &Path, report: &GameReport, opts: &OutputOptions) -> Result<PathBuf> {
    let text = render_report(report, opts)?;
    ensure_parent(path)?;
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    log::info!("wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// Batch summary: one entry per game with its accuracy summary and coverage.
pub fn write_summaries(path: &Path, reports: &[GameReport]) -> Result<()> {
    ensure_parent(path)?;
    let entries: Vec<_> = reports
        .iter()
        .map(|r| serde_json::json!({ "id": r.id, "summary": r.summary, "coverage": r.coverage }))
        .collect();
    let text = serde_json::to_string_pretty(&entries)?;
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_from_extension() {
        assert_eq!(delim_for(Path::new("a.tsv")), Delim::Tsv);
        assert_eq!(delim_for(Path::new("a.TXT")), Delim::Tsv);
        assert_eq!(delim_for(Path::new("a.csv")), Delim::Csv);
        assert_eq!(delim_for(Path::new("noext")), Delim::Csv);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
