// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Blank lines are skipped.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows as-is, optionally preceded by a header line.
pub fn rows_to_string(rows: &[Vec<String>], headers: Option<&[String]>, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(r: &[&str]) -> Vec<String> {
        r.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "player,Details\r\n\"Doe, J\",\"2·HR,1·SB\"\r\n\r\nA Roe,\"say \"\"hi\"\"\"\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], cells(&["Doe, J", "2·HR,1·SB"]));
        assert_eq!(rows[2], cells(&["A Roe", "say \"hi\""]));
    }

    #[test]
    fn tsv_keeps_commas_and_trailing_row() {
        let rows = parse_rows("\u{feff}inning\tplayer\tdescription\nt1\tJ Doe\tSingle to LF, Rice to 3B", Delim::Tsv);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "inning");
        assert_eq!(rows[1][2], "Single to LF, Rice to 3B");
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let out = rows_to_string(
            &[cells(&["Doe, J", "1"]), cells(&["A Roe", "0"])],
            Some(&cells(&["player", "AB_diff"])),
            Delim::Csv,
        );
        assert_eq!(out, "player,AB_diff\n\"Doe, J\",1\nA Roe,0\n");
        assert_eq!(parse_rows(&out, Delim::Csv)[1][0], "Doe, J");
    }
}
