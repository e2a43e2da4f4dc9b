use std::path::Path;

use crate::core::table::Table;
use crate::parsing::ParseError;

/// Parse a TSV file with a header row into a [`Table`].
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the content is invalid.
pub fn parse_tsv_file(path: &Path) -> Result<Table, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tsv_text(&content)
}

/// Parse TSV text with a header row into a [`Table`].
///
/// Column names are trimmed of surrounding whitespace; cell values are taken
/// verbatim (an empty cell is a missing value). Blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if there is no header row or a data
/// row has a different number of fields than the header.
pub fn parse_tsv_text(text: &str) -> Result<Table, ParseError> {
    let mut table: Option<Table> = None;

    for (i, line) in text.lines().enumerate() {
        // Tolerate CRLF endings
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        match &mut table {
            None => {
                let columns = fields.iter().map(|f| f.trim().to_string()).collect();
                table = Some(Table::new(columns));
            }
            Some(table) => {
                // Line numbers in errors are 1-based for user friendliness
                let line_num = i + 1;
                if fields.len() != table.columns().len() {
                    return Err(ParseError::InvalidFormat(format!(
                        "Line {line_num} has {} fields, expected {}",
                        fields.len(),
                        table.columns().len()
                    )));
                }
                table.push_row(fields.iter().map(ToString::to_string).collect());
            }
        }
    }

    table.ok_or_else(|| ParseError::InvalidFormat("No header row found".to_string()))
}
