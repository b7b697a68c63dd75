use std::path::Path;

use thiserror::Error;

use super::model::{CatalogStore, Record, SchemaField};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Failure to bring a catalog file into memory.
///
/// Nothing past the file read is fatal: malformed rows are skipped or
/// partially filled, never an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("reading catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a product catalog from a file. Dispatch by extension.
///
/// Only `.csv` is supported: a comma-delimited table with a header row and
/// double-quoted free-text cells.
pub fn load_file(path: &Path) -> Result<CatalogStore, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        return Err(LoadError::UnsupportedExtension(ext));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(parse_catalog(&text))
}

/// Parse raw catalog text into an ordered store.
///
/// Line 0 is the header: split on commas, each cell trimmed, each cell
/// resolved to its schema column. Every later line that tokenizes to at
/// least one field becomes exactly one [`Record`], in source order; lines
/// that tokenize to nothing are skipped without error.
pub fn parse_catalog(text: &str) -> CatalogStore {
    let mut lines = text.lines();
    let header: Vec<Option<SchemaField>> = match lines.next() {
        Some(line) => line
            .split(',')
            .map(|cell| SchemaField::from_header(cell.trim()))
            .collect(),
        None => Vec::new(),
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line_no, line) in lines.enumerate() {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            skipped += 1;
            continue;
        }
        if tokens.len() != header.len() {
            // Short rows leave their trailing fields missing; swallowed
            // empty slots shift later tokens into earlier columns. The feed
            // ships both, so the row is kept either way.
            log::debug!(
                "line {}: {} fields for {} header columns",
                line_no + 2,
                tokens.len(),
                header.len()
            );
        }
        records.push(record_from_tokens(&header, &tokens));
    }

    log::info!(
        "parsed {} records ({} lines skipped)",
        records.len(),
        skipped
    );
    CatalogStore::from_records(records)
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Split one data line into field tokens.
///
/// A field is either a double-quoted run (embedded commas are literal) or a
/// bare run ending at the next comma. One layer of surrounding quotes is
/// stripped, tokens are trimmed, and empty slots yield no token. The feed
/// never escapes quotes inside quoted cells, so a strict RFC 4180 reader
/// misaligns exactly the free-text rows the quoting is there to protect;
/// hence no `csv::Reader` on this side.
fn tokenize(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b',' => i += 1,
            b'"' => {
                // Quoted run: through the next quote, or to the end of the
                // line when the closing quote never comes.
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i < bytes.len() {
                    i += 1;
                }
                tokens.push(clean_token(&line[start..i]));
            }
            c if c.is_ascii_whitespace() => i += 1,
            _ => {
                let start = i;
                while i < bytes.len() && bytes[i] != b',' {
                    i += 1;
                }
                tokens.push(clean_token(&line[start..i]));
            }
        }
    }
    tokens
}

/// Strip one layer of surrounding double quotes, then trim.
fn clean_token(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    unquoted.trim().to_string()
}

// ---------------------------------------------------------------------------
// Field assignment
// ---------------------------------------------------------------------------

/// Assign the Nth token to the schema column named by the Nth header cell.
/// Columns with unrecognised headers are ignored; fields with no token stay
/// at their missing defaults.
fn record_from_tokens(header: &[Option<SchemaField>], tokens: &[String]) -> Record {
    let mut record = Record::default();
    for (column, token) in header.iter().zip(tokens) {
        let field = match column {
            Some(field) => field,
            None => continue,
        };
        match field {
            SchemaField::Brand => record.brand = token.clone(),
            SchemaField::Camera => record.camera = token.clone(),
            SchemaField::Description => record.description = token.clone(),
            SchemaField::Link => record.link = token.clone(),
            SchemaField::ProductName => record.product_name = token.clone(),
            SchemaField::ActualPriceUsd => record.actual_price_usd = parse_float_cell(token),
            SchemaField::DiscountPriceUsd => record.discount_price_usd = parse_float_cell(token),
            SchemaField::DisplaySizeInch => record.display_size_inch = parse_float_cell(token),
            SchemaField::RamGb => record.ram_gb = parse_int_cell(token),
            SchemaField::Ratings => record.ratings = parse_int_cell(token),
            SchemaField::Reviews => record.reviews = parse_int_cell(token),
            SchemaField::Stars => record.stars = parse_float_cell(token),
            SchemaField::StorageGb => record.storage_gb = parse_int_cell(token),
        }
    }
    record
}

/// Strict decimal parse; anything else (including non-finite) is missing.
fn parse_float_cell(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strict integer parse; a blank or malformed cell is missing.
fn parse_int_cell(cell: &str) -> Option<i64> {
    cell.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Brand,Camera,Description,Link,Product Name,\
Actual price (USD),Discount price (USD),Display Size (inch),Ram (Gb),\
Ratings,Reviews,Stars,Storage (GB)";

    #[test]
    fn quoted_field_keeps_embedded_commas() {
        assert_eq!(
            tokenize(r#"APPLE,"48MP, 12MP","Great, value phone",link,iPhone"#),
            vec!["APPLE", "48MP, 12MP", "Great, value phone", "link", "iPhone"]
        );
    }

    #[test]
    fn quote_layer_is_stripped_once() {
        assert_eq!(clean_token(r#""Great, value phone""#), "Great, value phone");
        assert_eq!(clean_token(r#"""already quoted""#), r#""already quoted"#);
        assert_eq!(clean_token("  padded  "), "padded");
        assert_eq!(clean_token(r#""""#), "");
    }

    #[test]
    fn blank_and_separator_lines_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(",,,").is_empty());
    }

    #[test]
    fn record_count_matches_tokenizable_lines() {
        let text = format!("{HEADER}\nAPPLE,cam,desc,link,iPhone\n\n   \nVOX,cam,desc,link,V1\n");
        let store = parse_catalog(&text);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records[0].brand, "APPLE");
        assert_eq!(store.records[1].brand, "VOX");
    }

    #[test]
    fn malformed_numeric_cells_become_missing() {
        let text = format!(
            "{HEADER}\nAPPLE,cam,desc,link,iPhone,999.99,cheap,6.1,eight,100,50,4.5,128"
        );
        let store = parse_catalog(&text);
        let rec = &store.records[0];
        assert_eq!(rec.actual_price_usd, Some(999.99));
        assert_eq!(rec.discount_price_usd, None);
        assert_eq!(rec.display_size_inch, Some(6.1));
        assert_eq!(rec.ram_gb, None);
        assert_eq!(rec.stars, Some(4.5));
        assert_eq!(rec.storage_gb, Some(128));
    }

    #[test]
    fn tokens_follow_header_column_order() {
        // Same data, shuffled columns: values still land on the right fields.
        let text = "Stars,Brand,Product Name\n4.5,HONOR,Magic6";
        let store = parse_catalog(text);
        let rec = &store.records[0];
        assert_eq!(rec.brand, "HONOR");
        assert_eq!(rec.product_name, "Magic6");
        assert_eq!(rec.stars, Some(4.5));
    }

    #[test]
    fn short_row_leaves_trailing_fields_missing() {
        let text = format!("{HEADER}\nAPPLE,cam,desc,link,iPhone,999.0");
        let rec = &parse_catalog(&text).records[0];
        assert_eq!(rec.actual_price_usd, Some(999.0));
        assert_eq!(rec.discount_price_usd, None);
        assert_eq!(rec.stars, None);
    }

    #[test]
    fn unknown_header_columns_are_ignored() {
        let text = "Brand,Bogus,Stars\nLAVA,junk,3.9";
        let rec = &parse_catalog(text).records[0];
        assert_eq!(rec.brand, "LAVA");
        assert_eq!(rec.stars, Some(3.9));
    }

    #[test]
    fn empty_input_yields_empty_store() {
        assert!(parse_catalog("").is_empty());
        assert!(parse_catalog(HEADER).is_empty());
    }

    #[test]
    fn non_finite_cells_are_missing() {
        assert_eq!(parse_float_cell("inf"), None);
        assert_eq!(parse_float_cell("NaN"), None);
        assert_eq!(parse_float_cell("4.5"), Some(4.5));
        assert_eq!(parse_int_cell(""), None);
    }
}
