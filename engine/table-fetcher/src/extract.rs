//! Pure HTML-to-table extraction
//!
//! These functions operate on an already-fetched HTML string so the parsing
//! path can be exercised in tests without touching the network. Table
//! indices are 0-based and count `<table>` elements in document order.

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::table::Table;

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector(e.to_string()))
}

/// Collapsed, trimmed text content of one cell
fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn nth_table(document: &Html, index: usize) -> Result<ElementRef<'_>, ParseError> {
    let table_sel = selector("table")?;
    let tables: Vec<ElementRef<'_>> = document.select(&table_sel).collect();
    tables
        .get(index)
        .copied()
        .ok_or(ParseError::TableNotFound { index, found: tables.len() })
}

fn table_from_element(element: ElementRef<'_>, index: usize) -> Result<Table, ParseError> {
    let head_row_sel = selector("thead tr")?;
    let body_row_sel = selector("tbody tr")?;
    let any_row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;

    // Stat tables on the source site sometimes stack an over-header above
    // the real column row; the last thead row is the one with column names.
    let header_row = element
        .select(&head_row_sel)
        .last()
        .or_else(|| element.select(&any_row_sel).next());
    let Some(header_row) = header_row else {
        return Err(ParseError::EmptyTable { index });
    };
    let headers: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();

    let mut rows: Vec<Vec<String>> = element
        .select(&body_row_sel)
        .map(|row| row.select(&cell_sel).map(cell_text).collect())
        .collect();

    // No tbody: treat every row after the header as data.
    if rows.is_empty() {
        rows = element
            .select(&any_row_sel)
            .skip(1)
            .map(|row| row.select(&cell_sel).map(cell_text).collect())
            .collect();
    }

    if rows.is_empty() {
        return Err(ParseError::EmptyTable { index });
    }

    Ok(Table::new(headers, rows))
}

/// Extract every `<table>` in the document, skipping ones that fail to
/// yield any rows.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let document = Html::parse_document(html);
    let Ok(table_sel) = selector("table") else {
        return Vec::new();
    };
    document
        .select(&table_sel)
        .enumerate()
        .filter_map(|(i, el)| table_from_element(el, i).ok())
        .collect()
}

/// Extract the table at `table_index` (0-based, document order) as a string
/// matrix with the header row as column names.
pub fn extract_table(html: &str, table_index: usize) -> Result<Table, ParseError> {
    let document = Html::parse_document(html);
    let element = nth_table(&document, table_index)?;
    table_from_element(element, table_index)
}

/// Ordered `href` values of every anchor inside the table at `table_index`.
///
/// The directory page embeds one profile link per player row inside the
/// stats table; extracting links from the same fetched document keeps them
/// aligned with the extracted rows.
pub fn extract_table_links(html: &str, table_index: usize) -> Result<Vec<String>, ParseError> {
    let document = Html::parse_document(html);
    let element = nth_table(&document, table_index)?;
    let anchor_sel = selector("tbody a[href]")?;
    let mut links: Vec<String> = element
        .select(&anchor_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();
    if links.is_empty() {
        let any_anchor = selector("a[href]")?;
        links = element
            .select(&any_anchor)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect();
    }
    Ok(links)
}
