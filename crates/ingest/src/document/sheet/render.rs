//! Structured text rendering of a sheet.
//!
//! One text block per sheet: a title header, then either each detected
//! table as a labeled block or, when no tables were found, a plain
//! dump of the non-empty rows.

use super::grid::SheetGrid;
use super::tables::{TableRegion, TableType};

/// Title line of the `index`-th (1-based) table block. The splitter
/// matches this exact text to locate table boundaries in the rendered
/// output, so renderer and splitter share it.
pub fn table_title(index: usize, table_type: TableType) -> String {
    format!("Table {} ({}):", index, table_type.label())
}

/// Render a sheet's grid and table regions to a single text block.
///
/// Tables with more than `preview_rows` data rows render only the
/// first `preview_rows` non-empty rows plus a summary line; this
/// happens here, before splitting, so the splitter sees exactly the
/// lines that end up in chunks.
pub fn render_sheet(
    sheet_name: &str,
    grid: &SheetGrid,
    tables: &[TableRegion],
    preview_rows: usize,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    let title = format!("Sheet: {sheet_name}");
    parts.push("=".repeat(title.len()));
    parts.insert(0, title);

    if tables.is_empty() {
        render_raw_rows(grid, &mut parts);
    } else {
        for (i, table) in tables.iter().enumerate() {
            render_table(i + 1, table, preview_rows, &mut parts);
        }
    }

    parts.join("\n")
}

/// Fallback for sheets without detectable tables: one line per
/// non-empty row, 1-based sheet-global row numbers.
fn render_raw_rows(grid: &SheetGrid, parts: &mut Vec<String>) {
    parts.push("\nSheet Content:".to_string());
    for (i, row) in grid.cells.iter().enumerate() {
        let cells: Vec<&str> = row
            .iter()
            .filter(|c| !c.is_empty())
            .map(String::as_str)
            .collect();
        if cells.is_empty() {
            continue;
        }
        let row_number = grid.origin_row as usize + i + 1;
        parts.push(format!("Row {}: {}", row_number, cells.join(" | ")));
    }
}

fn render_table(index: usize, table: &TableRegion, preview_rows: usize, parts: &mut Vec<String>) {
    parts.push(format!("\n{}", table_title(index, table.table_type)));
    parts.push("-".repeat(50));

    if !table.headers.is_empty() {
        let header_line = table.headers.join(" | ");
        parts.push(format!("Headers: {header_line}"));
        parts.push("-".repeat(header_line.len()));
    }

    let mut emitted = 0;
    for (row_idx, row) in table.data_rows.iter().enumerate() {
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        if emitted == preview_rows {
            break;
        }
        parts.push(format!("{}: {}", row_idx + 1, row.join(" | ")));
        emitted += 1;
    }
    if table.data_rows.len() > preview_rows {
        parts.push(format!(
            "... ({} total rows in this table)",
            table.data_rows.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tables::detect_tables;

    fn grid(rows: &[&[&str]]) -> SheetGrid {
        SheetGrid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn starts_with_title_and_underline() {
        let g = grid(&[&["a", "b"]]);
        let text = render_sheet("Budget", &g, &[], 20);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Sheet: Budget"));
        assert_eq!(lines.next(), Some("============="));
    }

    #[test]
    fn no_tables_dumps_non_empty_rows() {
        let mut g = grid(&[
            &["alpha", "", "beta"],
            &["", "", ""],
            &["gamma", "", ""],
        ]);
        g.origin_row = 2; // used range starts at sheet row 3
        let text = render_sheet("Notes", &g, &[], 20);
        assert!(text.contains("Sheet Content:"));
        assert!(text.contains("Row 3: alpha | beta"));
        assert!(text.contains("Row 5: gamma"));
        // The fully empty row is skipped, not rendered blank.
        assert!(!text.contains("Row 4:"));
    }

    #[test]
    fn table_block_has_title_separator_headers_and_rows() {
        let g = grid(&[
            &["Name", "Role"],
            &["ada", "engineer"],
            &["grace", "admiral"],
            &["alan", "logician"],
            &["edsger", "essayist"],
        ]);
        let tables = detect_tables(&g, 2);
        let text = render_sheet("Team", &g, &tables, 20);

        assert!(text.contains("Table 1 (List):"));
        assert!(text.contains(&"-".repeat(50)));
        assert!(text.contains("Headers: Name | Role"));
        assert!(text.contains("1: ada | engineer"));
        assert!(text.contains("4: edsger | essayist"));
    }

    #[test]
    fn empty_data_rows_are_skipped_in_table_blocks() {
        let g = grid(&[
            &["A", "B"],
            &["1", "2"],
            &["", ""],
            &["3", "4"],
        ]);
        let tables = detect_tables(&g, 2);
        let text = render_sheet("S", &g, &tables, 20);
        assert!(text.contains("1: 1 | 2"));
        assert!(text.contains("3: 3 | 4"));
        assert!(!text.contains("2: "));
    }

    #[test]
    fn large_tables_render_a_bounded_preview() {
        let mut rows: Vec<Vec<String>> = vec![vec!["Id".to_string(), "Value".to_string()]];
        for i in 0..30 {
            rows.push(vec![format!("r{i}"), i.to_string()]);
        }
        let g = SheetGrid::from_rows(rows);
        let tables = detect_tables(&g, 2);
        let text = render_sheet("Big", &g, &tables, 20);

        assert!(text.contains("20: r19"));
        assert!(!text.contains("21: r20"), "rows past the preview must not render");
        assert!(text.contains("... (30 total rows in this table)"));
    }

    #[test]
    fn each_table_gets_its_own_block_in_detection_order() {
        let g = grid(&[
            &["A", "B"],
            &["1", "2"],
            &["", ""],
            &["", ""],
            &["C", "D"],
            &["x", "y"],
            &["z", "w"],
            &["q", "r"],
        ]);
        let tables = detect_tables(&g, 2);
        assert_eq!(tables.len(), 2);
        let text = render_sheet("Two", &g, &tables, 20);
        let first = text.find("Table 1 (").unwrap();
        let second = text.find("Table 2 (").unwrap();
        assert!(first < second);
    }
}
