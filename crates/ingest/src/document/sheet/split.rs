//! Size-bounded splitting of rendered sheet text that never cuts a
//! table.
//!
//! The budget is soft: a chunk boundary may only fall at a non-table
//! line or exactly at a table's title line, so a table larger than the
//! budget stays whole in one oversized chunk. Joining the returned
//! chunks with `\n` reproduces the input exactly.

use super::render::table_title;
use super::tables::TableRegion;

/// Split rendered sheet text into chunks of at most `max_chunk_size`
/// characters where table integrity allows it.
pub fn split_rendered(content: &str, tables: &[TableRegion], max_chunk_size: usize) -> Vec<String> {
    if content.len() <= max_chunk_size {
        return vec![content.to_string()];
    }

    let lines: Vec<&str> = content.lines().collect();
    let interior = table_interior_lines(&lines, tables);

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_size = 0usize;

    for (i, line) in lines.iter().enumerate() {
        let line_size = line.len() + 1; // trailing newline
        if current_size + line_size > max_chunk_size && !current.is_empty() && !interior[i] {
            chunks.push(current.join("\n"));
            current = vec![line];
            current_size = line_size;
        } else {
            current.push(line);
            current_size += line_size;
        }
    }
    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }
    chunks
}

/// Mark every line inside a table's rendered block, excluding the
/// block's title line (a boundary may start a chunk there). Each
/// block runs from its title line to the next blank line; the
/// renderer never emits blank lines inside a block.
fn table_interior_lines(lines: &[&str], tables: &[TableRegion]) -> Vec<bool> {
    let mut interior = vec![false; lines.len()];
    let mut search_from = 0;

    for (i, table) in tables.iter().enumerate() {
        let title = table_title(i + 1, table.table_type);
        let Some(start) = lines[search_from..]
            .iter()
            .position(|l| **l == title)
            .map(|p| p + search_from)
        else {
            continue;
        };
        let mut end = start;
        while end + 1 < lines.len() && !lines[end + 1].is_empty() {
            end += 1;
        }
        for slot in &mut interior[start + 1..=end] {
            *slot = true;
        }
        search_from = end + 1;
    }
    interior
}
