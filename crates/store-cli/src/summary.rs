use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use store_model::ImportReply;

use crate::types::{NormalizeResult, UploadResult};

pub fn print_normalize_summary(result: &NormalizeResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Sheet"), header_cell(&result.sheet)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records"), Cell::new(result.records)]);
    table.add_row(vec![
        Cell::new("Skipped rows"),
        count_cell(result.skipped_rows.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unparsable numbers"),
        count_cell(result.parse_issues, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Header mismatches"),
        count_cell(result.header_mismatches, Color::Red),
    ]);
    println!("{table}");
    println!("Output: {}", result.output.display());
}

pub fn print_upload_summary(result: &UploadResult) {
    println!("Endpoint: {}", result.endpoint);
    let Some(outcome) = &result.outcome else {
        println!(
            "Dry run: envelope not sent (timeout would be {}s)",
            result.timeout_secs
        );
        return;
    };
    println!("Status: {}", outcome.status);
    println!("Response:");
    println!("{}", outcome.body_preview(result.body_preview_chars));
    if let Some(reply) = outcome.reply() {
        print_reply_table(&reply);
    }
}

fn print_reply_table(reply: &ImportReply) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Import"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Deleted", reply.deleted_count),
        ("Inserted", reply.inserted_count),
        ("Skipped", reply.skipped_count),
        ("Total input", reply.total_input),
    ];
    for (label, count) in rows {
        let value = count.map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![Cell::new(label), value]);
    }
    println!("{table}");
    for error in &reply.errors {
        println!("  - {error}");
    }
    if let Some(error) = &reply.error {
        println!("Server error: {error}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
