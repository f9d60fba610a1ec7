use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crash_cli::types::RunOutcome;

/// Unmapped values listed per column before the rest are elided.
const MAX_EXAMPLES: usize = 5;

pub fn print_confirmation(outcome: &RunOutcome) {
    if outcome.written {
        println!("Processed file saved to {}", outcome.output.display());
    } else {
        println!(
            "Dry run complete, output not written to {}",
            outcome.output.display()
        );
    }
}

pub fn print_summary(outcome: &RunOutcome) {
    let report = &outcome.report;
    println!("Rows: {}  Columns: {}", report.rows, report.columns);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Filled"),
        header_cell("Recased"),
        header_cell("Rewritten"),
        header_cell("Unmapped"),
        header_cell("Unmapped values"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for index in 1..=4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for pass in &report.passes {
        table.add_row(vec![
            Cell::new(&pass.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(pass.filled, Color::Green),
            count_cell(pass.recased, Color::Green),
            count_cell(pass.rewritten, Color::Green),
            count_cell(pass.unmapped_cells, Color::Yellow),
            example_cell(pass.unmapped.iter().map(String::as_str)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.total_filled(), Color::Green).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(report.total_rewritten(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(report.total_unmapped(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn example_cell<'a>(values: impl ExactSizeIterator<Item = &'a str>) -> Cell {
    let total = values.len();
    if total == 0 {
        return dim_cell("-");
    }
    let mut label = values.take(MAX_EXAMPLES).collect::<Vec<_>>().join(", ");
    if total > MAX_EXAMPLES {
        label.push_str(&format!(", +{} more", total - MAX_EXAMPLES));
    }
    Cell::new(label)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
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
