use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ReportResult;

/// Print the terminal summary after a pipeline run.
pub fn print_summary(result: &ReportResult) {
    let global = &result.stats.global;
    println!("Year: {}", global.year);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.stats_json_path {
        println!("Statistics: {}", path.display());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Leader"),
            header_cell("Services"),
            header_cell("Songs"),
            header_cell("New songs"),
            header_cell("Shared"),
            header_cell("Closest leader"),
        ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_songs = 0usize;
    for leader in &result.stats.leaders {
        total_songs += leader.total_songs;
        let closest = leader
            .top_overlaps
            .first()
            .map(|overlap| format!("{} ({})", overlap.leader, overlap.shared));
        table.add_row(vec![
            Cell::new(&leader.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(leader.total_services),
            Cell::new(leader.total_songs),
            Cell::new(leader.new_songs.len()),
            Cell::new(leader.common_songs_count),
            match closest {
                Some(text) => Cell::new(text),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(global.total_services).add_attribute(Attribute::Bold),
        Cell::new(total_songs).add_attribute(Attribute::Bold),
        Cell::new(global.new_songs.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    println!(
        "Unique songs: {}  New songs: {}  First-appearance services: {}",
        global.total_unique_songs,
        global.new_songs.len(),
        global.new_songs_usage
    );
    println!(
        "Weekend pairs: {} Saturday / {} Sunday",
        result.saturday_services, result.sunday_services
    );
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
