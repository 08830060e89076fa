// ===== clustersweep/src/reports/mod.rs =====
use clustersweep::sweep::{fmt_density, SweepResults};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Summary table of every (measure, k) entry, densities side by side.
pub fn print_density_table(results: &SweepResults) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Measure").add_attribute(Attribute::Bold),
        Cell::new("k"),
        Cell::new("Inter").fg(Color::Cyan),
        Cell::new("Intra").fg(Color::Green),
        Cell::new("Intra/Inter"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for run in &results.runs {
        for (k, pair) in &run.densities {
            let ratio = match (pair.inter, pair.intra) {
                (Some(inter), Some(intra)) if inter != 0.0 => {
                    format!("{:.3}", intra / inter)
                }
                _ => "n/a".to_string(),
            };

            table.add_row(vec![
                Cell::new(run.measure.to_string()).add_attribute(Attribute::Bold),
                Cell::new(k.to_string()),
                Cell::new(fmt_density(pair.inter)).fg(Color::Cyan),
                Cell::new(fmt_density(pair.intra)).fg(Color::Green),
                Cell::new(ratio),
            ]);
        }
    }

    println!("\n{}", table);
}
