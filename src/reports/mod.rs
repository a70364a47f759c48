use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use discforge::batch::BatchOutcome;
use discforge::config::{DiscConfig, StyleConfig};
use discforge::consts::ELIGIBILITY_THRESHOLD;
use discforge::sampling::{ProfileSearch, ALL_PROFILE_CODES};
use discforge::scorer::{Axis, AxisValues, DiscResult};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn pct_cell(v: f64) -> Cell {
    let cell = Cell::new(format!("{}", v));
    if v >= ELIGIBILITY_THRESHOLD {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn axis_header(first: &str) -> Vec<Cell> {
    let mut row = vec![Cell::new(first).add_attribute(Attribute::Bold)];
    row.extend(Axis::ALL.iter().map(|ax| Cell::new(ax.to_string())));
    row
}

fn axis_row(label: &str, values: &AxisValues, pct: bool) -> Vec<Cell> {
    let mut row = vec![Cell::new(label)];
    for (_, v) in values.iter() {
        row.push(if pct {
            pct_cell(v)
        } else {
            Cell::new(format!("{}", v))
        });
    }
    row
}

pub fn print_result(result: &DiscResult) {
    let mut table = new_table();
    table.add_row(axis_header("Style"));
    table.add_row(axis_row("Natural pts", &result.scores.natural, false));
    table.add_row(axis_row("Natural %", &result.percentages.natural, true));
    table.add_row(axis_row("Response pts", &result.scores.response, false));
    table.add_row(axis_row("Response %", &result.percentages.response, true));
    right_align(&mut table, 1..=4);

    println!("\n{}", table);
    println!("Profile code: {}", result.profile_code);
}

pub fn print_batch(outcomes: &[BatchOutcome]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Code").fg(Color::Cyan),
        Cell::new("Nat D"),
        Cell::new("Nat I"),
        Cell::new("Nat S"),
        Cell::new("Nat C"),
        Cell::new("Resp D"),
        Cell::new("Resp I"),
        Cell::new("Resp S"),
        Cell::new("Resp C"),
    ]);
    right_align(&mut table, 2..=9);

    for outcome in outcomes {
        let mut row = vec![Cell::new(&outcome.id)];
        match &outcome.result {
            Ok(r) => {
                row.push(Cell::new(&r.profile_code).fg(Color::Cyan));
                row.extend(r.percentages.natural.iter().map(|(_, v)| pct_cell(v)));
                row.extend(r.percentages.response.iter().map(|(_, v)| Cell::new(v)));
            }
            Err(e) => {
                row.push(Cell::new("ERR").fg(Color::Red));
                row.push(Cell::new(e).fg(Color::Red));
            }
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_profiles(search: &ProfileSearch) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Code").add_attribute(Attribute::Bold),
        Cell::new("D"),
        Cell::new("I"),
        Cell::new("S"),
        Cell::new("C"),
        Cell::new("Answers"),
    ]);
    right_align(&mut table, 1..=4);

    for code in ALL_PROFILE_CODES {
        match search.found.get(code) {
            Some(example) => {
                let mut row = vec![Cell::new(code).fg(Color::Cyan)];
                row.extend(
                    example
                        .result
                        .percentages
                        .natural
                        .iter()
                        .map(|(_, v)| pct_cell(v)),
                );
                let letters: String = example.answers.iter().map(|a| a.to_string()).collect();
                row.push(Cell::new(letters));
                table.add_row(row);
            }
            None => {
                table.add_row(vec![
                    Cell::new(code).fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("not found"),
                ]);
            }
        }
    }
    println!("\n{}", table);
    println!(
        "Found {}/{} codes in {} sheets",
        search.found.len(),
        ALL_PROFILE_CODES.len(),
        search.iterations
    );
}

fn style_row(name: &str, style: &StyleConfig) -> Vec<Cell> {
    let (wp, ws) = style.default_weights();
    let clamp = style
        .clamp
        .map(|c| format!("[{}, {}]", c.min, c.max))
        .unwrap_or_else(|| "none".to_string());
    let d = &style.denominators;
    vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(style.items.len()),
        Cell::new(format!("{}/{}/{}/{}", d.d, d.i, d.s, d.c)),
        Cell::new(style.scaling.to_string()),
        Cell::new(format!(
            "{}({}) @ {}",
            style.rounding.function, style.rounding.decimals, style.rounding.stage
        )),
        Cell::new(clamp),
        Cell::new(format!("{} / {}", wp, ws)),
    ]
}

pub fn print_config_summary(config: &DiscConfig) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Style").add_attribute(Attribute::Bold),
        Cell::new("Items"),
        Cell::new("Denom D/I/S/C"),
        Cell::new("Scaling"),
        Cell::new("Rounding"),
        Cell::new("Clamp"),
        Cell::new("Default wP / wS"),
    ]);
    table.add_row(style_row("natural", &config.styles.natural));
    table.add_row(style_row("response", &config.styles.response));
    println!("\n{}", table);
}
