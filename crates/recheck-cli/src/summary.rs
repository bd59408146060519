use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use recheck_cli::records::RecordOutcome;
use recheck_validate::FailureKind;

pub fn print_outcomes(outcomes: &[RecordOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Status"),
        header_cell("Violations"),
        header_cell("Faults"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_violations = 0usize;
    let mut total_faults = 0usize;
    let mut passed = 0usize;
    for outcome in outcomes {
        let violations = outcome.report.violation_count();
        let faults = outcome.report.fault_count();
        total_violations += violations;
        total_faults += faults;
        if outcome.report.valid {
            passed += 1;
        }
        table.add_row(vec![
            Cell::new(outcome.index),
            status_cell(outcome.report.valid),
            count_cell(violations, Color::Red),
            count_cell(faults, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{passed}/{} passed", outcomes.len())).add_attribute(Attribute::Bold),
        count_cell(total_violations, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_faults, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_failure_table(outcomes);
}

fn print_failure_table(outcomes: &[RecordOutcome]) {
    let failures: Vec<_> = outcomes
        .iter()
        .flat_map(|o| o.report.failures.iter().map(move |f| (o.index, f)))
        .collect();
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_failure_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, failure) in failures {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&failure.field),
            kind_cell(failure.kind),
            Cell::new(&failure.message),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_failure_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn kind_cell(kind: FailureKind) -> Cell {
    match kind {
        FailureKind::Violation => Cell::new("VIOLATION").fg(Color::Red),
        FailureKind::Fault => Cell::new("FAULT").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
