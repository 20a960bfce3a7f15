//! Rendering checks for the plain-text table helper.

use rchorelog::utils::table::{Column, Table};

fn two_columns() -> Table {
    Table::new(vec![
        Column {
            header: "Name".to_string(),
            width: 8,
        },
        Column {
            header: "Points".to_string(),
            width: 6,
        },
    ])
}

#[test]
fn short_rows_render_with_blank_trailing_cells() {
    let mut table = two_columns();
    table.add_row(vec!["Alice".to_string()]);

    // A row with fewer cells than columns renders, it does not panic.
    let out = table.render();
    assert_eq!(out.lines().count(), 2);

    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("Alice"));
}

#[test]
fn cells_pad_to_display_width() {
    let mut table = two_columns();
    table.add_row(vec!["José".to_string(), "12".to_string()]);

    // "José" is 4 columns wide on screen even though it is 5 bytes, so
    // the second cell starts at screen column 9 (8 + 1 gap).
    let row = table.render().lines().nth(1).unwrap().to_string();
    let prefix: String = row.chars().take(9).collect();
    assert_eq!(prefix, "José     ");
    assert!(row.ends_with("12     "));
}
