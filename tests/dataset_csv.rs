use dwpub::Dataset;
use dwpub::storage::to_csv;

#[test]
fn n_columns_m_rows_serialize_to_m_plus_one_lines() {
    let data = Dataset::new()
        .with_text_column("Year", ["2020", "2021", "2022"])
        .with_numeric_column("Urban", [1_000_000.0, 1_100_000.0, 1_200_000.0])
        .with_numeric_column("Suburban", [500_000.0, 550_000.0, 600_000.0])
        .with_numeric_column("Rural", [250_000.0, 240_000.0, 230_000.0]);

    let csv = to_csv(&data).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Year,Urban,Suburban,Rural");
    // no index column: each record starts with the category cell
    assert_eq!(lines[1], "2020,1000000,500000,250000");
    assert_eq!(lines[3], "2022,1200000,600000,230000");
}

#[test]
fn integral_numbers_render_without_decimal_point() {
    let data = Dataset::new().with_numeric_column("v", [1_000_000.0, 0.5]);
    let csv = to_csv(&data).unwrap();
    assert_eq!(csv, "v\n1000000\n0.5\n");
}

#[test]
fn ragged_columns_pad_with_empty_cells() {
    let data = Dataset::new()
        .with_text_column("Year", ["2020", "2021", "2022"])
        .with_numeric_column("Urban", [1_000_000.0, 1_100_000.0]);

    let csv = to_csv(&data).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "2022,");
}

#[test]
fn empty_dataset_serializes_to_header_only() {
    let data = Dataset::new()
        .with_text_column("Year", Vec::<String>::new())
        .with_numeric_column("Urban", Vec::new());
    assert_eq!(to_csv(&data).unwrap(), "Year,Urban\n");
}
