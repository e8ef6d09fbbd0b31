use crate::errors::ClientError;
use crate::models::Dataset;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Serialize a dataset to CSV text: one header row of column names, one row
/// per record, no index column. Columns shorter than the longest one are
/// padded with empty cells.
pub fn to_csv(data: &Dataset) -> Result<String, ClientError> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(data.columns.iter().map(|c| c.name.as_str()))?;
    for row in 0..data.rows() {
        let record: Vec<String> = data
            .columns
            .iter()
            .map(|c| c.values.cell(row).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Load a dataset from a CSV file with a header row.
///
/// All cells come back as text columns; Datawrapper re-types them on its
/// side, so nothing is parsed locally.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, ClientError> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;

    let names: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut values: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    for record in rdr.records() {
        let record = record?;
        for (i, cell) in record.iter().enumerate() {
            if i < values.len() {
                values[i].push(cell.to_string());
            }
        }
    }

    let mut data = Dataset::new();
    for (name, column) in names.iter().zip(values) {
        data = data.with_text_column(name, column);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let data = Dataset::new()
            .with_text_column("Year", ["2020", "2021"])
            .with_numeric_column("Urban", [1_000_000.0, 1_100_000.0]);
        let csv = to_csv(&data).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Year,Urban");
        assert_eq!(lines[1], "2020,1000000");
    }

    #[test]
    fn load_csv_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pop.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Year,Urban").unwrap();
        writeln!(f, "2020,1000000").unwrap();
        writeln!(f, "2021,1100000").unwrap();

        let data = load_csv(&path).unwrap();
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.columns[0].name, "Year");
        assert_eq!(data.rows(), 2);
        assert_eq!(to_csv(&data).unwrap(), "Year,Urban\n2020,1000000\n2021,1100000\n");
    }
}
