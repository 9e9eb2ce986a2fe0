use crate::extract::ExtractionRecord;

/// Setting label of the synthetic per-file record carrying the source
/// file's last-modified time.
pub const FILE_DATE_SETTING: &str = "File date";

const ROW_HEADERS: [&str; 3] = ["Filename", "Setting Name", "Val"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// One record per row, fixed columns Filename / Setting Name / Val.
    Rows,
    /// One row per file, one column per distinct setting in first-seen order.
    Columns,
}

/// A finished output table. Built fresh per run from the full record list;
/// every cell is a string, missing cells are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SettingsTable {
    pub fn build(records: &[ExtractionRecord], mode: TableMode) -> Self {
        match mode {
            TableMode::Rows => Self::as_rows(records),
            TableMode::Columns => Self::as_columns(records),
        }
    }

    fn as_rows(records: &[ExtractionRecord]) -> Self {
        let headers = ROW_HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = records
            .iter()
            .map(|r| vec![r.filename.clone(), r.setting.clone(), r.value.clone()])
            .collect();

        Self { headers, rows }
    }

    fn as_columns(records: &[ExtractionRecord]) -> Self {
        let mut headers = vec!["Filename".to_string(), FILE_DATE_SETTING.to_string()];
        let mut rows: Vec<Vec<String>> = Vec::new();

        for record in records {
            let new_file = rows
                .last()
                .map(|row: &Vec<String>| row[0] != record.filename)
                .unwrap_or(true);
            if new_file {
                rows.push(vec![record.filename.clone()]);
            }

            let column = match headers.iter().position(|h| h == &record.setting) {
                Some(index) => index,
                None => {
                    headers.push(record.setting.clone());
                    headers.len() - 1
                }
            };

            if let Some(row) = rows.last_mut() {
                if row.len() <= column {
                    row.resize(column + 1, String::new());
                }
                row[column] = record.value.clone();
            }
        }

        // Trailing columns appear only once a later file introduces them;
        // pad every row out to the final header width.
        for row in &mut rows {
            row.resize(headers.len(), String::new());
        }

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Aligned columnar text: each cell left-justified to its column's
    /// widest entry plus two spaces.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                if index < widths.len() && len > widths[index] {
                    widths[index] = len;
                }
            }
        }

        let mut out = String::new();
        render_line(&mut out, &self.headers, &widths);
        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }
        out
    }
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0) + 2;
        out.push_str(cell);
        for _ in cell.chars().count()..width {
            out.push(' ');
        }
    }
    // Trailing padding is harmless but untidy.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_records() -> Vec<ExtractionRecord> {
        vec![
            ExtractionRecord::new("a.txt", FILE_DATE_SETTING, "2015-06-01 10:00"),
            ExtractionRecord::new("a.txt", "RID", "FEEDER RELAY"),
            ExtractionRecord::new("a.txt", "G1:TID", "STATION A"),
            ExtractionRecord::new("b.txt", FILE_DATE_SETTING, "2015-06-02 11:30"),
            ExtractionRecord::new("b.txt", "G1:TID", "STATION B"),
            ExtractionRecord::new("b.txt", "G1:50P1P", "6.00"),
        ]
    }

    fn triples(table: &SettingsTable, mode: TableMode) -> BTreeSet<(String, String, String)> {
        let mut set = BTreeSet::new();
        match mode {
            TableMode::Rows => {
                for row in &table.rows {
                    set.insert((row[0].clone(), row[1].clone(), row[2].clone()));
                }
            }
            TableMode::Columns => {
                for row in &table.rows {
                    for (index, cell) in row.iter().enumerate().skip(1) {
                        if !cell.is_empty() {
                            set.insert((
                                row[0].clone(),
                                table.headers[index].clone(),
                                cell.clone(),
                            ));
                        }
                    }
                }
            }
        }
        set
    }

    #[test]
    fn test_rows_table_shape() {
        let table = SettingsTable::build(&sample_records(), TableMode::Rows);
        assert_eq!(table.headers, vec!["Filename", "Setting Name", "Val"]);
        assert_eq!(table.rows.len(), 6);
        assert_eq!(table.rows[1], vec!["a.txt", "RID", "FEEDER RELAY"]);
    }

    #[test]
    fn test_columns_table_shape() {
        let table = SettingsTable::build(&sample_records(), TableMode::Columns);
        assert_eq!(
            table.headers,
            vec!["Filename", "File date", "RID", "G1:TID", "G1:50P1P"]
        );
        assert_eq!(table.rows.len(), 2);

        // b.txt has no RID; the cell is blank, never absent.
        assert_eq!(
            table.rows[1],
            vec!["b.txt", "2015-06-02 11:30", "", "STATION B", "6.00"]
        );
        // a.txt predates the 50P1P column; padding fills it in.
        assert_eq!(table.rows[0].len(), table.headers.len());
        assert_eq!(table.rows[0][4], "");
    }

    #[test]
    fn test_column_order_is_first_seen() {
        let records = vec![
            ExtractionRecord::new("a.txt", "ZED", "1"),
            ExtractionRecord::new("b.txt", "ALPHA", "2"),
            ExtractionRecord::new("b.txt", "ZED", "3"),
        ];
        let table = SettingsTable::build(&records, TableMode::Columns);
        assert_eq!(table.headers, vec!["Filename", "File date", "ZED", "ALPHA"]);
    }

    #[test]
    fn test_round_trip_between_modes() {
        let records = sample_records();
        let rows = SettingsTable::build(&records, TableMode::Rows);
        let columns = SettingsTable::build(&records, TableMode::Columns);

        assert_eq!(
            triples(&rows, TableMode::Rows),
            triples(&columns, TableMode::Columns)
        );
    }

    #[test]
    fn test_empty_records() {
        let table = SettingsTable::build(&[], TableMode::Rows);
        assert!(table.is_empty());
        let table = SettingsTable::build(&[], TableMode::Columns);
        assert!(table.is_empty());
    }

    #[test]
    fn test_render_alignment() {
        let records = vec![
            ExtractionRecord::new("a.txt", "RID", "FEEDER RELAY"),
            ExtractionRecord::new("longer-name.txt", "TID", "X"),
        ];
        let table = SettingsTable::build(&records, TableMode::Rows);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Filename"));
        // Both data rows start their second column at the same offset.
        let col = lines[2].find("TID").unwrap();
        assert_eq!(lines[1].find("RID").unwrap(), col);
    }
}
