use crate::error::Result;
use crate::report::table::SettingsTable;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
        }
    }
}

/// Writes a finished table to disk. When no explicit path is given the
/// configured base name is used and an existing file is never overwritten;
/// a " - N" suffix is appended until a free name is found.
pub struct ReportWriter {
    base_name: String,
    directory: PathBuf,
}

impl ReportWriter {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            directory: PathBuf::from("."),
        }
    }

    pub fn with_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn write(
        &self,
        table: &SettingsTable,
        format: FileFormat,
        explicit: Option<&Path>,
    ) -> Result<PathBuf> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => self.next_free_path(format),
        };

        match format {
            FileFormat::Csv => write_csv(table, &path)?,
            FileFormat::Xlsx => write_xlsx(table, &path)?,
        }

        Ok(path)
    }

    fn next_free_path(&self, format: FileFormat) -> PathBuf {
        let extension = format.extension();
        let mut attempt = 0u32;

        loop {
            let name = if attempt == 0 {
                format!("{}.{}", self.base_name, extension)
            } else {
                format!("{} - {}.{}", self.base_name, attempt, extension)
            };
            let candidate = self.directory.join(name);
            if !candidate.exists() {
                return candidate;
            }
            attempt += 1;
        }
    }
}

fn write_csv(table: &SettingsTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_xlsx(table: &SettingsTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (column, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, column as u16, header.as_str())?;
    }
    for (index, row) in table.rows.iter().enumerate() {
        for (column, cell) in row.iter().enumerate() {
            worksheet.write_string(index as u32 + 1, column as u16, cell.as_str())?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractionRecord;
    use crate::report::table::TableMode;
    use tempfile::TempDir;

    fn sample_table() -> SettingsTable {
        let records = vec![
            ExtractionRecord::new("a.txt", "RID", "FEEDER RELAY"),
            ExtractionRecord::new("a.txt", "G1:TID", "STATION A"),
        ];
        SettingsTable::build(&records, TableMode::Rows)
    }

    #[test]
    fn test_write_csv_content() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new("output").with_directory(temp_dir.path());

        let path = writer.write(&sample_table(), FileFormat::Csv, None).unwrap();
        assert_eq!(path, temp_dir.path().join("output.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Filename,Setting Name,Val"));
        assert_eq!(lines.next(), Some("a.txt,RID,FEEDER RELAY"));
        assert_eq!(lines.next(), Some("a.txt,G1:TID,STATION A"));
    }

    #[test]
    fn test_collision_appends_numeric_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new("output").with_directory(temp_dir.path());

        let first = writer.write(&sample_table(), FileFormat::Csv, None).unwrap();
        let second = writer.write(&sample_table(), FileFormat::Csv, None).unwrap();
        let third = writer.write(&sample_table(), FileFormat::Csv, None).unwrap();

        assert_eq!(first, temp_dir.path().join("output.csv"));
        assert_eq!(second, temp_dir.path().join("output - 1.csv"));
        assert_eq!(third, temp_dir.path().join("output - 2.csv"));
        assert!(first.exists() && second.exists() && third.exists());
    }

    #[test]
    fn test_explicit_path_used_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new("output").with_directory(temp_dir.path());
        let target = temp_dir.path().join("my-report.csv");

        let path = writer
            .write(&sample_table(), FileFormat::Csv, Some(&target))
            .unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
    }

    #[test]
    fn test_write_xlsx_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ReportWriter::new("output").with_directory(temp_dir.path());

        let path = writer
            .write(&sample_table(), FileFormat::Xlsx, None)
            .unwrap();
        assert_eq!(path, temp_dir.path().join("output.xlsx"));
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(FileFormat::Csv.extension(), "csv");
        assert_eq!(FileFormat::Xlsx.extension(), "xlsx");
    }
}
