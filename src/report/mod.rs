pub mod table;
pub mod writer;

pub use table::{SettingsTable, TableMode, FILE_DATE_SETTING};
pub use writer::{FileFormat, ReportWriter};
