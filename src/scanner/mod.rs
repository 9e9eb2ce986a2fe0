pub mod file_filter;
pub mod file_finder;

pub use file_filter::FileFilter;
pub use file_finder::FileFinder;
