/// Filesystem adapters for export directories and files
mod file_writer;

pub use file_writer::FileSystemWriter;
