//! Command implementations

pub mod delete;
pub mod list;
pub mod upload;

use colored::Colorize;
use filedrop_core::{human_size, FileRecord, Status};

/// Print the current banner line, if any: green for success, red for
/// failure.
pub fn print_banner(status: Option<&Status>) {
    match status {
        Some(Status::Success(text)) => println!("{}", text.green()),
        Some(Status::Error(text)) => println!("{}", text.red()),
        None => {}
    }
}

/// Render the file table: name, human-readable size, upload date,
/// uploader and id, in server order.
pub fn print_table(records: &[FileRecord]) {
    if records.is_empty() {
        println!("{}", "No files stored".dimmed());
        return;
    }

    println!(
        "{:<30} {:>10}  {:<17} {:<16} {}",
        "File name".bold(),
        "Size".bold(),
        "Uploaded Date".bold(),
        "Uploader".bold(),
        "Id".bold()
    );
    for record in records {
        println!(
            "{:<30} {:>10}  {:<17} {:<16} {}",
            record.filename,
            human_size(record.filesize),
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.uploader,
            record.id.dimmed()
        );
    }
}
