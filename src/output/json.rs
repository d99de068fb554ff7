//! JSON report output

use crate::crawler::CrawlReport;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the crawl report as pretty-printed JSON
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `path` - Path the JSON file should be written to
pub fn write_json_report(report: &CrawlReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Prints the run summary to stdout
pub fn print_summary(report: &CrawlReport) {
    println!("Count: {}", report.count);
    println!("Elapsed time: {:.2}s", report.elapsed_seconds);
}
