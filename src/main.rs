use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use genclean::{clean_generated, CleanReport};
use humansize::{format_size, BINARY};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove generated header files whose source images no longer exist",
    long_about = None
)]
struct Args {
    /// Directory containing the source image files
    image_dir: PathBuf,

    /// Directory containing the generated header files
    generated_dir: PathBuf,
}

fn print_report(report: &CleanReport) {
    if report.removed.is_empty() {
        println!("No outdated headers found.");
    } else {
        println!(
            "{}",
            format!(
                "Removed {} outdated header(s), reclaiming {}",
                report.removed.len(),
                format_size(report.bytes_reclaimed(), BINARY)
            )
            .green()
            .bold()
        );
    }
}

fn main() -> Result<()> {
    // Bad invocations exit with status 1 rather than clap's default 2;
    // --help and --version keep clap's stdout/exit-0 behavior.
    let args = Args::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            std::process::exit(1);
        }
        err.exit()
    });

    let report = clean_generated(&args.image_dir, &args.generated_dir)?;
    print_report(&report);

    Ok(())
}
