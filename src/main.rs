use clap::Parser;
use colored::Colorize;
use pingview_template::cli::Args;
use pingview_template::input::extract;
use pingview_template::output::{banner, write_template, ConsoleSink};
use pingview_template::TemplateError;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    pingview_template::logging::init(args.verbose)?;

    println!(
        "{}",
        banner(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    );
    let start = Instant::now();

    let config = args.parser_config()?;
    let options = args.template_options();

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        println!("Generating output folders...");
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Error creating output folder {}: {e}", dir.display()))?;
    }

    println!("Parsing CSV...");
    let records = extract(&config).map_err(log_error)?;
    println!("{} {} records", "Done".green(), records.len());

    println!("Writing template file...");
    let summary =
        write_template(records, &args.output, &options, &mut ConsoleSink).map_err(log_error)?;

    println!(
        "{} {} blocks written to {}",
        "Done".green(),
        summary.written,
        args.output.display()
    );
    if summary.warnings > 0 {
        println!(
            "{} {} records used the placeholder network",
            "NOTE".on_red(),
            summary.warnings
        );
    }
    println!("Execution time: {:?}", start.elapsed());

    Ok(())
}

fn log_error(e: TemplateError) -> TemplateError {
    log::error!("{e}");
    e
}
