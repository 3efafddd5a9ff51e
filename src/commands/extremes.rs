use crate::cli::{ExtremesArgs, ReportFormat};
use crate::core::extremes;
use crate::utils::output::OutputStyle;
use crate::utils::parse::{ParsedNumbers, parse_numbers};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::ops::Add;

/// Literal array from the original assignment sheet
const EXAMPLE_ARRAY: [i64; 8] = [5, -3, 8, -1, 2, -7, 9, -4];

pub fn handle_extremes_command(args: &ExtremesArgs) -> Result<()> {
    let format = args.format.as_ref().unwrap_or(&ReportFormat::Plain);

    if args.values.is_empty() {
        return print_scan(&EXAMPLE_ARRAY, format);
    }

    match parse_numbers(&args.values)? {
        ParsedNumbers::Ints(values) => print_scan(&values, format),
        ParsedNumbers::Floats(values) => print_scan(&values, format),
    }
}

fn print_scan<T>(values: &[T], format: &ReportFormat) -> Result<()>
where
    T: Copy + PartialOrd + Default + Add<Output = T> + Display + Debug + Serialize,
{
    let report = extremes::scan(values);

    if let ReportFormat::Json = format {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize scan report to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    OutputStyle::print_header("Задача №1: Сумма отрицательных элементов между max и min");
    println!("{}", OutputStyle::muted(&format!("Массив: {:?}", values)));

    let sum = report.as_ref().map(|r| r.sum).unwrap_or_default();
    println!(
        "Сумма отрицательных элементов между max и min: {}",
        OutputStyle::info(&sum.to_string())
    );

    if let (ReportFormat::Detailed, Some(report)) = (format, &report) {
        OutputStyle::print_field_colored(
            "Max index",
            &report.max_index.to_string(),
            OutputStyle::content,
        );
        OutputStyle::print_field_colored(
            "Min index",
            &report.min_index.to_string(),
            OutputStyle::content,
        );
    }

    Ok(())
}
