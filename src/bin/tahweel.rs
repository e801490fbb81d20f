//! Dry-run entry point: reads the Qoyod export files from a base
//! directory, runs every validation, and prints a report without writing
//! any output files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tahweel::core::{ConvertError, DryRunPaths, DryRunReport, perform_dry_run};
use tahweel::reader::XlsxReader;

#[derive(Parser)]
#[command(name = "tahweel", version, about = "Qoyod → Zoho Books conversion dry run")]
struct Cli {
    /// Directory containing the Qoyod export files
    base: PathBuf,

    /// Invoice statement file name
    #[arg(long, default_value = "Invoices.xlsx")]
    invoices: String,

    /// Bill statement file name
    #[arg(long, default_value = "Bills.xlsx")]
    bills: String,

    /// Journal export file names (repeatable)
    #[arg(long = "journal", default_values = ["Journals1.xlsx", "Journals2.xlsx"])]
    journals: Vec<String>,

    /// Applied invoice credits file name (optional input)
    #[arg(long, default_value = "AppliedInvoiceCredits.xlsx")]
    applied_invoice_credits: String,

    /// Applied bill credits file name (optional input)
    #[arg(long, default_value = "AppliedBillCredits.xlsx")]
    applied_bill_credits: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = DryRunPaths {
        invoices: cli.base.join(&cli.invoices),
        bills: cli.base.join(&cli.bills),
        journals: cli.journals.iter().map(|name| cli.base.join(name)).collect(),
        applied_invoice_credits: cli.base.join(&cli.applied_invoice_credits),
        applied_bill_credits: cli.base.join(&cli.applied_bill_credits),
    };

    println!("Starting conversion dry run...");

    match perform_dry_run(&XlsxReader::new(), &paths) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(ConvertError::FileNotFound(path)) => {
            eprintln!("\nERROR: A required file was not found.");
            eprintln!("Please check the path: {}", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("\nAn unexpected error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &DryRunReport) {
    println!("\n--- Dry Run Report ---");
    println!("Total Invoices to Convert: {}", report.total_invoices);
    println!("Total Bills to Convert: {}", report.total_bills);
    println!(
        "Applied Invoice Credits Found: {}",
        report.applied_invoice_credits
    );
    println!("Applied Bill Credits Found: {}", report.applied_bill_credits);

    if report.has_issues() {
        println!("\n--- ISSUES FOUND ---");

        if !report.validation_messages.is_empty() {
            println!("\n[General Validation Messages]");
            for message in &report.validation_messages {
                println!("- {message}");
            }
        }

        if !report.missing_date_warnings.is_empty() {
            println!("\n[Warnings: Missing Journal Dates for Applied Credits]");
            println!(
                "The following applied credits are missing a date and could not find a matching \
                 journal entry to infer the date from. The output file will have an empty date \
                 for these records."
            );
            for warning in &report.missing_date_warnings {
                println!("- {warning}");
            }
        }

        if !report.credit_errors.is_empty() {
            println!("\n[Errors: Applied Credits Validation]");
            for error in &report.credit_errors {
                println!("- {error}");
            }
        }
    } else {
        println!("\nNo critical issues found. The data appears to be ready for conversion.");
    }

    println!("\n--- End of Report ---");
}
