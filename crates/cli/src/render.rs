use console::style;
use formdesk_core::SubmitOutcome;
use formdesk_types::CustomerRecord;

/// User-facing message for a submission outcome
pub fn outcome_message(outcome: &SubmitOutcome, db_path: &str) -> String {
    match outcome {
        SubmitOutcome::Success(record) => format!(
            "Customer '{}' submitted successfully and saved to '{}'.",
            record.name, db_path
        ),
        SubmitOutcome::ValidationError(e) => e.to_string(),
        SubmitOutcome::StorageFailure => {
            "Failed to save data. Check the log for details.".to_string()
        }
    }
}

pub fn print_outcome(outcome: &SubmitOutcome, db_path: &str) {
    let message = outcome_message(outcome, db_path);
    match outcome {
        SubmitOutcome::Success(_) => println!("{} {}", style("✔").green(), message),
        SubmitOutcome::ValidationError(_) => {
            eprintln!("{} {}", style("✗ Validation Error").red(), message)
        }
        SubmitOutcome::StorageFailure => {
            eprintln!("{} {}", style("✗ Database Error").red(), message)
        }
    }
}

pub fn print_customers(records: &[CustomerRecord]) {
    if records.is_empty() {
        println!("{}", style("No customers registered yet").dim());
        return;
    }

    for record in records {
        println!(
            "{} {}",
            style(format!("#{}", record.id)).dim(),
            style(&record.name).bold()
        );
        for (label, value) in [
            ("Birthday", &record.birthday),
            ("Email", &record.email),
            ("Phone", &record.phone),
            ("Address", &record.address),
        ] {
            if !value.is_empty() {
                println!("  {} {}", style(format!("{:<9}", label)).dim(), value);
            }
        }
        println!(
            "  {} {}",
            style(format!("{:<9}", "Contact")).dim(),
            record.contact_method
        );
    }
}
