//! Plain-text rendering of controller state.

use std::io::{self, Write};

use records_client::ControllerState;
use shared::{
    format::{format_currency, format_date, format_name},
    protocol::Application,
};

const LABEL_WIDTH: usize = 18;

pub fn application_cells(application: &Application) -> Vec<(&'static str, String)> {
    vec![
        ("Company", application.company.clone()),
        (
            "Name",
            format_name(&application.first_name, &application.last_name),
        ),
        ("Email", application.email.clone()),
        ("Loan amount", format_currency(application.loan_amount)),
        ("Application date", format_date(&application.date_created)),
        ("Expiry date", format_date(&application.expiry_date)),
    ]
}

pub fn write_applications(out: &mut impl Write, applications: &[Application]) -> io::Result<()> {
    for application in applications {
        for (label, value) in application_cells(application) {
            writeln!(out, "{label:<LABEL_WIDTH$}{value}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Label of the "load more" affordance, or `None` once the list is complete.
pub fn load_more_label<T>(state: &ControllerState<T>) -> Option<&'static str> {
    if !state.has_more {
        None
    } else if state.loading {
        Some("Loading...")
    } else {
        Some("Load More")
    }
}

pub fn write_error<T>(out: &mut impl Write, state: &ControllerState<T>) -> io::Result<()> {
    if let Some(error) = &state.error {
        writeln!(out, "Error: {error}")?;
    }
    Ok(())
}

pub fn summary_line<T>(state: &ControllerState<T>) -> String {
    let count = state.applications.len();
    let noun = if count == 1 { "application" } else { "applications" };
    if state.has_more {
        format!("{count} {noun} shown, more available")
    } else {
        format!("{count} {noun} shown")
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
