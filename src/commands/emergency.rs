//! Emergency contact handler

use crate::emergency::{dial, CONTACTS, DIAL_FAILURE};
use crate::error::Result;
use colored::Colorize;
use prettytable::{format, Table};

/// List emergency contacts, or dial a number
///
/// Dial failures are reported on stderr but are not fatal; the contact
/// list must stay reachable even when the platform cannot place calls.
pub fn handle_emergency(number: Option<String>) -> Result<()> {
    match number {
        None => {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

            table.add_row(prettytable::row!["Contact".bold(), "Number".bold()]);
            for contact in CONTACTS {
                table.add_row(prettytable::row![contact.name, contact.phone.cyan()]);
            }

            println!("\nEmergency Contacts:");
            table.printstd();
            println!(
                "\nUse {} to place a call.\n",
                "healthmate emergency --dial <number>".cyan()
            );
        }
        Some(number) => {
            println!("Dialing {}...", number.cyan());
            if let Err(e) = dial(&number) {
                tracing::warn!("Dial failed: {}", e);
                eprintln!("{}", DIAL_FAILURE.red());
            }
        }
    }

    Ok(())
}
