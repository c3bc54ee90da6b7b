//! First-aid guide handler

use crate::error::Result;
use crate::firstaid::{search, FirstAidTopic, TOPICS};
use colored::Colorize;

/// Browse the first-aid library
///
/// Without a query, lists all topic titles. With a query, prints every
/// matching guide in full.
pub fn handle_firstaid(query: Option<String>) -> Result<()> {
    match query {
        None => {
            println!("\n{}", "First Aid Guides".bold());
            for topic in TOPICS {
                println!("  {}. {}", topic.id.cyan(), topic.title);
            }
            println!(
                "\nUse {} to read a guide.\n",
                "healthmate firstaid <title>".cyan()
            );
        }
        Some(query) => {
            let matches = search(&query);
            if matches.is_empty() {
                println!(
                    "{}",
                    format!("No first-aid guide matches \"{}\".", query).yellow()
                );
                return Ok(());
            }
            for topic in matches {
                print_topic(topic);
            }
        }
    }

    Ok(())
}

fn print_topic(topic: &FirstAidTopic) {
    println!("\n{}", topic.title.bold());
    for (i, step) in topic.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}
