//! Symptom checker handler
//!
//! Interactive mode browses the vocabulary in A–Z sections, toggles
//! selections, cycles severities, and submits the selection for prediction.
//! Non-interactive mode takes a comma-separated symptom list and prints the
//! report directly.

use crate::backend::{load_vocabulary, PredictOutcome, TriageClient};
use crate::config::Config;
use crate::error::Result;
use crate::report::{format_probability, unknown_symptoms_message, TriageLevel, TriageReport};
use crate::store::KvStore;
use crate::symptoms::sections::{self, title_case};
use crate::symptoms::SymptomSelection;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Maximum suggestions shown for an unrecognized entry
const SUGGESTION_LIMIT: usize = 6;

/// Special commands available inside the checker loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckCommand {
    /// Show the vocabulary in A–Z sections
    List,

    /// Filter the vocabulary by a search query
    Find(String),

    /// Show the current selection with severities
    Selected,

    /// Cycle the severity of a selected symptom
    Severity(String),

    /// Set free-text symptoms merged into the next check
    Other(String),

    /// Clear the selection and free-text entry
    Clear,

    /// Submit the selection for prediction
    Check,

    /// Display help information
    Help,

    /// Exit the checker
    Quit,

    /// A slash command that could not be understood
    Unknown(String),

    /// Not a special command; treat the input as a symptom to toggle
    None,
}

/// Parse a line of checker input for special commands
pub fn parse_check_command(input: &str) -> CheckCommand {
    if !input.starts_with('/') {
        return CheckCommand::None;
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("").to_lowercase();
    let arg = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match command.as_str() {
        "/list" => CheckCommand::List,
        "/find" => match arg {
            Some(q) => CheckCommand::Find(q),
            None => CheckCommand::Unknown(
                "Command /find requires a query\n\nUsage: /find <text>".to_string(),
            ),
        },
        "/selected" => CheckCommand::Selected,
        "/severity" => match arg {
            Some(name) => CheckCommand::Severity(name),
            None => CheckCommand::Unknown(
                "Command /severity requires a symptom\n\nUsage: /severity <symptom>".to_string(),
            ),
        },
        "/other" => CheckCommand::Other(arg.unwrap_or_default()),
        "/clear" => CheckCommand::Clear,
        "/check" => CheckCommand::Check,
        "/help" => CheckCommand::Help,
        "/quit" | "/exit" => CheckCommand::Quit,
        other => CheckCommand::Unknown(format!(
            "Unknown command: {}\n\nType '/help' to see available commands",
            other
        )),
    }
}

/// Run the symptom checker
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `symptoms` - Comma-separated symptoms for a one-shot check
/// * `topk` - Optional override for the number of conditions shown
///
/// # Errors
///
/// Returns error if the vocabulary is unavailable, the prediction service
/// fails, or the store cannot be opened
pub async fn run_check(
    config: Config,
    symptoms: Option<String>,
    topk: Option<usize>,
) -> Result<()> {
    let topk = topk.unwrap_or(config.check.topk);
    let client = TriageClient::new(&config.backend)?;

    if let Some(raw) = symptoms {
        let selection = SymptomSelection::new();
        let keys = selection.with_other(&raw);
        tracing::info!("One-shot check for {} symptoms", keys.len());

        let outcome = client.predict(&keys, topk).await?;
        render_outcome(&outcome, &keys, &selection, topk);
        return Ok(());
    }

    run_interactive(config, client, topk).await
}

async fn run_interactive(config: Config, client: TriageClient, topk: usize) -> Result<()> {
    tracing::info!("Starting interactive symptom checker");

    let store = KvStore::open()?;
    let vocab = load_vocabulary(&store, &client).await?;

    let mut selection = SymptomSelection::new();
    let mut other = String::new();

    let mut rl = DefaultEditor::new()?;

    println!("\n{}", "Symptom Checker".bold());
    println!(
        "{}",
        format!("{} symptoms available.", vocab.len()).dimmed()
    );
    println!(
        "{}\n",
        "Type a symptom to select it, /list to browse, /help for commands.".dimmed()
    );

    loop {
        match rl.readline(&format!("{} ", "check>".cyan().bold())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_check_command(trimmed) {
                    CheckCommand::List => {
                        print_sections(&vocab, &selection, config.check.columns);
                    }
                    CheckCommand::Find(query) => {
                        let matches = sections::filter(&vocab, &query);
                        if matches.is_empty() {
                            println!("{}\n", "No matching symptoms.".yellow());
                        } else {
                            print_sections(&matches, &selection, config.check.columns);
                        }
                    }
                    CheckCommand::Selected => {
                        print_selection(&selection, &other);
                    }
                    CheckCommand::Severity(name) => {
                        let key = sections::normalize(&name);
                        if selection.contains(&key) {
                            selection.cycle_severity(&key);
                            println!(
                                "{} is now {}\n",
                                title_case(&key).bold(),
                                selection.severity(&key)
                            );
                        } else {
                            println!(
                                "{}\n",
                                format!("{} is not selected", title_case(&key)).yellow()
                            );
                        }
                    }
                    CheckCommand::Other(text) => {
                        other = text;
                        if other.is_empty() {
                            println!("{}\n", "Cleared free-text symptoms.".dimmed());
                        } else {
                            println!("{}\n", format!("Will also check: {}", other).dimmed());
                        }
                    }
                    CheckCommand::Clear => {
                        selection.clear();
                        other.clear();
                        println!("{}\n", "Cleared selection.".green());
                    }
                    CheckCommand::Check => {
                        let keys = selection.with_other(&other);
                        if keys.is_empty() {
                            println!("{}\n", "Select at least one symptom first.".yellow());
                            continue;
                        }

                        println!("{}", "Checking...".dimmed());
                        let outcome = client.predict(&keys, topk).await?;
                        render_outcome(&outcome, &keys, &selection, topk);
                    }
                    CheckCommand::Help => {
                        print_help();
                    }
                    CheckCommand::Quit => {
                        println!("Goodbye!");
                        break;
                    }
                    CheckCommand::Unknown(message) => {
                        println!("{}\n", message.yellow());
                    }
                    CheckCommand::None => {
                        toggle_symptom(trimmed, &vocab, &mut selection);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn toggle_symptom(input: &str, vocab: &[String], selection: &mut SymptomSelection) {
    let key = sections::normalize(input);

    if vocab.contains(&key) {
        if selection.toggle(&key) {
            println!(
                "{} selected ({})\n",
                title_case(&key).bold(),
                selection.severity(&key)
            );
        } else {
            println!("{} deselected\n", title_case(&key).bold());
        }
        return;
    }

    let suggestions = sections::suggest(vocab, input, SUGGESTION_LIMIT);
    if suggestions.is_empty() {
        println!(
            "{}\n",
            format!(
                "No symptom named \"{}\". Use /other to include it as free text.",
                input
            )
            .yellow()
        );
    } else {
        println!("{}", format!("No symptom named \"{}\". Did you mean:", input).yellow());
        for suggestion in suggestions {
            println!("  {}", title_case(&suggestion));
        }
        println!();
    }
}

fn print_sections(vocab: &[String], selection: &SymptomSelection, columns: usize) {
    for section in sections::build_sections(vocab, columns) {
        println!("\n{}", section.letter.to_string().bold());
        for row in &section.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|key| {
                    let label = title_case(key);
                    if selection.contains(key) {
                        format!("[{}]", label).green().to_string()
                    } else {
                        format!(" {} ", label)
                    }
                })
                .collect();
            println!("  {}", cells.join("  "));
        }
    }
    println!();
}

fn print_selection(selection: &SymptomSelection, other: &str) {
    if selection.is_empty() && other.is_empty() {
        println!("{}\n", "Nothing selected.".yellow());
        return;
    }

    println!();
    for name in selection.names() {
        println!(
            "  {} ({})",
            title_case(name).bold(),
            selection.severity(name)
        );
    }
    if !other.is_empty() {
        println!("  {} {}", "Free text:".dimmed(), other);
    }
    println!();
}

fn render_outcome(
    outcome: &PredictOutcome,
    keys: &[String],
    selection: &SymptomSelection,
    topk: usize,
) {
    match outcome {
        PredictOutcome::UnknownSymptoms(unknown) => {
            println!("\n{}\n", unknown_symptoms_message(unknown).yellow());
        }
        PredictOutcome::Report(report) => {
            render_report(report, keys, selection, topk);
        }
    }
}

fn render_report(report: &TriageReport, keys: &[String], selection: &SymptomSelection, topk: usize) {
    println!("\n{}", "You Reported".bold());
    for key in keys {
        println!(
            "  {} ({})",
            title_case(key),
            selection.severity(key)
        );
    }

    if report.results.is_empty() {
        println!("\n{}\n", "No candidate conditions returned.".yellow());
    } else {
        println!("\n{}", "Possible Conditions".bold());
        for (i, condition) in report.top(topk).iter().enumerate() {
            println!(
                "\n  {}. {} — {}",
                i + 1,
                condition.disease.bold(),
                format_probability(condition.probability).cyan()
            );
            if !condition.description.is_empty() {
                println!("     {}", condition.description);
            }
            for precaution in &condition.precautions {
                println!("     - {}", precaution);
            }
        }
        println!();
    }

    if let Some(triage) = &report.triage {
        let banner = format!("Triage: {} — {}", triage.level, triage.level.advisory());
        let colored_banner = match triage.level {
            TriageLevel::Green => banner.green(),
            TriageLevel::Amber => banner.yellow(),
            TriageLevel::Red => banner.red().bold(),
        };
        println!("{}", colored_banner);
        for reason in &triage.reasons {
            println!("  {}", reason.dimmed());
        }
        println!();
    }
}

fn print_help() {
    println!("\n{}", "Available commands:".bold());
    println!("  {}               List all symptoms A–Z", "/list".cyan());
    println!("  {}        Search the vocabulary", "/find <text>".cyan());
    println!("  {}           Show the current selection", "/selected".cyan());
    println!("  {}  Cycle a symptom's severity", "/severity <symptom>".cyan());
    println!("  {}       Add comma-separated free-text symptoms", "/other <text>".cyan());
    println!("  {}              Clear the selection", "/clear".cyan());
    println!("  {}              Submit the selection", "/check".cyan());
    println!("  {}               Show this help", "/help".cyan());
    println!("  {}               Exit the checker", "/quit".cyan());
    println!("\nType a symptom name to select or deselect it.\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptoms::Severity;

    #[test]
    fn test_parse_plain_input_is_none() {
        assert_eq!(parse_check_command("fever"), CheckCommand::None);
    }

    #[test]
    fn test_parse_list_and_check() {
        assert_eq!(parse_check_command("/list"), CheckCommand::List);
        assert_eq!(parse_check_command("/check"), CheckCommand::Check);
    }

    #[test]
    fn test_parse_find_with_query() {
        assert_eq!(
            parse_check_command("/find pain"),
            CheckCommand::Find("pain".to_string())
        );
    }

    #[test]
    fn test_parse_find_without_query_is_unknown() {
        assert!(matches!(
            parse_check_command("/find"),
            CheckCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!(
            parse_check_command("/severity chest pain"),
            CheckCommand::Severity("chest pain".to_string())
        );
    }

    #[test]
    fn test_parse_other_without_text_clears() {
        assert_eq!(parse_check_command("/other"), CheckCommand::Other(String::new()));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_check_command("/bogus"),
            CheckCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_severity_label_shown_for_free_text_defaults_to_moderate() {
        let selection = SymptomSelection::new();
        assert_eq!(selection.severity("anything"), Severity::Moderate);
    }
}
