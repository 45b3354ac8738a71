//! Display formatting for CLI output
//!
//! Status lines for creation results and existence checks, and the
//! dry-run body printer.

use console::style;
use nexrepo_client::CreateOutcome;
use std::io::{self, Write};

/// Writes status lines for finished operations
pub struct StatusReporter<W: Write> {
    writer: W,
}

impl StatusReporter<io::Stdout> {
    /// Create a reporter that writes to stdout
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> StatusReporter<W> {
    /// Create a reporter that writes to a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Report the status Nexus returned for a creation request
    pub fn report_create(&mut self, outcome: &CreateOutcome) -> io::Result<()> {
        let subject = format!(
            "{} repository with ID={}",
            capitalize(&outcome.repo_type),
            outcome.id
        );

        if outcome.is_success() {
            return writeln!(self.writer, "{} {} created", style("✓").green(), subject);
        }

        let reason = match outcome.status() {
            400 => "Nexus rejected the request (the repository may already exist)".to_string(),
            401 => "authentication failed, check the username and password".to_string(),
            403 => "the user is not allowed to create repositories".to_string(),
            404 => "endpoint not found, check the Nexus URL and context path".to_string(),
            status if (300..400).contains(&status) => {
                format!("Nexus answered with a redirect ({}), check the Nexus URL", status)
            }
            status => format!("Nexus answered with status {}", status),
        };

        writeln!(self.writer, "{} {} was not created: {}", style("✗").red(), subject, reason)?;

        for message in nexus_error_messages(&outcome.response.body) {
            writeln!(self.writer, "    {} {}", style("nexus:").dim(), message)?;
        }
        Ok(())
    }

    /// Report the result of an existence check
    pub fn report_exists(&mut self, id: &str, exists: bool) -> io::Result<()> {
        if exists {
            writeln!(self.writer, "{} Repository with ID={} exists", style("✓").green(), id)
        } else {
            writeln!(
                self.writer,
                "{} Repository with ID={} does not exist",
                style("✗").red(),
                id
            )
        }
    }
}

/// Print a body that would have been sent
///
/// The JSON goes to stdout on its own so it can be piped; the note about the
/// target endpoint goes to stderr.
pub fn print_dry_run(endpoint: &str, body: &str) {
    eprintln!(
        "{} dry run, not sent: POST {}",
        style("→").blue(),
        style(endpoint).dim()
    );
    println!("{}", body);
}

/// Extract messages from a Nexus error body
///
/// Nexus 2 answers failed requests with
/// `{"errors":[{"id":"*","msg":"..."}]}`. Anything else yields nothing.
pub fn nexus_error_messages(body: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };

    value
        .get("errors")
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
