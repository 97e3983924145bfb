//! Console output formatter for evaluation results

use casewise_application::EvaluateDomainError;
use casewise_domain::{Domain, DomainRegistry, DomainVerdicts, FactSet, Verdict};
use colored::Colorize;
use serde_json::json;

/// Formats evaluation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result, one block per question in query order
    pub fn format(result: &DomainVerdicts) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&result.domain_name));
        output.push('\n');

        for verdict in &result.verdicts {
            output.push_str(&Self::verdict(verdict));
        }

        output.push_str(&format!(
            "\n{} {} of {} questions answered YES\n",
            "Summary:".cyan().bold(),
            result.positive_count(),
            result.verdicts.len()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DomainVerdicts) -> String {
        let results: Vec<_> = result
            .verdicts
            .iter()
            .map(|v| {
                json!({
                    "label": v.label,
                    "result": v.result_label(),
                    "advice": v.advice,
                    "next_steps": v.next_steps,
                })
            })
            .collect();
        let value = json!({
            "domain": result.domain_id,
            "domain_name": result.domain_name,
            "results": results,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Domain ids with their display names
    pub fn format_domains(registry: &DomainRegistry) -> String {
        let width = registry
            .domains()
            .iter()
            .map(|d| d.id().len())
            .max()
            .unwrap_or(0);

        let mut output = format!("{}\n", "Available domains:".cyan().bold());
        for domain in registry.domains() {
            // Pad before styling; styled strings ignore the width
            let id = format!("{:width$}", domain.id(), width = width);
            output.push_str(&format!("  {}  {}\n", id.bold(), domain.display_name()));
        }
        output
    }

    /// Normalized facts as rule-language clauses
    pub fn format_facts(domain: &Domain, facts: &FactSet) -> String {
        let mut output = format!(
            "{} {}\n",
            "%".dimmed(),
            format!("{} ({})", domain.display_name(), domain.rule_source()).dimmed()
        );
        output.push_str(&facts.to_clauses());
        output
    }

    /// User-facing message for a failed evaluation
    pub fn format_error(error: &EvaluateDomainError) -> String {
        match error {
            EvaluateDomainError::DomainNotFound(id) => format!(
                "{} unknown legal domain '{}'. Run `casewise domains` to list them.",
                "Error:".red().bold(),
                id
            ),
            EvaluateDomainError::RuleLoadFailure { domain, .. } => format!(
                "{} the rules for '{}' could not be loaded, so no guidance is available. \
                 Run with -v for details.",
                "Error:".red().bold(),
                domain
            ),
        }
    }

    fn verdict(verdict: &Verdict) -> String {
        let result = if verdict.outcome {
            verdict.result_label().green().bold()
        } else {
            verdict.result_label().red().bold()
        };

        let mut output = format!(
            "\n{} {}\n{}\n",
            format!("── {} ──", verdict.label).yellow().bold(),
            result,
            Self::indent(&verdict.advice, "  ")
        );
        if !verdict.next_steps.is_empty() {
            output.push_str(&format!("  {}\n", "Next steps:".cyan()));
            for step in &verdict.next_steps {
                output.push_str(&format!("    * {}\n", step));
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
