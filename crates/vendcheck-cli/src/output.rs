//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vendcheck_domain::{OverallStatus, RuleCorpus};
use vendcheck_sdk::Analysis;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full analysis.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Table => Ok(self.format_analysis_table(analysis)),
        }
    }

    fn format_analysis_table(&self, analysis: &Analysis) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Check", "Status", "Evidence", "Rules"]);
        for finding in &analysis.checklist.findings {
            let status = if finding.ok { "ok" } else { "FAIL" };
            let check = finding
                .problem
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                check,
                status.to_string(),
                finding.evidence.clone(),
                finding.rule_ids.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let verdict = match analysis.checklist.overall_status {
            OverallStatus::Pass => self.paint("PASS", Color::Green),
            OverallStatus::Fail => self.paint("FAIL", Color::Red),
        };

        let mut out = format!("Request {}\n\n{}\n\nOverall: {}\n", analysis.request_id, table, verdict);
        if !analysis.citations.is_empty() {
            out.push_str("\nCitations:\n");
            for citation in &analysis.citations {
                out.push_str(&format!(
                    "  {}  {:.3}\n",
                    citation.rule_id, citation.relevance_score
                ));
            }
        }
        out
    }

    /// Format the rule corpus listing.
    pub fn format_rules(&self, corpus: &RuleCorpus) -> Result<String> {
        if self.format == OutputFormat::Json {
            let rules: serde_json::Map<String, serde_json::Value> = corpus
                .iter()
                .map(|(id, rule)| Ok((id.to_string(), serde_json::to_value(rule)?)))
                .collect::<Result<_>>()?;
            return Ok(serde_json::to_string_pretty(&rules)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Id", "Title", "Content"]);
        for (id, rule) in corpus.iter() {
            builder.push_record([id, rule.title.as_str(), rule.content.as_str()]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        Ok(table.to_string())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendcheck_domain::Document;
    use vendcheck_sdk::Analyzer;

    fn analysis() -> Analysis {
        Analyzer::reference().analyze(&[Document::new("p.txt", "UEI: ABC123DEF456")])
    }

    #[test]
    fn test_table_output_names_failures() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter.format_analysis(&analysis()).unwrap();
        assert!(out.contains("missing_duns"));
        assert!(out.contains("Overall: FAIL"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let out = formatter.format_analysis(&analysis()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["checklist"]["overall_status"], "fail");
    }

    #[test]
    fn test_rules_listing() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter
            .format_rules(&vendcheck_sdk::Analyzer::reference().corpus().clone())
            .unwrap();
        assert!(out.contains("Identity & Registry"));
        assert!(out.contains("R5"));
    }
}
