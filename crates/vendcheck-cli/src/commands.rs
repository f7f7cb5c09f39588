//! Command implementations.

use crate::cli::{AnalyzeArgs, RedactArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::collections::HashMap;
use std::path::Path;
use vendcheck_domain::Document;
use vendcheck_sdk::{client_email, negotiation_brief, redact, Analyzer};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}

fn parse_hints(hints: &[String]) -> Result<HashMap<String, String>> {
    hints
        .iter()
        .map(|hint| {
            hint.split_once('=')
                .map(|(file, class)| (file.to_string(), class.to_string()))
                .ok_or_else(|| CliError::InvalidHint(hint.clone()))
        })
        .collect()
}

/// `vendcheck analyze` - run the pipeline and print the results.
pub fn execute_analyze(args: &AnalyzeArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<String> {
    let hints = parse_hints(&args.hints)?;

    let mut documents = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let text = read_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mut document = Document::new(name.clone(), text);
        if let Some(class) = hints.get(&name) {
            document = document.with_type_hint(class.clone());
        }
        documents.push(document);
    }

    let analysis = analyzer.analyze(&documents);
    let mut out = formatter.format_analysis(&analysis)?;

    if args.brief {
        out.push_str("\n\n");
        out.push_str(&negotiation_brief(
            &analysis.facts,
            &analysis.checklist,
            &analysis.citations,
            analyzer.corpus(),
        ));
    }
    if args.email {
        out.push_str("\n\n");
        out.push_str(&client_email(&analysis.checklist));
    }
    Ok(out)
}

/// `vendcheck redact` - print the file with contact PII replaced.
pub fn execute_redact(args: &RedactArgs) -> Result<String> {
    Ok(redact(&read_file(&args.file)?))
}

/// `vendcheck rules` - list the corpus.
pub fn execute_rules(analyzer: &Analyzer, formatter: &Formatter) -> Result<String> {
    formatter.format_rules(analyzer.corpus())
}
