//! Field extraction over classified documents

use crate::classify::classify;
use crate::patterns;
use crate::redact::find_emails;
use tracing::{debug, info};
use vendcheck_domain::{
    ContactInfo, Document, DocumentClass, FactSet, PastPerformanceEntry, PricingLine,
};

/// Extract an aggregated [`FactSet`] from a submission's documents.
///
/// Documents are processed in input order; `document_types` gets one entry
/// per document and scalar fields (UEI, DUNS, SAM status, primary contact)
/// are first-match-wins across the whole submission. Extraction is total:
/// a missing field stays unset and no document aborts its siblings.
pub fn extract(documents: &[Document]) -> FactSet {
    let mut facts = FactSet::default();

    for document in documents {
        let class = classify(&document.text, document.type_hint.as_deref());
        facts.document_types.push(class);
        debug!(name = %document.name, %class, "processing document");

        match class {
            DocumentClass::Profile => extract_profile(&document.text, &mut facts),
            DocumentClass::PastPerformance => extract_past_performance(&document.text, &mut facts),
            DocumentClass::Pricing => extract_pricing(&document.text, &mut facts),
            DocumentClass::Unknown => {}
        }
    }

    info!(
        documents = documents.len(),
        naics = facts.naics_codes.len(),
        past_performance = facts.past_performance.len(),
        pricing_lines = facts.pricing_lines.len(),
        "extraction complete"
    );
    facts
}

fn extract_profile(text: &str, facts: &mut FactSet) {
    if facts.uei.is_none() {
        if let Some(caps) = patterns::UEI.captures(text) {
            facts.uei = Some(caps[1].to_string());
        }
    }

    if facts.duns.is_none() {
        if let Some(caps) = patterns::DUNS.captures(text) {
            facts.duns = Some(caps[1].to_string());
        }
    }

    if let Some(caps) = patterns::NAICS.captures(text) {
        // comma list, each code trimmed; no dedup, no validation here
        facts.naics_codes.extend(
            caps[1]
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(String::from),
        );
    }

    if facts.sam_status.is_none() {
        if let Some(caps) = patterns::SAM_STATUS.captures(text) {
            facts.sam_status = Some(caps[1].trim().to_string());
        }
    }

    // independent searches; a contact is recorded only when both shapes
    // appear somewhere in the document
    if facts.primary_contact.is_none() {
        let email = find_emails(text).first().map(|m| m.to_string());
        let phone = patterns::PHONE.find(text).map(|m| m.as_str().to_string());
        if let (Some(email), Some(phone)) = (email, phone) {
            facts.primary_contact = Some(ContactInfo { email, phone });
        }
    }
}

fn extract_past_performance(text: &str, facts: &mut FactSet) {
    // one record per blank-line block carrying a customer or contract label
    for block in text.split("\n\n") {
        let lower = block.to_lowercase();
        if !lower.contains("customer:") && !lower.contains("contract:") {
            continue;
        }

        let entry = PastPerformanceEntry {
            customer: capture_line(&patterns::PP_CUSTOMER, block),
            contract: capture_line(&patterns::PP_CONTRACT, block),
            value: capture_line(&patterns::PP_VALUE, block),
            period: capture_line(&patterns::PP_PERIOD, block),
            contact: capture_line(&patterns::PP_CONTACT, block),
        };
        if !entry.is_empty() {
            facts.past_performance.push(entry);
        }
    }
}

fn extract_pricing(text: &str, facts: &mut FactSet) {
    for line in text.lines() {
        let lower = line.to_lowercase();
        let looks_like_row = line.contains(',')
            && ["labor", "rate", "hour", "day"].iter().any(|k| lower.contains(k));
        if !looks_like_row {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            // malformed row, silently skipped
            continue;
        }
        facts.pricing_lines.push(PricingLine {
            labor_category: parts[0].to_string(),
            rate: parts[1].to_string(),
            unit: parts[2].to_string(),
        });
    }
}

fn capture_line(pattern: &regex::Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}
