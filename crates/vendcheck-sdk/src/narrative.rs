//! Narrative renderers
//!
//! Deterministic prose over an evaluated checklist: a negotiation prep
//! brief for the account team and a draft status email for the client.
//! No decision logic lives here - every verdict is already in the
//! checklist.

use vendcheck_domain::{Checklist, Citation, FactSet, Problem, RuleCorpus};

fn issue_line(problem: Problem) -> &'static str {
    match problem {
        Problem::MissingUei => {
            "- Missing UEI (Unique Entity Identifier) - required for GSA registration (R1)"
        }
        Problem::MissingDuns => "- Missing DUNS number - required for GSA registration (R1)",
        Problem::SamNotActive => "- SAM.gov registration not active - must be current (R1)",
        Problem::MissingPastPerformance => {
            "- No past performance records provided - at least one is required (R3)"
        }
        Problem::PastPerformanceMinValueNotMet => {
            "- Past performance below $25,000 threshold - need at least one project ≥ $25,000 (R3)"
        }
        Problem::PricingIncomplete => {
            "- Pricing data incomplete - missing rate basis or units (R4)"
        }
    }
}

fn email_item(problem: Problem) -> &'static str {
    match problem {
        Problem::MissingUei => "- Unique Entity Identifier (UEI)",
        Problem::MissingDuns => "- DUNS number",
        Problem::SamNotActive => "- Active SAM.gov registration",
        Problem::MissingPastPerformance => "- At least one past performance record",
        Problem::PastPerformanceMinValueNotMet => "- Past performance project ≥ $25,000",
        Problem::PricingIncomplete => "- Complete pricing information with rates and units",
    }
}

/// Render the negotiation prep brief as markdown.
pub fn negotiation_brief(
    facts: &FactSet,
    checklist: &Checklist,
    citations: &[Citation],
    corpus: &RuleCorpus,
) -> String {
    let problems = checklist.problems();
    let mut brief = String::from("## Negotiation Prep Brief\n\n");

    if problems.is_empty() {
        brief.push_str(
            "**Strengths:** All required elements are present and compliant. The submission \
             meets GSA requirements for identity verification, past performance, and pricing \
             structure.\n\n",
        );
        brief.push_str(
            "**Recommendation:** Proceed with standard negotiation process. No major gaps \
             identified.\n\n",
        );
    } else {
        brief.push_str("**Key Issues Identified:**\n");
        for problem in &problems {
            brief.push_str(issue_line(*problem));
            brief.push('\n');
        }
        brief.push_str(
            "\n**Negotiation Strategy:** Focus on obtaining missing documentation and \
             addressing compliance gaps before proceeding with pricing discussions.\n\n",
        );
    }

    if !facts.naics_codes.is_empty() {
        let mappings: Vec<String> = facts
            .naics_codes
            .iter()
            .map(|code| format!("{} → {}", code, corpus.sin_for_naics(code)))
            .collect();
        brief.push_str(&format!("**NAICS → SIN:** {}\n\n", mappings.join(", ")));
    }

    let cited: Vec<&str> = citations.iter().map(|c| c.rule_id.as_str()).collect();
    brief.push_str(&format!("**Rule Citations:** {}\n", cited.join(", ")));
    brief
}

/// Render the draft client email, plain text.
pub fn client_email(checklist: &Checklist) -> String {
    let problems = checklist.problems();
    let mut email = String::from("Subject: GSA Submission Review - Action Required\n\n");
    email.push_str("Dear Client,\n\n");
    email.push_str(
        "Thank you for submitting your GSA documentation. We have completed our initial \
         review and identified the following items that need attention:\n\n",
    );

    if problems.is_empty() {
        email.push_str("All required documentation is complete and compliant.\n\n");
        email.push_str("Next steps:\n");
        email.push_str("1. Proceed with GSA submission\n");
        email.push_str("2. Schedule negotiation meeting\n");
        email.push_str("3. Prepare for contract award\n\n");
    } else {
        email.push_str("Missing or incomplete items:\n");
        for problem in &problems {
            email.push_str(email_item(*problem));
            email.push('\n');
        }
        email.push_str("\nNext steps:\n");
        email.push_str("1. Provide missing documentation\n");
        email.push_str("2. Update incomplete information\n");
        email.push_str("3. Resubmit for review\n\n");
    }

    email.push_str(
        "Please contact us if you have any questions or need assistance with these \
         requirements.\n\n",
    );
    email.push_str("Best regards,\nGSA Review Team");
    email
}
