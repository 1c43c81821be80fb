//! Offline generator for the policy template catalogue. Fetches the AWS SAM
//! policy templates document and regenerates the catalogue source consumed
//! by samkit-policies. Per-template parse failures are non-fatal; they are
//! emitted as no-op stubs and reported at the end of the run.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod codegen;
mod schema;

const TEMPLATES_URL: &str = "https://raw.githubusercontent.com/awslabs/serverless-application-model/develop/samtranslator/policy_templates_data/policy_templates.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Regenerates the SAM policy template catalogue source")]
struct Cli {
    /// Catalogue document to fetch
    #[arg(long, default_value = TEMPLATES_URL)]
    url: String,

    /// Where to write the generated source
    #[arg(long, default_value = "crates/policies/src/catalog.rs")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let response = reqwest::blocking::get(&cli.url)
        .with_context(|| format!("fetch {}", cli.url))?
        .error_for_status()
        .context("catalogue endpoint returned an error")?;
    let doc: schema::CatalogDoc = response
        .json()
        .context("decode policy template catalogue")?;

    let generation = generate(&doc);
    let source = codegen::render(&generation);
    std::fs::write(&cli.out, source).with_context(|| format!("write {}", cli.out.display()))?;

    tracing::info!(
        templates = generation.entries.len(),
        out = %cli.out.display(),
        "catalogue generated"
    );
    if !generation.failures.is_empty() {
        tracing::warn!(
            count = generation.failures.len(),
            "some templates could not be parsed"
        );
        for failure in &generation.failures {
            tracing::warn!(name = %failure.name, reason = %failure.reason, "template skipped");
        }
    }
    Ok(())
}

/// Parses every template in the document, splitting the outcome into
/// generated entries and recorded failures.
fn generate(doc: &schema::CatalogDoc) -> codegen::Generation {
    let mut entries = Vec::new();
    let mut failures = Vec::new();
    for (name, template) in &doc.templates {
        match schema::parse_template(name, template) {
            Ok(entry) => entries.push(entry),
            Err(err) => failures.push(codegen::Failure {
                name: name.clone(),
                reason: err.to_string(),
            }),
        }
    }
    codegen::Generation { entries, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_splits_parsed_and_failed_templates() {
        let doc: schema::CatalogDoc = serde_json::from_value(json!({
            "Templates": {
                "GoodPolicy": {
                    "Description": "parses fine",
                    "Definition": {
                        "Statement": [{
                            "Effect": "Allow",
                            "Action": ["s3:GetObject"],
                            "Resource": "*",
                        }]
                    }
                },
                "BrokenPolicy": {
                    "Description": "action is a number",
                    "Definition": {
                        "Statement": [{
                            "Effect": "Allow",
                            "Action": 42,
                            "Resource": "*",
                        }]
                    }
                },
            }
        }))
        .unwrap();

        let generation = generate(&doc);
        assert_eq!(generation.entries.len(), 1);
        assert_eq!(generation.entries[0].name, "GoodPolicy");
        assert_eq!(generation.failures.len(), 1);
        assert_eq!(generation.failures[0].name, "BrokenPolicy");

        let source = codegen::render(&generation);
        assert!(source.contains("pub fn add_good_policy(&mut self)"));
        assert!(source.contains("pub fn add_broken_policy(&mut self) {}"));
    }
}
