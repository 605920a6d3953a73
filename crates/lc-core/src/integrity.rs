//! Referential-integrity checks over a whole [`Catalog`].
//!
//! Runs once after the in-memory model is built and before anything is
//! written. Findings carry a severity: errors always block an export,
//! warnings block only in strict mode.

use std::collections::HashSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Collection};
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One integrity problem, naming the record it was found on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub collection: Collection,
    /// Id (or `source->target` for edges) of the offending record.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.collection, self.subject, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntegrityReport {
    pub findings: Vec<Finding>,
}

impl IntegrityReport {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings that stop an export.
    #[must_use]
    pub fn blocking(&self, strict: bool) -> Vec<Finding> {
        self.findings
            .iter()
            .filter(|f| strict || f.severity == Severity::Error)
            .cloned()
            .collect()
    }

    /// # Errors
    ///
    /// Returns `CoreError::Integrity` carrying every blocking finding.
    pub fn into_result(self, strict: bool) -> Result<(), CoreError> {
        let findings = self.blocking(strict);
        if findings.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Integrity { findings })
        }
    }

    fn push(
        &mut self,
        severity: Severity,
        collection: Collection,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.findings.push(Finding {
            severity,
            collection,
            subject: subject.into(),
            message: message.into(),
        });
    }
}

impl Catalog {
    /// Check every cross-reference and per-record rule in the catalog.
    #[must_use]
    pub fn integrity(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();

        let stage_ids: HashSet<&str> = self.life_stages().iter().map(|s| s.id.as_str()).collect();
        let domain_ids: HashSet<&str> = self.domains().iter().map(|d| d.id.as_str()).collect();
        let node_ids: HashSet<&str> = self.graph().nodes.iter().map(|n| n.id.as_str()).collect();

        for stage in self.life_stages() {
            for domain in &stage.domains {
                if !domain_ids.contains(domain.as_str()) {
                    report.push(
                        Severity::Error,
                        Collection::LifeStages,
                        &stage.id,
                        format!("unknown domain '{domain}'"),
                    );
                }
            }
            for blurb in &stage.blurbs {
                if !self.blurbs().contains(blurb) {
                    report.push(
                        Severity::Error,
                        Collection::LifeStages,
                        &stage.id,
                        format!("unknown blurb '{blurb}'"),
                    );
                }
            }
        }

        for (stage_id, stage_blurbs) in self.blurbs().iter() {
            if !stage_ids.contains(stage_id) {
                report.push(
                    Severity::Error,
                    Collection::Blurbs,
                    stage_id,
                    "key is not a life stage id",
                );
            }
            for (domain_id, bundle) in stage_blurbs.domains.iter() {
                let subject = format!("{stage_id}.{domain_id}");
                if !domain_ids.contains(domain_id) {
                    report.push(
                        Severity::Error,
                        Collection::Blurbs,
                        &subject,
                        "key is not a domain id",
                    );
                }
                for question in &bundle.questions {
                    if !self.questions().contains(question) {
                        report.push(
                            Severity::Error,
                            Collection::Blurbs,
                            &subject,
                            format!("unknown question '{question}'"),
                        );
                    }
                }
                for project in &bundle.projects {
                    if project.author.is_empty() {
                        report.push(
                            Severity::Warning,
                            Collection::Blurbs,
                            &subject,
                            format!("project '{}' has no author", project.title),
                        );
                    }
                    if project.qr_code.is_empty() {
                        report.push(
                            Severity::Warning,
                            Collection::Blurbs,
                            &subject,
                            format!("project '{}' has no QR code", project.title),
                        );
                    }
                }
            }
        }

        for node in &self.graph().nodes {
            if !stage_ids.contains(node.stage.as_str()) {
                report.push(
                    Severity::Error,
                    Collection::Graph,
                    &node.id,
                    format!("unknown stage '{}'", node.stage),
                );
            }
            if !domain_ids.contains(node.domain.as_str()) {
                report.push(
                    Severity::Error,
                    Collection::Graph,
                    &node.id,
                    format!("unknown domain '{}'", node.domain),
                );
            }
        }
        for edge in &self.graph().edges {
            let subject = format!("{}->{}", edge.source, edge.target);
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    report.push(
                        Severity::Error,
                        Collection::Graph,
                        &subject,
                        format!("dangling endpoint '{endpoint}'"),
                    );
                }
            }
        }

        for (id, question) in self.questions().iter() {
            if question.choices.is_empty() {
                report.push(Severity::Error, Collection::Questions, id, "no choices");
                continue;
            }
            let distinct: HashSet<&str> = question.choices.iter().map(String::as_str).collect();
            if distinct.len() != question.choices.len() {
                report.push(
                    Severity::Error,
                    Collection::Questions,
                    id,
                    "duplicate choices",
                );
            }
            if !question.answer_is_a_choice() {
                report.push(
                    Severity::Error,
                    Collection::Questions,
                    id,
                    format!("answer '{}' is not one of the choices", question.answer),
                );
            }
        }

        for domain in self.domains() {
            for question in &domain.question_ids {
                if !self.questions().contains(question) {
                    report.push(
                        Severity::Warning,
                        Collection::Domains,
                        &domain.id,
                        format!("questionId '{question}' does not exist"),
                    );
                }
            }
        }

        report
    }
}
