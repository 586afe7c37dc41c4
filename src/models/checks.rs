//! Check run records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp};
use crate::models::actions::{Conclusion, RunStatus};
use crate::models::apps::App;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckRunOutput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub text: Option<String>,
    pub annotations_count: i64,
    pub annotations_url: String,
}

impl Hydrate for CheckRunOutput {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            title: doc.string("title"),
            summary: doc.string("summary"),
            text: doc.string("text"),
            annotations_count: doc.long("annotations_count", 0),
            annotations_url: doc.string_or("annotations_url", ""),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSuiteRef {
    pub id: i64,
}

impl Hydrate for CheckSuiteRef {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckRun {
    pub id: i64,
    pub node_id: String,
    pub head_sha: String,
    pub external_id: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub details_url: Option<String>,
    pub name: String,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub output: CheckRunOutput,
    pub check_suite: Option<CheckSuiteRef>,
    pub app: Option<App>,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

impl Hydrate for CheckRun {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            head_sha: doc.string_or("head_sha", ""),
            external_id: doc.string("external_id"),
            url: doc.string_or("url", ""),
            html_url: doc.string("html_url"),
            details_url: doc.string("details_url"),
            name: doc.string_or("name", ""),
            status: doc.symbol_or("status", RunStatus::Queued)?,
            conclusion: doc.symbol("conclusion")?,
            output: doc.nested("output")?,
            check_suite: doc.optional_nested("check_suite")?,
            app: doc.optional_nested("app")?,
            started_at: doc.timestamp("started_at"),
            completed_at: doc.timestamp("completed_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckRunList {
    pub total_count: i64,
    pub check_runs: Vec<CheckRun>,
}

impl Hydrate for CheckRunList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            check_runs: doc.records("check_runs")?,
        })
    }
}
