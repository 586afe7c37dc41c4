//! GitHub Actions records: workflows, runs, jobs and artifacts

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::repository::Repository;
use crate::models::user::SimpleUser;

symbols! {
    #[derive(Default)]
    pub enum WorkflowState {
        #[default]
        Active => "active",
        Deleted => "deleted",
        DisabledFork => "disabled_fork",
        DisabledInactivity => "disabled_inactivity",
        DisabledManually => "disabled_manually",
    }
}

symbols! {
    /// Lifecycle of a run, job, step or check run.
    #[derive(Default)]
    pub enum RunStatus {
        #[default]
        Queued => "queued",
        InProgress => "in_progress",
        Completed => "completed",
        Waiting => "waiting",
        Requested => "requested",
        Pending => "pending",
    }
}

symbols! {
    /// Outcome of a completed run, job, step or check run.
    pub enum Conclusion {
        Success => "success",
        Failure => "failure",
        Neutral => "neutral",
        Cancelled => "cancelled",
        Skipped => "skipped",
        TimedOut => "timed_out",
        ActionRequired => "action_required",
        Stale => "stale",
        StartupFailure => "startup_failure",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workflow {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub path: String,
    pub state: WorkflowState,
    pub url: String,
    pub html_url: String,
    pub badge_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for Workflow {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            name: doc.string_or("name", ""),
            path: doc.string_or("path", ""),
            state: doc.symbol_or("state", WorkflowState::Active)?,
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            badge_url: doc.string_or("badge_url", ""),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowList {
    pub total_count: i64,
    pub workflows: Vec<Workflow>,
}

impl Hydrate for WorkflowList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            workflows: doc.records("workflows")?,
        })
    }
}

/// Author or committer inside a run's `head_commit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl Hydrate for CommitIdentity {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            name: doc.string_or("name", ""),
            email: doc.string_or("email", ""),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadCommit {
    pub id: String,
    pub tree_id: String,
    pub message: String,
    pub timestamp: Timestamp,
    pub author: CommitIdentity,
    pub committer: CommitIdentity,
}

impl Hydrate for HeadCommit {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.string_or("id", ""),
            tree_id: doc.string_or("tree_id", ""),
            message: doc.string_or("message", ""),
            timestamp: doc.timestamp("timestamp"),
            author: doc.nested("author")?,
            committer: doc.nested("committer")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowRun {
    pub id: i64,
    pub name: Option<String>,
    pub node_id: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub path: String,
    pub display_title: String,
    pub run_number: i64,
    pub run_attempt: i64,
    pub event: String,
    pub status: Option<RunStatus>,
    pub conclusion: Option<Conclusion>,
    pub workflow_id: i64,
    pub check_suite_id: i64,
    pub url: String,
    pub html_url: String,
    pub jobs_url: String,
    pub logs_url: String,
    pub artifacts_url: String,
    pub actor: SimpleUser,
    pub triggering_actor: SimpleUser,
    pub head_commit: HeadCommit,
    pub repository: Repository,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub run_started_at: Timestamp,
}

impl WorkflowRun {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == Some(RunStatus::Completed)
    }
}

impl Hydrate for WorkflowRun {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            name: doc.string("name"),
            node_id: doc.string_or("node_id", ""),
            head_branch: doc.string("head_branch"),
            head_sha: doc.string_or("head_sha", ""),
            path: doc.string_or("path", ""),
            display_title: doc.string_or("display_title", ""),
            run_number: doc.long("run_number", 0),
            run_attempt: doc.long("run_attempt", 1),
            event: doc.string_or("event", ""),
            status: doc.symbol("status")?,
            conclusion: doc.symbol("conclusion")?,
            workflow_id: doc.long("workflow_id", 0),
            check_suite_id: doc.long("check_suite_id", 0),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            jobs_url: doc.string_or("jobs_url", ""),
            logs_url: doc.string_or("logs_url", ""),
            artifacts_url: doc.string_or("artifacts_url", ""),
            actor: doc.nested("actor")?,
            triggering_actor: doc.nested("triggering_actor")?,
            head_commit: doc.nested("head_commit")?,
            repository: doc.nested("repository")?,
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
            run_started_at: doc.timestamp("run_started_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowRunList {
    pub total_count: i64,
    pub workflow_runs: Vec<WorkflowRun>,
}

impl Hydrate for WorkflowRunList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            workflow_runs: doc.records("workflow_runs")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobStep {
    pub name: String,
    pub number: i64,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

impl Hydrate for JobStep {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            name: doc.string_or("name", ""),
            number: doc.long("number", 0),
            status: doc.symbol_or("status", RunStatus::Queued)?,
            conclusion: doc.symbol("conclusion")?,
            started_at: doc.timestamp("started_at"),
            completed_at: doc.timestamp("completed_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub run_id: i64,
    pub run_url: String,
    pub run_attempt: i64,
    pub node_id: String,
    pub head_sha: String,
    pub head_branch: Option<String>,
    pub url: String,
    pub html_url: Option<String>,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub name: String,
    pub workflow_name: Option<String>,
    pub steps: Vec<JobStep>,
    pub labels: Vec<String>,
    /// Unassigned until a runner picks the job up.
    pub runner_id: Option<i64>,
    pub runner_name: Option<String>,
    pub runner_group_id: Option<i64>,
    pub runner_group_name: Option<String>,
    pub created_at: Timestamp,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

impl Hydrate for Job {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            run_id: doc.long("run_id", 0),
            run_url: doc.string_or("run_url", ""),
            run_attempt: doc.long("run_attempt", 1),
            node_id: doc.string_or("node_id", ""),
            head_sha: doc.string_or("head_sha", ""),
            head_branch: doc.string("head_branch"),
            url: doc.string_or("url", ""),
            html_url: doc.string("html_url"),
            status: doc.symbol_or("status", RunStatus::Queued)?,
            conclusion: doc.symbol("conclusion")?,
            name: doc.string_or("name", ""),
            workflow_name: doc.string("workflow_name"),
            steps: doc.records("steps")?,
            labels: doc.list("labels"),
            runner_id: doc.optional_long("runner_id"),
            runner_name: doc.string("runner_name"),
            runner_group_id: doc.optional_long("runner_group_id"),
            runner_group_name: doc.string("runner_group_name"),
            created_at: doc.timestamp("created_at"),
            started_at: doc.timestamp("started_at"),
            completed_at: doc.timestamp("completed_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobList {
    pub total_count: i64,
    pub jobs: Vec<Job>,
}

impl Hydrate for JobList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            jobs: doc.records("jobs")?,
        })
    }
}

/// The run that produced an artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactWorkflowRun {
    pub id: i64,
    pub repository_id: i64,
    pub head_repository_id: i64,
    pub head_branch: String,
    pub head_sha: String,
}

impl Hydrate for ArtifactWorkflowRun {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            repository_id: doc.long("repository_id", 0),
            head_repository_id: doc.long("head_repository_id", 0),
            head_branch: doc.string_or("head_branch", ""),
            head_sha: doc.string_or("head_sha", ""),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub size_in_bytes: i64,
    pub url: String,
    pub archive_download_url: String,
    pub expired: bool,
    pub digest: Option<String>,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub updated_at: Timestamp,
    pub workflow_run: ArtifactWorkflowRun,
}

impl Hydrate for Artifact {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            name: doc.string_or("name", ""),
            size_in_bytes: doc.long("size_in_bytes", 0),
            url: doc.string_or("url", ""),
            archive_download_url: doc.string_or("archive_download_url", ""),
            expired: doc.boolean("expired"),
            digest: doc.string("digest"),
            created_at: doc.timestamp("created_at"),
            expires_at: doc.timestamp("expires_at"),
            updated_at: doc.timestamp("updated_at"),
            workflow_run: doc.nested("workflow_run")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactList {
    pub total_count: i64,
    pub artifacts: Vec<Artifact>,
}

impl Hydrate for ArtifactList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            artifacts: doc.records("artifacts")?,
        })
    }
}
