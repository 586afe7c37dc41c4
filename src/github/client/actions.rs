//! GitHub Actions API methods

use serde::Serialize;
use serde_json::{Map, Value};

use super::GitHubClient;
use crate::github::call::{self, ApiCall};
use crate::github::error::GitHubError;
use crate::github::http::HttpMethod;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_opt, repo_path, segment};
use crate::models::{
    Artifact, ArtifactList, Job, JobList, RunStatus, Workflow, WorkflowList, WorkflowRun,
    WorkflowRunList,
};

/// A workflow addressed by numeric id or by file name (`ci.yml`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowId {
    Id(i64),
    File(String),
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::File(file) => f.write_str(&segment(file)),
        }
    }
}

impl From<i64> for WorkflowId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for WorkflowId {
    fn from(file: &str) -> Self {
        Self::File(file.to_string())
    }
}

impl From<String> for WorkflowId {
    fn from(file: String) -> Self {
        Self::File(file)
    }
}

/// Body of a `workflow_dispatch` trigger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchWorkflow {
    /// Branch or tag to run the workflow on
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub inputs: Map<String, Value>,
}

impl DispatchWorkflow {
    pub fn new(ref_name: impl Into<String>) -> Self {
        Self {
            ref_name: ref_name.into(),
            inputs: Map::new(),
        }
    }

    #[must_use]
    pub fn input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }
}

/// Filters for listing workflow runs.
#[derive(Debug, Clone, Default)]
pub struct ListWorkflowRunsOptions {
    /// Only runs of this workflow
    pub workflow: Option<WorkflowId>,
    pub actor: Option<String>,
    pub branch: Option<String>,
    /// Triggering event, e.g. `push` or `pull_request`
    pub event: Option<String>,
    pub status: Option<RunStatus>,
    pub head_sha: Option<String>,
    pub list: ListOptions,
}

impl ListWorkflowRunsOptions {
    fn query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "actor", self.actor.as_deref());
        push_opt(&mut pairs, "branch", self.branch.as_deref());
        push_opt(&mut pairs, "event", self.event.as_deref());
        push_opt(&mut pairs, "status", self.status);
        push_opt(&mut pairs, "head_sha", self.head_sha.as_deref());
        pairs
    }
}

/// Endpoints under `/repos/{owner}/{repo}/actions`.
#[derive(Debug, Clone)]
pub struct ActionsManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn actions(&self, owner: &str, repo: &str) -> ActionsManager {
        ActionsManager {
            client: self.clone(),
            base: format!("{}/actions", repo_path(owner, repo)),
        }
    }
}

impl ActionsManager {
    pub fn list_workflows(&self, options: &ListOptions) -> ApiCall<WorkflowList> {
        self.client
            .get(format!("{}/workflows", self.base))
            .list_options(options)
    }

    pub fn get_workflow(&self, workflow: impl Into<WorkflowId>) -> ApiCall<Workflow> {
        self.client
            .get(format!("{}/workflows/{}", self.base, workflow.into()))
    }

    /// Trigger a `workflow_dispatch` event.
    pub fn dispatch_workflow(
        &self,
        workflow: impl Into<WorkflowId>,
        dispatch: &DispatchWorkflow,
    ) -> ApiCall<()> {
        let call = self
            .client
            .send_empty(
                HttpMethod::Post,
                format!("{}/workflows/{}/dispatches", self.base, workflow.into()),
            )
            .body(dispatch);
        if dispatch.ref_name.is_empty() {
            return call.reject(GitHubError::InvalidInput(
                "workflow dispatch requires a ref".into(),
            ));
        }
        call
    }

    pub fn list_workflow_runs(&self, options: &ListWorkflowRunsOptions) -> ApiCall<WorkflowRunList> {
        let path = match &options.workflow {
            Some(workflow) => format!("{}/workflows/{workflow}/runs", self.base),
            None => format!("{}/runs", self.base),
        };
        self.client
            .get(path)
            .query(options.query())
            .list_options(&options.list)
    }

    pub fn get_workflow_run(&self, run_id: i64) -> ApiCall<WorkflowRun> {
        self.client.get(format!("{}/runs/{run_id}", self.base))
    }

    pub fn cancel_workflow_run(&self, run_id: i64) -> ApiCall<()> {
        self.client
            .send_empty(HttpMethod::Post, format!("{}/runs/{run_id}/cancel", self.base))
    }

    pub fn rerun_workflow_run(&self, run_id: i64) -> ApiCall<()> {
        self.client
            .send_empty(HttpMethod::Post, format!("{}/runs/{run_id}/rerun", self.base))
    }

    pub fn list_jobs(&self, run_id: i64, options: &ListOptions) -> ApiCall<JobList> {
        self.client
            .get(format!("{}/runs/{run_id}/jobs", self.base))
            .list_options(options)
    }

    pub fn get_job(&self, job_id: i64) -> ApiCall<Job> {
        self.client.get(format!("{}/jobs/{job_id}", self.base))
    }

    /// Plain-text job log. The API answers with a redirect the transport
    /// follows.
    pub fn job_logs(&self, job_id: i64) -> ApiCall<String> {
        self.client.call(
            HttpMethod::Get,
            format!("{}/jobs/{job_id}/logs", self.base),
            call::text,
        )
    }

    pub fn list_artifacts(&self, options: &ListOptions) -> ApiCall<ArtifactList> {
        self.client
            .get(format!("{}/artifacts", self.base))
            .list_options(options)
    }

    pub fn get_artifact(&self, artifact_id: i64) -> ApiCall<Artifact> {
        self.client
            .get(format!("{}/artifacts/{artifact_id}", self.base))
    }

    pub fn delete_artifact(&self, artifact_id: i64) -> ApiCall<()> {
        self.client.send_empty(
            HttpMethod::Delete,
            format!("{}/artifacts/{artifact_id}", self.base),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::tests::{API, mock_client};
    use crate::github::error::ErrorKind;
    use crate::github::http::HttpResponse;
    use crate::models::{Conclusion, WorkflowState};
    use serde_json::json;

    const BASE: &str = "https://api.github.com/repos/o/r/actions";

    #[test]
    fn workflow_ids_render_as_path_segments() {
        assert_eq!(WorkflowId::from(161_335_i64).to_string(), "161335");
        assert_eq!(WorkflowId::from("ci.yml").to_string(), "ci.yml");
        assert_eq!(WorkflowId::from("my workflow.yml").to_string(), "my%20workflow.yml");
    }

    #[tokio::test]
    async fn workflows() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/workflows"),
            200,
            json!({"total_count": 1, "workflows": [{"id": 161335, "name": "CI", "state": "active"}]}),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/workflows/ci.yml"),
            200,
            json!({"id": 161335, "state": "disabled_manually"}),
        );
        let actions = client.actions("o", "r");
        let list = actions.list_workflows(&ListOptions::default()).send().await.unwrap();
        assert_eq!(list.total_count, 1);
        assert_eq!(list.workflows[0].name, "CI");
        let workflow = actions.get_workflow("ci.yml").send().await.unwrap();
        assert_eq!(workflow.state, WorkflowState::DisabledManually);
    }

    #[tokio::test]
    async fn dispatch_with_inputs() {
        let (client, transport) = mock_client();
        transport.push_response(
            HttpMethod::Post,
            format!("{BASE}/workflows/161335/dispatches"),
            HttpResponse::empty(204),
        );
        let dispatch = DispatchWorkflow::new("main").input("dry_run", true);
        client
            .actions("o", "r")
            .dispatch_workflow(161_335_i64, &dispatch)
            .send()
            .await
            .unwrap();
        let request = transport.last_request().unwrap();
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({"ref": "main", "inputs": {"dry_run": true}}));
    }

    #[tokio::test]
    async fn dispatch_requires_ref() {
        let (client, _) = mock_client();
        let err = client
            .actions("o", "r")
            .dispatch_workflow("ci.yml", &DispatchWorkflow::default())
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn runs_scoped_to_workflow() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/workflows/ci.yml/runs?branch=main&status=completed&per_page=1"),
            200,
            json!({
                "total_count": 40,
                "workflow_runs": [{"id": 30433642, "status": "completed", "conclusion": "success"}]
            }),
        );
        let options = ListWorkflowRunsOptions {
            workflow: Some("ci.yml".into()),
            branch: Some("main".into()),
            status: Some(RunStatus::Completed),
            list: ListOptions::new().per_page(1),
            ..Default::default()
        };
        let runs = client.actions("o", "r").list_workflow_runs(&options).send().await.unwrap();
        assert_eq!(runs.total_count, 40);
        assert!(runs.workflow_runs[0].is_completed());
        assert_eq!(runs.workflow_runs[0].conclusion, Some(Conclusion::Success));
    }

    #[tokio::test]
    async fn run_lifecycle() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/runs/7"),
            200,
            json!({"id": 7, "status": "in_progress", "conclusion": null}),
        );
        transport.push_response(HttpMethod::Post, format!("{BASE}/runs/7/cancel"), HttpResponse::empty(202));
        transport.push_response(HttpMethod::Post, format!("{BASE}/runs/7/rerun"), HttpResponse::empty(201));

        let actions = client.actions("o", "r");
        let run = actions.get_workflow_run(7).send().await.unwrap();
        assert_eq!(run.status, Some(RunStatus::InProgress));
        assert_eq!(run.conclusion, None);
        assert_eq!(run.run_attempt, 1);
        actions.cancel_workflow_run(7).send().await.unwrap();
        actions.rerun_workflow_run(7).send().await.unwrap();
    }

    #[tokio::test]
    async fn run_with_unknown_status_fails_hydration() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/runs/8"),
            200,
            json!({"id": 8, "status": "bogus_value"}),
        );
        let err = client.actions("o", "r").get_workflow_run(8).send().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Hydration);
    }

    #[tokio::test]
    async fn jobs_and_logs() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/runs/7/jobs"),
            200,
            json!({"total_count": 1, "jobs": [{"id": 399444496, "steps": [{"name": "Set up job", "number": 1}]}]}),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/jobs/399444496"),
            200,
            json!({"id": 399444496, "runner_id": null}),
        );
        transport.push_response(
            HttpMethod::Get,
            format!("{BASE}/jobs/399444496/logs"),
            HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: b"2024-01-01T00:00:00Z Set up job\n".to_vec(),
            },
        );

        let actions = client.actions("o", "r");
        let jobs = actions.list_jobs(7, &ListOptions::default()).send().await.unwrap();
        assert_eq!(jobs.jobs[0].steps[0].number, 1);
        let job = actions.get_job(399444496).send().await.unwrap();
        assert_eq!(job.runner_id, None);
        let logs = actions.job_logs(399444496).send().await.unwrap();
        assert!(logs.ends_with("Set up job\n"));
    }

    #[tokio::test]
    async fn artifacts() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/artifacts?per_page=2"),
            200,
            json!({"total_count": 2, "artifacts": [{"id": 11, "size_in_bytes": 556}, {"id": 13}]}),
        );
        transport.push_json(HttpMethod::Get, format!("{BASE}/artifacts/11"), 200, json!({}));
        transport.push_response(
            HttpMethod::Delete,
            format!("{BASE}/artifacts/11"),
            HttpResponse::empty(204),
        );

        let actions = client.actions("o", "r");
        let list = actions
            .list_artifacts(&ListOptions::new().per_page(2))
            .send()
            .await
            .unwrap();
        assert_eq!(list.artifacts.len(), 2);
        assert_eq!(list.artifacts[0].size_in_bytes, 556);

        let artifact = actions.get_artifact(11).send().await.unwrap();
        assert_eq!(artifact.workflow_run.id, 0);
        actions.delete_artifact(11).send().await.unwrap();
        assert_eq!(transport.requests().len(), 3);
        assert!(transport.requests().iter().all(|r| r.url.starts_with(API)));
    }
}
