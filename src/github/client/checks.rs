//! Checks API methods

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::pagination::ListOptions;
use crate::github::util::{QueryPairs, push_opt, ref_segments, repo_path};
use crate::hydrate::symbols;
use crate::models::{CheckRun, CheckRunList, RunStatus};

symbols! {
    #[derive(Default)]
    pub enum CheckRunFilter {
        /// Most recent run per check name
        #[default]
        Latest => "latest",
        All => "all",
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListCheckRunsOptions {
    pub check_name: Option<String>,
    pub status: Option<RunStatus>,
    pub filter: Option<CheckRunFilter>,
    pub app_id: Option<i64>,
    pub list: ListOptions,
}

impl ListCheckRunsOptions {
    fn query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "check_name", self.check_name.as_deref());
        push_opt(&mut pairs, "status", self.status);
        push_opt(&mut pairs, "filter", self.filter);
        push_opt(&mut pairs, "app_id", self.app_id);
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct ChecksManager {
    client: GitHubClient,
    base: String,
}

impl GitHubClient {
    #[must_use]
    pub fn checks(&self, owner: &str, repo: &str) -> ChecksManager {
        ChecksManager {
            client: self.clone(),
            base: repo_path(owner, repo),
        }
    }
}

impl ChecksManager {
    /// Check runs for a SHA, branch or tag.
    pub fn list_for_ref(&self, reference: &str, options: &ListCheckRunsOptions) -> ApiCall<CheckRunList> {
        self.client
            .get(format!("{}/commits/{}/check-runs", self.base, ref_segments(reference)))
            .query(options.query())
            .list_options(&options.list)
    }

    pub fn get(&self, check_run_id: i64) -> ApiCall<CheckRun> {
        self.client
            .get(format!("{}/check-runs/{check_run_id}", self.base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::tests::{API, mock_client};
    use crate::github::http::HttpMethod;
    use crate::models::Conclusion;
    use serde_json::json;

    #[tokio::test]
    async fn list_for_ref_with_filters() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/commits/main/check-runs?check_name=lint&status=completed&filter=all"),
            200,
            json!({
                "total_count": 1,
                "check_runs": [{"id": 4, "name": "lint", "status": "completed", "conclusion": "failure"}]
            }),
        );
        let options = ListCheckRunsOptions {
            check_name: Some("lint".into()),
            status: Some(RunStatus::Completed),
            filter: Some(CheckRunFilter::All),
            ..Default::default()
        };
        let runs = client.checks("o", "r").list_for_ref("main", &options).send().await.unwrap();
        assert_eq!(runs.total_count, 1);
        assert_eq!(runs.check_runs[0].conclusion, Some(Conclusion::Failure));
    }

    #[tokio::test]
    async fn get_check_run() {
        let (client, transport) = mock_client();
        transport.push_json(
            HttpMethod::Get,
            format!("{API}/repos/o/r/check-runs/4"),
            200,
            json!({"id": 4, "output": {"title": "Lint", "annotations_count": 2}}),
        );
        let run = client.checks("o", "r").get(4).send().await.unwrap();
        assert_eq!(run.output.annotations_count, 2);
        assert_eq!(run.status, RunStatus::Queued);
    }
}
