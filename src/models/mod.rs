//! Typed GitHub REST records
//!
//! Every record implements [`Hydrate`](crate::hydrate::Hydrate) and
//! serializes back to the GitHub wire shape.

pub mod actions;
pub mod apps;
pub mod checks;
pub mod commit;
pub mod issue;
pub mod pull_request;
pub mod rate_limit;
pub mod release;
pub mod repository;
pub mod search;
pub mod user;

pub use actions::{
    Artifact, ArtifactList, ArtifactWorkflowRun, CommitIdentity, Conclusion, HeadCommit, Job,
    JobList, JobStep, RunStatus, Workflow, WorkflowList, WorkflowRun, WorkflowRunList,
    WorkflowState,
};
pub use apps::{
    App, AppPermissions, Installation, InstallationList, InstallationToken, PERMISSION_FIELDS,
    PermissionField, PermissionLevel, RepositorySelection,
};
pub use checks::{CheckRun, CheckRunList, CheckRunOutput, CheckSuiteRef};
pub use commit::{
    CombinedStatus, Commit, CommitParent, CommitStats, CommitStatus, GitActor, GitCommit,
    GitObject, StatusState, Verification,
};
pub use issue::{
    AuthorAssociation, Issue, IssueComment, IssuePullRequestLinks, IssueState, Label, LockReason,
    Milestone, StateReason,
};
pub use pull_request::{
    DiffEntry, FileStatus, MergeResult, PullRequest, PullRequestBranch, Review, ReviewState,
};
pub use rate_limit::{RateLimit, RateLimitResource, RateLimitResources};
pub use release::{AssetState, Release, ReleaseAsset};
pub use repository::{Branch, CommitRef, License, Repository, RepositoryPermissions, Topics, Visibility};
pub use search::SearchResults;
pub use user::{AccountType, SimpleUser, User};
