//! Users API methods

use super::GitHubClient;
use crate::github::call::ApiCall;
use crate::github::pagination::ListOptions;
use crate::github::util::segment;
use crate::models::{SimpleUser, User};

/// `/user` and `/users/{username}` endpoints.
#[derive(Debug, Clone)]
pub struct UsersManager {
    client: GitHubClient,
}

impl GitHubClient {
    #[must_use]
    pub fn users(&self) -> UsersManager {
        UsersManager {
            client: self.clone(),
        }
    }
}

impl UsersManager {
    /// The user the token belongs to
    pub fn authenticated(&self) -> ApiCall<User> {
        self.client.get("/user")
    }

    pub fn get(&self, username: &str) -> ApiCall<User> {
        self.client.get(format!("/users/{}", segment(username)))
    }

    pub fn list_followers(&self, username: &str, options: &ListOptions) -> ApiCall<Vec<SimpleUser>> {
        self.client
            .get_list(format!("/users/{}/followers", segment(username)))
            .list_options(options)
    }

    pub fn list_following(&self, username: &str, options: &ListOptions) -> ApiCall<Vec<SimpleUser>> {
        self.client
            .get_list(format!("/users/{}/following", segment(username)))
            .list_options(options)
    }
}
