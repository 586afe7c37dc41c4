//! User and organization records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};

symbols! {
    /// Account kind reported in the `type` field.
    #[derive(Default)]
    pub enum AccountType {
        #[default]
        User => "User",
        Organization => "Organization",
        Bot => "Bot",
        Mannequin => "Mannequin",
        Enterprise => "Enterprise",
    }
}

/// The compact user object embedded in most responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimpleUser {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub site_admin: bool,
}

impl Hydrate for SimpleUser {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            login: doc.string_or("login", ""),
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            avatar_url: doc.string_or("avatar_url", ""),
            gravatar_id: doc.string("gravatar_id"),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            name: doc.string("name"),
            email: doc.string("email"),
            kind: doc.symbol_or("type", AccountType::User)?,
            site_admin: doc.boolean("site_admin"),
        })
    }
}

/// Full profile returned by `/user` and `/users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub site_admin: bool,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: i64,
    pub public_gists: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for User {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            login: doc.string_or("login", ""),
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            avatar_url: doc.string_or("avatar_url", ""),
            html_url: doc.string_or("html_url", ""),
            kind: doc.symbol_or("type", AccountType::User)?,
            site_admin: doc.boolean("site_admin"),
            name: doc.string("name"),
            company: doc.string("company"),
            blog: doc.string("blog"),
            location: doc.string("location"),
            email: doc.string("email"),
            hireable: doc.optional_boolean("hireable"),
            bio: doc.string("bio"),
            twitter_username: doc.string("twitter_username"),
            public_repos: doc.long("public_repos", 0),
            public_gists: doc.long("public_gists", 0),
            followers: doc.long("followers", 0),
            following: doc.long("following", 0),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}
