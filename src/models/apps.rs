//! GitHub App, installation and permission records
//!
//! App permissions are mapped through [`PERMISSION_FIELDS`], a static table
//! of `(json key, getter, setter)` entries. Hydration and serialization both
//! walk the table, so adding a permission is a one-line change.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::hydrate::{Document, Hydrate, HydrationResult, Symbol, Timestamp, symbols};
use crate::models::user::SimpleUser;

symbols! {
    pub enum PermissionLevel {
        Read => "read",
        Write => "write",
        Admin => "admin",
    }
}

symbols! {
    #[derive(Default)]
    pub enum RepositorySelection {
        #[default]
        All => "all",
        Selected => "selected",
    }
}

/// Permissions granted to an app or installation token.
///
/// `None` means the permission was not granted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppPermissions {
    pub actions: Option<PermissionLevel>,
    pub administration: Option<PermissionLevel>,
    pub checks: Option<PermissionLevel>,
    pub codespaces: Option<PermissionLevel>,
    pub contents: Option<PermissionLevel>,
    pub dependabot_secrets: Option<PermissionLevel>,
    pub deployments: Option<PermissionLevel>,
    pub environments: Option<PermissionLevel>,
    pub issues: Option<PermissionLevel>,
    pub metadata: Option<PermissionLevel>,
    pub packages: Option<PermissionLevel>,
    pub pages: Option<PermissionLevel>,
    pub pull_requests: Option<PermissionLevel>,
    pub repository_hooks: Option<PermissionLevel>,
    pub repository_projects: Option<PermissionLevel>,
    pub secret_scanning_alerts: Option<PermissionLevel>,
    pub secrets: Option<PermissionLevel>,
    pub security_events: Option<PermissionLevel>,
    pub single_file: Option<PermissionLevel>,
    pub statuses: Option<PermissionLevel>,
    pub vulnerability_alerts: Option<PermissionLevel>,
    pub workflows: Option<PermissionLevel>,
    pub members: Option<PermissionLevel>,
    pub organization_administration: Option<PermissionLevel>,
    pub organization_hooks: Option<PermissionLevel>,
    pub organization_plan: Option<PermissionLevel>,
    pub organization_projects: Option<PermissionLevel>,
    pub organization_packages: Option<PermissionLevel>,
    pub organization_secrets: Option<PermissionLevel>,
    pub organization_self_hosted_runners: Option<PermissionLevel>,
    pub organization_user_blocking: Option<PermissionLevel>,
    pub email_addresses: Option<PermissionLevel>,
    pub followers: Option<PermissionLevel>,
    pub gpg_keys: Option<PermissionLevel>,
}

type Getter = fn(&AppPermissions) -> Option<PermissionLevel>;
type Setter = fn(&mut AppPermissions, PermissionLevel);

/// A single row of the permission table.
pub struct PermissionField {
    pub key: &'static str,
    pub get: Getter,
    pub set: Setter,
}

macro_rules! permission_fields {
    ($($field:ident),+ $(,)?) => {
        &[
            $(
                PermissionField {
                    key: stringify!($field),
                    get: |p| p.$field,
                    set: |p, level| p.$field = Some(level),
                },
            )+
        ]
    };
}

/// JSON key to field mapping for [`AppPermissions`].
pub const PERMISSION_FIELDS: &[PermissionField] = permission_fields![
    actions,
    administration,
    checks,
    codespaces,
    contents,
    dependabot_secrets,
    deployments,
    environments,
    issues,
    metadata,
    packages,
    pages,
    pull_requests,
    repository_hooks,
    repository_projects,
    secret_scanning_alerts,
    secrets,
    security_events,
    single_file,
    statuses,
    vulnerability_alerts,
    workflows,
    members,
    organization_administration,
    organization_hooks,
    organization_plan,
    organization_projects,
    organization_packages,
    organization_secrets,
    organization_self_hosted_runners,
    organization_user_blocking,
    email_addresses,
    followers,
    gpg_keys,
];

impl AppPermissions {
    /// Look up a permission by its JSON key.
    #[must_use]
    pub fn level(&self, key: &str) -> Option<PermissionLevel> {
        PERMISSION_FIELDS
            .iter()
            .find(|field| field.key == key)
            .and_then(|field| (field.get)(self))
    }

    /// Granted permissions as `(key, level)` pairs in table order.
    pub fn granted(&self) -> impl Iterator<Item = (&'static str, PermissionLevel)> + '_ {
        PERMISSION_FIELDS
            .iter()
            .filter_map(move |field| (field.get)(self).map(|level| (field.key, level)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.granted().next().is_none()
    }
}

impl Hydrate for AppPermissions {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        let mut permissions = Self::default();
        for field in PERMISSION_FIELDS {
            if let Some(level) = doc.symbol::<PermissionLevel>(field.key)? {
                (field.set)(&mut permissions, level);
            }
        }
        // Keys outside the table (new GitHub permissions) are ignored.
        Ok(permissions)
    }
}

impl Serialize for AppPermissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, level) in self.granted() {
            map.serialize_entry(key, level.as_str())?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct App {
    pub id: i64,
    pub slug: Option<String>,
    pub node_id: String,
    pub owner: Option<SimpleUser>,
    pub name: String,
    pub description: Option<String>,
    pub external_url: String,
    pub html_url: String,
    pub permissions: AppPermissions,
    pub events: Vec<String>,
    pub installations_count: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for App {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            slug: doc.string("slug"),
            node_id: doc.string_or("node_id", ""),
            owner: doc.optional_nested("owner")?,
            name: doc.string_or("name", ""),
            description: doc.string("description"),
            external_url: doc.string_or("external_url", ""),
            html_url: doc.string_or("html_url", ""),
            permissions: doc.nested("permissions")?,
            events: doc.list("events"),
            installations_count: doc.optional_long("installations_count"),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Installation {
    pub id: i64,
    pub account: SimpleUser,
    pub repository_selection: RepositorySelection,
    pub access_tokens_url: String,
    pub repositories_url: String,
    pub html_url: String,
    pub app_id: i64,
    pub app_slug: String,
    pub target_id: i64,
    pub target_type: String,
    pub permissions: AppPermissions,
    pub events: Vec<String>,
    pub single_file_name: Option<String>,
    pub suspended_by: Option<SimpleUser>,
    pub suspended_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Installation {
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended_at.is_present()
    }
}

impl Hydrate for Installation {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            account: doc.nested("account")?,
            repository_selection: doc
                .symbol_or("repository_selection", RepositorySelection::All)?,
            access_tokens_url: doc.string_or("access_tokens_url", ""),
            repositories_url: doc.string_or("repositories_url", ""),
            html_url: doc.string_or("html_url", ""),
            app_id: doc.long("app_id", 0),
            app_slug: doc.string_or("app_slug", ""),
            target_id: doc.long("target_id", 0),
            target_type: doc.string_or("target_type", ""),
            permissions: doc.nested("permissions")?,
            events: doc.list("events"),
            single_file_name: doc.string("single_file_name"),
            suspended_by: doc.optional_nested("suspended_by")?,
            suspended_at: doc.timestamp("suspended_at"),
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

/// Envelope returned by `/user/installations`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct InstallationList {
    pub total_count: i64,
    pub installations: Vec<Installation>,
}

impl Hydrate for InstallationList {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            total_count: doc.long("total_count", 0),
            installations: doc.records("installations")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct InstallationToken {
    pub token: String,
    pub expires_at: Timestamp,
    pub permissions: AppPermissions,
    pub repository_selection: RepositorySelection,
}

impl Hydrate for InstallationToken {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            token: doc.string_or("token", ""),
            expires_at: doc.timestamp("expires_at"),
            permissions: doc.nested("permissions")?,
            repository_selection: doc
                .symbol_or("repository_selection", RepositorySelection::All)?,
        })
    }
}
