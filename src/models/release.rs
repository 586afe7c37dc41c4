//! Release and release asset records

use serde::Serialize;

use crate::hydrate::{Document, Hydrate, HydrationResult, Timestamp, symbols};
use crate::models::user::SimpleUser;

symbols! {
    #[derive(Default)]
    pub enum AssetState {
        #[default]
        Uploaded => "uploaded",
        Open => "open",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReleaseAsset {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub browser_download_url: String,
    pub name: String,
    pub label: Option<String>,
    pub state: AssetState,
    pub content_type: String,
    pub size: i64,
    pub download_count: i64,
    pub uploader: Option<SimpleUser>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Hydrate for ReleaseAsset {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            browser_download_url: doc.string_or("browser_download_url", ""),
            name: doc.string_or("name", ""),
            label: doc.string("label"),
            state: doc.symbol_or("state", AssetState::Uploaded)?,
            content_type: doc.string_or("content_type", "application/octet-stream"),
            size: doc.long("size", 0),
            download_count: doc.long("download_count", 0),
            uploader: doc.optional_nested("uploader")?,
            created_at: doc.timestamp("created_at"),
            updated_at: doc.timestamp("updated_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Release {
    pub id: i64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub assets_url: String,
    pub upload_url: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
    pub tag_name: String,
    pub target_commitish: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub author: SimpleUser,
    pub assets: Vec<ReleaseAsset>,
    pub created_at: Timestamp,
    /// Unset for drafts.
    pub published_at: Timestamp,
}

impl Release {
    /// Display name, falling back to the tag.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.tag_name)
    }
}

impl Hydrate for Release {
    fn hydrate(doc: &Document<'_>) -> HydrationResult<Self> {
        Ok(Self {
            id: doc.long("id", 0),
            node_id: doc.string_or("node_id", ""),
            url: doc.string_or("url", ""),
            html_url: doc.string_or("html_url", ""),
            assets_url: doc.string_or("assets_url", ""),
            upload_url: doc.string_or("upload_url", ""),
            tarball_url: doc.string("tarball_url"),
            zipball_url: doc.string("zipball_url"),
            tag_name: doc.string_or("tag_name", ""),
            target_commitish: doc.string_or("target_commitish", ""),
            name: doc.string("name"),
            body: doc.string("body"),
            draft: doc.boolean("draft"),
            prerelease: doc.boolean("prerelease"),
            author: doc.nested("author")?,
            assets: doc.records("assets")?,
            created_at: doc.timestamp("created_at"),
            published_at: doc.timestamp("published_at"),
        })
    }
}
