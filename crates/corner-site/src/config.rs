// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host-supplied site settings.

use crate::comments::CommentSyncPolicy;
use crate::pagination::PageSize;
use serde::{Deserialize, Serialize};

/// Settings the host passes at mount time. Every field has a default, so an
/// empty object (or none at all) yields the stock blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Suffix of the document title.
    pub app_name: String,
    /// Header logo text.
    pub brand: String,
    /// Base URL of the posts API (no trailing slash needed).
    pub api_base_url: String,
    /// Page size the listing starts with.
    pub default_page_size: PageSize,
    /// How server comments combine with locally submitted ones.
    pub comment_sync: CommentSyncPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_name: "App".into(),
            brand: "The Curious Corner".into(),
            api_base_url: "https://dummyjson.com".into(),
            default_page_size: PageSize::Six,
            comment_sync: CommentSyncPolicy::ReplaceWithServer,
        }
    }
}
