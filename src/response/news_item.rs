use crate::enums::FeedType;
use crate::time::{self, ServerTime};
use crate::types::AppId;
use chrono::serde::ts_seconds;
use lazy_regex::regex;
use serde::{Deserialize, Serialize};

const SHORT_DESCRIPTION_LENGTH: usize = 100;

/// A news item for an app.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewsItem {
    /// The unique ID of the news item.
    pub gid: String,
    pub title: String,
    pub url: String,
    /// Whether the URL points outside of Steam.
    pub is_external_url: bool,
    pub author: String,
    /// The contents of the item, which may contain HTML or BBCode.
    pub contents: String,
    pub feedlabel: String,
    /// When the item was published.
    #[serde(with = "ts_seconds")]
    pub date: ServerTime,
    pub feedname: String,
    pub feed_type: FeedType,
    pub appid: AppId,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NewsItem {
    /// The contents with every tag removed. Entities are left as-is.
    pub fn plain_text_contents(&self) -> String {
        regex!(r"<[^>]+?>")
            .replace_all(&self.contents, "")
            .into_owned()
    }

    /// The first 100 characters of the plain text contents, followed by "..." if anything
    /// was cut off.
    pub fn short_description(&self) -> String {
        let plain_text = self.plain_text_contents();
        let mut chars = plain_text.chars();
        let mut description = chars
            .by_ref()
            .take(SHORT_DESCRIPTION_LENGTH)
            .collect::<String>();

        if chars.next().is_some() {
            description.push_str("...");
        }

        description
    }

    /// How long ago the item was published, e.g. "2 days ago".
    pub fn published_ago(&self) -> String {
        self.published_ago_at(time::get_server_time_now())
    }

    /// [`NewsItem::published_ago`] relative to `now`.
    pub fn published_ago_at(&self, now: ServerTime) -> String {
        time::format_relative(self.date, now)
    }

    pub fn has_tags(&self) -> bool {
        self.tags.as_ref().is_some_and(|tags| !tags.is_empty())
    }
}
