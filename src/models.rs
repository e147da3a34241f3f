//! Typed ingestion boundary for the content provider's post payload.
//!
//! The provider returns a loosely shaped JSON object; every non-identifying
//! field carries a serde default so missing data becomes an empty value here,
//! at the boundary, instead of surfacing as holes in the rendered page.

use serde::{Deserialize, Serialize};

use crate::content::{self, BodySegment};

/// Author of a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Creator {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_image_url: String,
}

/// One image attached to a post. Index 0 doubles as the page header image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub position: u32,
}

/// Page-level styling data associated with a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageStyle {
    #[serde(default)]
    pub color_palette: Vec<String>,
}

/// A post as served by the content provider.
///
/// `body`, when present, begins with `title` as a literal prefix; stripping
/// is handled in [`content::extract_paragraphs`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub published_time: i64,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default)]
    pub page: PageStyle,
    #[serde(default)]
    pub images: Vec<PostImage>,
}

/// Display-ready post content, derived once after fetch and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PostContent {
    pub title: String,
    pub author: Creator,
    pub published_time: i64,
    pub gradient: String,
    pub images: Vec<PostImage>,
    pub body: Vec<BodySegment>,
}

impl PostContent {
    pub fn from_post(post: Post) -> Self {
        let paragraphs = content::extract_paragraphs(post.body.as_deref(), &post.title);
        let body = content::compose_body(&paragraphs, post.images.len());
        let gradient = content::palette_gradient(&post.page.color_palette);

        Self {
            title: post.title,
            author: post.creator,
            published_time: post.published_time,
            gradient,
            images: post.images,
            body,
        }
    }

    /// The page header image, when the post has any images at all.
    pub fn header_image(&self) -> Option<&PostImage> {
        self.images.first()
    }
}
