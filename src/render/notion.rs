//! Notion API wire format.
//!
//! Maps blocks onto Notion's block objects and builds the request body for
//! creating a database page. Nothing here performs network I/O; sending the
//! request, splitting children to fit per-request limits, and retrying are
//! left to the HTTP client.

use serde::Serialize;

use crate::error::Result;
use crate::model::{Block, Document, HeadingLevel, RichTextRun};
use crate::summary::VideoInfo;

use super::json::{serialize, JsonFormat};

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Value of the `Notion-Version` header the payloads are shaped for.
pub const NOTION_VERSION: &str = "2022-06-28";

/// A Notion block object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotionBlock {
    object: &'static str,
    #[serde(flatten)]
    body: NotionBlockBody,
}

impl NotionBlock {
    fn new(body: NotionBlockBody) -> Self {
        Self {
            object: "block",
            body,
        }
    }

    /// The Notion block type name (e.g. `heading_2`).
    pub fn block_type(&self) -> &'static str {
        match self.body {
            NotionBlockBody::Heading1 { .. } => "heading_1",
            NotionBlockBody::Heading2 { .. } => "heading_2",
            NotionBlockBody::Heading3 { .. } => "heading_3",
            NotionBlockBody::BulletedListItem { .. } => "bulleted_list_item",
            NotionBlockBody::Paragraph { .. } => "paragraph",
        }
    }

    /// The rich text items of the block.
    pub fn rich_text(&self) -> &[NotionRichText] {
        let content = match &self.body {
            NotionBlockBody::Heading1 { heading_1: c }
            | NotionBlockBody::Heading2 { heading_2: c }
            | NotionBlockBody::Heading3 { heading_3: c }
            | NotionBlockBody::BulletedListItem {
                bulleted_list_item: c,
            }
            | NotionBlockBody::Paragraph { paragraph: c } => c,
        };
        &content.rich_text
    }
}

impl From<&Block> for NotionBlock {
    fn from(block: &Block) -> Self {
        let body = match block {
            Block::Heading { level, text } => {
                let content = RichTextContent::from_runs(&[RichTextRun::plain(text.as_str())]);
                match level {
                    HeadingLevel::H1 => NotionBlockBody::Heading1 { heading_1: content },
                    HeadingLevel::H2 => NotionBlockBody::Heading2 { heading_2: content },
                    HeadingLevel::H3 => NotionBlockBody::Heading3 { heading_3: content },
                }
            }
            Block::BulletItem { runs } => NotionBlockBody::BulletedListItem {
                bulleted_list_item: RichTextContent::from_runs(runs),
            },
            Block::Paragraph { runs } => NotionBlockBody::Paragraph {
                paragraph: RichTextContent::from_runs(runs),
            },
        };
        NotionBlock::new(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
enum NotionBlockBody {
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextContent },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextContent },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextContent },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem {
        bulleted_list_item: RichTextContent,
    },
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextContent },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RichTextContent {
    rich_text: Vec<NotionRichText>,
}

impl RichTextContent {
    fn from_runs(runs: &[RichTextRun]) -> Self {
        Self {
            rich_text: runs.iter().map(NotionRichText::from).collect(),
        }
    }
}

/// A Notion rich text item of type `text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotionRichText {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<Annotations>,
}

impl NotionRichText {
    /// The text content.
    pub fn content(&self) -> &str {
        &self.text.content
    }

    /// Whether the item is annotated bold.
    pub fn is_bold(&self) -> bool {
        self.annotations.as_ref().is_some_and(|a| a.bold)
    }
}

impl From<&RichTextRun> for NotionRichText {
    fn from(run: &RichTextRun) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: run.content.clone(),
            },
            annotations: run.bold.then_some(Annotations { bold: true }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TextContent {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Annotations {
    bold: bool,
}

/// Map every block of a document to a Notion block object.
pub fn to_notion_blocks(doc: &Document) -> Vec<NotionBlock> {
    doc.iter().map(NotionBlock::from).collect()
}

/// Render a document as a JSON array of Notion block objects.
pub fn to_notion_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(&to_notion_blocks(doc), format)
}

/// Request body for `POST /pages` creating a page in a database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRequest {
    parent: Parent,
    properties: PageProperties,
    children: Vec<NotionBlock>,
}

impl PageRequest {
    /// Create a request for a titled page in `database_id` with no content.
    pub fn new(database_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.into(),
            },
            properties: PageProperties {
                name: TitleProperty {
                    title: vec![TitleText {
                        text: TextContent {
                            content: title.into(),
                        },
                    }],
                },
                video_url: None,
            },
            children: Vec::new(),
        }
    }

    /// Create a request for a video's page, titled after the video and
    /// carrying its URL when known.
    pub fn for_video(database_id: impl Into<String>, info: &VideoInfo) -> Self {
        let request = Self::new(database_id, info.title.as_str());
        match &info.url {
            Some(url) => request.with_video_url(url.as_str()),
            None => request,
        }
    }

    /// Set the `Video URL` property. An empty URL leaves it unset.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.properties.video_url = (!url.is_empty()).then_some(UrlProperty { url });
        self
    }

    /// Use the document's blocks as page content.
    pub fn with_document(mut self, doc: &Document) -> Self {
        self.children = to_notion_blocks(doc);
        self
    }

    /// The page content blocks.
    pub fn children(&self) -> &[NotionBlock] {
        &self.children
    }

    /// Render the request body as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        serialize(self, format)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Parent {
    database_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PageProperties {
    #[serde(rename = "Name")]
    name: TitleProperty,
    #[serde(rename = "Video URL", skip_serializing_if = "Option::is_none")]
    video_url: Option<UrlProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TitleProperty {
    title: Vec<TitleText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TitleText {
    text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct UrlProperty {
    url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_block_shape() {
        let block = NotionBlock::from(&Block::heading(HeadingLevel::H2, "**Title**"));
        assert_eq!(block.block_type(), "heading_2");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{"type": "text", "text": {"content": "**Title**"}}]
                }
            })
        );
    }

    #[test]
    fn test_bullet_block_annotations() {
        let block = NotionBlock::from(&Block::bullet(vec![
            RichTextRun::bold("Topic:"),
            RichTextRun::plain(" detail"),
        ]));
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "object": "block",
                "type": "bulleted_list_item",
                "bulleted_list_item": {
                    "rich_text": [
                        {"type": "text", "text": {"content": "Topic:"}, "annotations": {"bold": true}},
                        {"type": "text", "text": {"content": " detail"}}
                    ]
                }
            })
        );
        assert!(block.rich_text()[0].is_bold());
        assert!(!block.rich_text()[1].is_bold());
    }

    #[test]
    fn test_page_request_without_url() {
        let doc = Document::from(vec![Block::paragraph(vec![RichTextRun::plain("Body")])]);
        let request = PageRequest::new("db-123", "My Video")
            .with_video_url("")
            .with_document(&doc);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parent"], json!({"database_id": "db-123"}));
        assert_eq!(
            value["properties"],
            json!({"Name": {"title": [{"text": {"content": "My Video"}}]}})
        );
        assert_eq!(value["children"][0]["type"], "paragraph");
    }

    #[test]
    fn test_page_request_with_url() {
        let request = PageRequest::new("db", "t").with_video_url("https://youtu.be/abc");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["properties"]["Video URL"],
            json!({"url": "https://youtu.be/abc"})
        );
        assert!(request.children().is_empty());
    }

    #[test]
    fn test_page_request_for_video() {
        let info = VideoInfo::new("Rust in 100 Seconds").with_url("https://youtu.be/xyz");
        let value = serde_json::to_value(PageRequest::for_video("db", &info)).unwrap();
        assert_eq!(
            value["properties"],
            json!({
                "Name": {"title": [{"text": {"content": "Rust in 100 Seconds"}}]},
                "Video URL": {"url": "https://youtu.be/xyz"}
            })
        );

        let untitled = PageRequest::for_video("db", &VideoInfo::default());
        let value = serde_json::to_value(untitled).unwrap();
        assert_eq!(
            value["properties"],
            json!({"Name": {"title": [{"text": {"content": "Unknown Video"}}]}})
        );
    }

    #[test]
    fn test_to_notion_json_compact() {
        let doc = Document::from(vec![Block::paragraph(vec![RichTextRun::plain("x")])]);
        let json = to_notion_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[{"object":"block","type":"paragraph","paragraph":{"rich_text":[{"type":"text","text":{"content":"x"}}]}}]"#
        );
    }
}
