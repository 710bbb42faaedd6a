//! Summary text producers.
//!
//! The converter only consumes text; this module produces it. A
//! [`Summarizer`] turns video information into mini-grammar text. The
//! deterministic [`FallbackSummarizer`] needs no external service and is
//! used whenever a primary (e.g. LLM-backed) summarizer is absent, the
//! content is too short for it, or it fails.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Title used when a video has none.
pub const UNKNOWN_TITLE: &str = "Unknown Video";

/// Transcript placeholder meaning no transcript could be fetched.
pub const TRANSCRIPT_UNAVAILABLE: &str = "Transcript unavailable";

/// Summary returned when there is nothing to summarize.
pub const NO_CONTENT_MESSAGE: &str = "No transcript or description available for summarization.";

/// Content at or below this many characters skips the primary summarizer.
pub const MIN_PRIMARY_CHARS: usize = 100;

/// Information about one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInfo {
    /// Video title
    pub title: String,

    /// Video description
    pub description: String,

    /// Full transcript text
    pub transcript: String,

    /// Video URL, if known
    pub url: Option<String>,
}

impl VideoInfo {
    /// Create video info with a title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the transcript.
    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = transcript.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Pick the text to summarize: the transcript when usable, otherwise
    /// the description.
    pub fn source(&self) -> SummarySource<'_> {
        if !self.transcript.is_empty() && self.transcript != TRANSCRIPT_UNAVAILABLE {
            SummarySource::Transcript(&self.transcript)
        } else if !self.description.is_empty() {
            SummarySource::Description(&self.description)
        } else {
            SummarySource::Missing
        }
    }
}

impl Default for VideoInfo {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            description: String::new(),
            transcript: String::new(),
            url: None,
        }
    }
}

/// Where summary content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource<'a> {
    /// The transcript
    Transcript(&'a str),
    /// The description, used when no transcript is available
    Description(&'a str),
    /// Neither is available
    Missing,
}

impl<'a> SummarySource<'a> {
    /// The selected content, if any.
    pub fn content(&self) -> Option<&'a str> {
        match *self {
            SummarySource::Transcript(text) | SummarySource::Description(text) => Some(text),
            SummarySource::Missing => None,
        }
    }
}

/// Producer of mini-grammar summary text.
pub trait Summarizer: Send + Sync {
    /// Get the name of this summarizer.
    fn name(&self) -> &str;

    /// Summarize the video.
    fn summarize(&self, info: &VideoInfo) -> Result<String>;
}

/// Which producer wrote a [`Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrigin {
    /// The primary summarizer
    Primary,
    /// The deterministic fallback
    Fallback,
    /// No content was available; the text is [`NO_CONTENT_MESSAGE`]
    NoContent,
}

/// Summary text tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Mini-grammar text
    pub text: String,
    /// Producer of the text
    pub origin: SummaryOrigin,
}

/// Summarize with `primary` when possible, degrading to `fallback`.
///
/// The primary summarizer is only tried for content longer than
/// [`MIN_PRIMARY_CHARS`]; its errors are logged and replaced by the
/// fallback summary.
pub fn summarize_with_fallback(
    primary: Option<&dyn Summarizer>,
    fallback: &FallbackSummarizer,
    info: &VideoInfo,
) -> Summary {
    let Some(content) = info.source().content() else {
        return Summary {
            text: NO_CONTENT_MESSAGE.to_string(),
            origin: SummaryOrigin::NoContent,
        };
    };

    match primary {
        Some(primary) if content.chars().count() > MIN_PRIMARY_CHARS => {
            match primary.summarize(info) {
                Ok(text) => {
                    return Summary {
                        text,
                        origin: SummaryOrigin::Primary,
                    }
                }
                Err(e) => log::warn!("{} summarization failed: {}", primary.name(), e),
            }
        }
        Some(_) => log::warn!("Content too short for primary summarization"),
        None => log::debug!("No primary summarizer configured, using basic summarization"),
    }

    Summary {
        text: fallback.summarize_text(info),
        origin: SummaryOrigin::Fallback,
    }
}

/// Deterministic summarizer: leading sentences plus a fixed outline.
#[derive(Debug, Clone)]
pub struct FallbackSummarizer {
    /// Number of leading sentences kept
    pub max_sentences: usize,
    /// Character limit of the lead paragraph before `...` is appended
    pub max_lead_chars: usize,
    whitespace: Regex,
    sentence_end: Regex,
}

impl FallbackSummarizer {
    /// Create a summarizer keeping 5 sentences and at most 500 characters.
    pub fn new() -> Self {
        Self {
            max_sentences: 5,
            max_lead_chars: 500,
            whitespace: Regex::new(r"\s+").unwrap(),
            sentence_end: Regex::new(r#"[.!?]+["')\]]*\s+"#).unwrap(),
        }
    }

    /// Set the number of leading sentences kept.
    pub fn with_max_sentences(mut self, sentences: usize) -> Self {
        self.max_sentences = sentences;
        self
    }

    /// Set the lead paragraph character limit.
    pub fn with_max_lead_chars(mut self, chars: usize) -> Self {
        self.max_lead_chars = chars;
        self
    }

    /// Build the summary text for `info`.
    pub fn summarize_text(&self, info: &VideoInfo) -> String {
        let Some(content) = info.source().content() else {
            return NO_CONTENT_MESSAGE.to_string();
        };

        let lead = self.lead(content);
        let title = info.title.as_str();
        let topic = match title.split_whitespace().next() {
            Some(word) if title != UNKNOWN_TITLE => word,
            _ => "Content",
        };

        let summary = format!(
            "\
{lead}

## Highlights

- 🎯 **Main Topic:** {title}

- 🔑 **Key Points:** Important details from the video

- 💡 **Notable Insight:** A significant concept from the content

## Key Insights

- 🌟 **{topic} Overview:** The video discusses important concepts related to this topic.

- 🔍 **Detailed Analysis:** Further exploration of the main ideas presented.

- ⚙️ **Technical Aspects:** Important technical details mentioned in the video.

This video provides valuable information about {title}. The main takeaways center around the key points discussed throughout the presentation."
        );

        summary.trim().to_string()
    }

    /// Build the lead paragraph: the first sentences of `content`, with
    /// whitespace collapsed, truncated to the character limit.
    pub fn lead(&self, content: &str) -> String {
        let clean = self.collapse_whitespace(content);
        let lead = self
            .split_sentences(&clean)
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" ");

        if lead.chars().count() > self.max_lead_chars {
            let mut truncated: String = lead.chars().take(self.max_lead_chars).collect();
            truncated.push_str("...");
            truncated
        } else {
            lead
        }
    }

    /// Replace every whitespace run with one space and trim.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }

    /// Split text into sentences ending in `.`, `!` or `?` (closing quotes
    /// and brackets stay with their sentence). Trailing text without
    /// terminal punctuation is the last sentence.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in self.sentence_end.find_iter(text) {
            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = m.end();
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }
}

impl Default for FallbackSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for FallbackSummarizer {
    fn name(&self) -> &str {
        "basic"
    }

    fn summarize(&self, info: &VideoInfo) -> Result<String> {
        Ok(self.summarize_text(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn summarize(&self, _info: &VideoInfo) -> Result<String> {
            Err(Error::Other("rate limit".into()))
        }
    }

    struct EchoSummarizer;

    impl Summarizer for EchoSummarizer {
        fn name(&self) -> &str {
            "echo"
        }

        fn summarize(&self, info: &VideoInfo) -> Result<String> {
            Ok(format!("## {}", info.title))
        }
    }

    fn long_transcript() -> String {
        "Rust makes systems programming safe. ".repeat(5)
    }

    #[test]
    fn test_source_selection() {
        let info = VideoInfo::new("t").with_transcript("words").with_description("desc");
        assert_eq!(info.source(), SummarySource::Transcript("words"));

        let info = VideoInfo::new("t")
            .with_transcript(TRANSCRIPT_UNAVAILABLE)
            .with_description("desc");
        assert_eq!(info.source(), SummarySource::Description("desc"));

        let info = VideoInfo::new("t");
        assert_eq!(info.source(), SummarySource::Missing);
        assert_eq!(info.source().content(), None);
    }

    #[test]
    fn test_missing_content_message() {
        let summary = FallbackSummarizer::new().summarize_text(&VideoInfo::new("t"));
        assert_eq!(summary, NO_CONTENT_MESSAGE);
    }

    #[test]
    fn test_split_sentences() {
        let summarizer = FallbackSummarizer::new();
        assert_eq!(
            summarizer.split_sentences("One. Two! \"Three?\" Four"),
            vec!["One.", "Two!", "\"Three?\"", "Four"]
        );
        assert_eq!(summarizer.split_sentences("v1.2 is out."), vec!["v1.2 is out."]);
        assert!(summarizer.split_sentences("").is_empty());
    }

    #[test]
    fn test_lead_keeps_five_sentences() {
        let summarizer = FallbackSummarizer::new();
        let lead = summarizer.lead("A.  B.\nC. D. E. F. G.");
        assert_eq!(lead, "A. B. C. D. E.");
    }

    #[test]
    fn test_lead_truncates_long_text() {
        let summarizer = FallbackSummarizer::new();
        let lead = summarizer.lead(&"word ".repeat(200));
        assert_eq!(lead.chars().count(), 503);
        assert!(lead.ends_with("..."));
    }

    #[test]
    fn test_template() {
        let info = VideoInfo::new("Rust Ownership Explained").with_transcript("It is great.");
        let summary = FallbackSummarizer::new().summarize_text(&info);

        assert!(summary.starts_with("It is great.\n\n## Highlights"));
        assert!(summary.contains("- 🎯 **Main Topic:** Rust Ownership Explained"));
        assert!(summary.contains("- 🌟 **Rust Overview:**"));
        assert!(summary.ends_with("throughout the presentation."));
    }

    #[test]
    fn test_template_default_title_topic() {
        let info = VideoInfo::default().with_description("Something.");
        let summary = FallbackSummarizer::new().summarize_text(&info);
        assert!(summary.contains("- 🌟 **Content Overview:**"));
        assert!(summary.contains("**Main Topic:** Unknown Video"));
    }

    #[test]
    fn test_fallback_on_primary_error() {
        let info = VideoInfo::new("Title").with_transcript(long_transcript());
        let summary =
            summarize_with_fallback(Some(&FailingSummarizer), &FallbackSummarizer::new(), &info);
        assert_eq!(summary.origin, SummaryOrigin::Fallback);
        assert!(summary.text.contains("## Highlights"));
    }

    #[test]
    fn test_primary_used_for_long_content() {
        let info = VideoInfo::new("Title").with_transcript(long_transcript());
        let summary =
            summarize_with_fallback(Some(&EchoSummarizer), &FallbackSummarizer::new(), &info);
        assert_eq!(summary.origin, SummaryOrigin::Primary);
        assert_eq!(summary.text, "## Title");
    }

    #[test]
    fn test_short_content_skips_primary() {
        let info = VideoInfo::new("Title").with_transcript("Short.");
        let summary =
            summarize_with_fallback(Some(&EchoSummarizer), &FallbackSummarizer::new(), &info);
        assert_eq!(summary.origin, SummaryOrigin::Fallback);
    }

    #[test]
    fn test_no_content() {
        let summary =
            summarize_with_fallback(None, &FallbackSummarizer::new(), &VideoInfo::new("x"));
        assert_eq!(summary.origin, SummaryOrigin::NoContent);
        assert_eq!(summary.text, NO_CONTENT_MESSAGE);
    }
}
