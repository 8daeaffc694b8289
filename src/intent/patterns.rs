//! Compiled extraction patterns
//!
//! Every pattern exposes its payload through a named capture group so the
//! extractors never depend on group numbering.

use crate::core::error::Result;
use regex::Regex;

const TASK_TITLE_PATTERNS: [&str; 2] = [
    r"(?:create|add|new|make)?\s*task\s*[:\-]?\s*(?P<title>.+)",
    r"(?:task|todo)\s*[:\-]?\s*(?P<title>.+)",
];

const NOTE_CONTENT_PATTERNS: [&str; 2] = [
    r"(?i)(?:create|add|new|take)?\s*note\s*[:\-]?\s*(?P<content>.+)",
    r"(?i)note\s*[:\-]?\s*(?P<content>.+)",
];

const DURATION_PATTERN: &str = r"(?P<minutes>\d+)\s*min";

/// Title text is cut at the first of these markers
const TITLE_CUT_MARKERS: [&str; 2] = [" priority", " with"];

/// The regex set used by the parameter extractors
#[derive(Debug, Clone)]
pub struct ExtractionPatterns {
    task_titles: Vec<Regex>,
    note_contents: Vec<Regex>,
    duration: Regex,
}

impl ExtractionPatterns {
    pub fn compile() -> Result<Self> {
        let task_titles = TASK_TITLE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let note_contents = NOTE_CONTENT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let duration = Regex::new(DURATION_PATTERN)?;

        Ok(Self {
            task_titles,
            note_contents,
            duration,
        })
    }

    /// Task title from an already lower-cased message
    ///
    /// The first pattern yielding a non-empty remainder wins. The remainder
    /// is cut before " priority" and " with".
    pub fn task_title(&self, message_lower: &str) -> Option<String> {
        let captured = first_capture(&self.task_titles, message_lower, "title")?;

        let mut title = captured.as_str();
        for marker in TITLE_CUT_MARKERS {
            if let Some(idx) = title.find(marker) {
                title = &title[..idx];
            }
        }

        let title = title.trim_end();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }

    /// Note content from the message, keeping its original casing
    pub fn note_content(&self, message: &str) -> Option<String> {
        first_capture(&self.note_contents, message, "content")
    }

    /// Focus duration from a "<digits> min" phrase
    ///
    /// Zero and values that overflow `u32` count as absent.
    pub fn duration_minutes(&self, message_lower: &str) -> Option<u32> {
        let caps = self.duration.captures(message_lower)?;
        caps.name("minutes")?
            .as_str()
            .parse::<u32>()
            .ok()
            .filter(|minutes| *minutes > 0)
    }
}

fn first_capture(patterns: &[Regex], text: &str, group: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let cleaned = strip_quotes(caps.name(group)?.as_str());
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    })
}

/// Trim surrounding whitespace, then surrounding quote characters
fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(|c| c == '"' || c == '\'')
}
