//! Parameter extraction for action intents
//!
//! Each extractor is a pure function of the message that produces the
//! action descriptor plus the confirmation text shown to the user.

use crate::actions::catalog::{
    ActionDescriptor, ListParameters, NoParameters, NoteCategory, NoteParameters,
    PomodoroParameters, TaskParameters, TaskPriority,
};
use crate::core::config::InterpreterConfig;
use crate::intent::classifier::contains_any;
use crate::intent::patterns::ExtractionPatterns;

const HIGH_PRIORITY_WORDS: [&str; 4] = ["urgent", "important", "critical", "high"];
const LOW_PRIORITY_WORDS: [&str; 3] = ["low", "minor", "later"];

/// Result of running an extractor over a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Confirmation text for the user
    pub message: String,
    pub action: ActionDescriptor,
}

pub fn extract_task(
    patterns: &ExtractionPatterns,
    config: &InterpreterConfig,
    message: &str,
) -> Extraction {
    let message_lower = message.to_lowercase();
    let title = patterns
        .task_title(&message_lower)
        .unwrap_or_else(|| config.default_task_title.clone());
    let priority = resolve_priority(&message_lower);

    Extraction {
        message: format!(
            "I'll create a task '{}' with {} priority for you! 📝",
            title, priority
        ),
        action: ActionDescriptor::CreateTask(TaskParameters {
            title: title_case(&title),
            priority,
            description: String::new(),
        }),
    }
}

pub fn extract_pomodoro(
    patterns: &ExtractionPatterns,
    config: &InterpreterConfig,
    message: &str,
) -> Extraction {
    let duration = patterns
        .duration_minutes(&message.to_lowercase())
        .unwrap_or(config.default_focus_minutes);

    Extraction {
        message: format!(
            "Starting a {}-minute focus session! 🍅 Stay concentrated and avoid distractions.",
            duration
        ),
        action: ActionDescriptor::StartPomodoro(PomodoroParameters::focus(duration)),
    }
}

pub fn extract_note(
    patterns: &ExtractionPatterns,
    config: &InterpreterConfig,
    message: &str,
) -> Extraction {
    let content = patterns
        .note_content(message)
        .unwrap_or_else(|| config.default_note_content.clone());
    let title = truncate_title(&content, config.note_title_limit);

    Extraction {
        message: "I've created a note for you! 📝".to_string(),
        action: ActionDescriptor::CreateNote(NoteParameters {
            title,
            content,
            category: NoteCategory::Other,
        }),
    }
}

pub fn list_tasks() -> Extraction {
    Extraction {
        message: "Let me show you your current tasks! 📋".to_string(),
        action: ActionDescriptor::ListTasks(ListParameters::default()),
    }
}

pub fn analyze_productivity() -> Extraction {
    Extraction {
        message: "Let me analyze your productivity data! 📊".to_string(),
        action: ActionDescriptor::AnalyzeProductivity(NoParameters::default()),
    }
}

pub fn generate_daily_plan() -> Extraction {
    Extraction {
        message: "I'll create an optimized daily plan based on your tasks! 📅".to_string(),
        action: ActionDescriptor::GenerateDailyPlan(NoParameters::default()),
    }
}

/// High keywords are checked before low keywords, so a message carrying
/// both resolves to high.
pub fn resolve_priority(message_lower: &str) -> TaskPriority {
    if contains_any(message_lower, &HIGH_PRIORITY_WORDS) {
        TaskPriority::High
    } else if contains_any(message_lower, &LOW_PRIORITY_WORDS) {
        TaskPriority::Low
    } else {
        TaskPriority::Medium
    }
}

/// Capitalize the first letter of every word and lower-case the rest
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so "q3-report" becomes "Q3-Report" and "don't" stays one word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphanumeric() || c == '\'';
    }

    out
}

/// First `limit` characters of `content`, with "..." appended when cut
pub fn truncate_title(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_string(),
    }
}
