//! Ordered phrase-table intent classification
//!
//! Rules are tested top to bottom against the lower-cased message and the
//! first rule with any contained phrase wins. Messages can match several
//! rule sets, so the order of [`INTENT_RULES`] is part of the behavior.

use crate::actions::catalog::ActionType;

/// Classified purpose of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The message asks for an app action
    Action(ActionType),
    /// No action phrase matched; answer conversationally
    General,
}

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub action: ActionType,
    pub phrases: &'static [&'static str],
}

impl IntentRule {
    pub fn matches(&self, message_lower: &str) -> bool {
        contains_any(message_lower, self.phrases)
    }
}

/// Classification table in priority order (highest first)
pub const INTENT_RULES: [IntentRule; 6] = [
    IntentRule {
        action: ActionType::CreateTask,
        phrases: &["create task", "add task", "new task", "make a task"],
    },
    IntentRule {
        action: ActionType::StartPomodoro,
        phrases: &["start pomodoro", "focus session", "start timer", "work session"],
    },
    IntentRule {
        action: ActionType::CreateNote,
        phrases: &["create note", "add note", "new note", "take note"],
    },
    IntentRule {
        action: ActionType::ListTasks,
        phrases: &["show tasks", "list tasks", "my tasks", "what tasks"],
    },
    IntentRule {
        action: ActionType::AnalyzeProductivity,
        phrases: &["productivity", "how am i doing", "analyze", "stats", "progress"],
    },
    IntentRule {
        action: ActionType::GenerateDailyPlan,
        phrases: &["daily plan", "plan my day", "what should i do", "prioritize"],
    },
];

/// Select exactly one intent for a raw message
pub fn classify(message: &str) -> Intent {
    let message_lower = message.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&message_lower))
        .map(|rule| Intent::Action(rule.action))
        .unwrap_or(Intent::General)
}

/// Substring containment against a phrase set
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
