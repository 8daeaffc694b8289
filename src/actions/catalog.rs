//! Action definitions and catalog
//!
//! An [`ActionDescriptor`] is the structured instruction handed to the app.
//! Each variant carries exactly the parameter shape of its action type, so a
//! descriptor can never be emitted with a missing field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of actions the app can be asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    CreateTask,
    StartPomodoro,
    CreateNote,
    ListTasks,
    AnalyzeProductivity,
    GenerateDailyPlan,
}

impl ActionType {
    pub const ALL: [ActionType; 6] = [
        ActionType::CreateTask,
        ActionType::StartPomodoro,
        ActionType::CreateNote,
        ActionType::ListTasks,
        ActionType::AnalyzeProductivity,
        ActionType::GenerateDailyPlan,
    ];

    /// Wire name of the action type
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::CreateTask => "create_task",
            ActionType::StartPomodoro => "start_pomodoro",
            ActionType::CreateNote => "create_note",
            ActionType::ListTasks => "list_tasks",
            ActionType::AnalyzeProductivity => "analyze_productivity",
            ActionType::GenerateDailyPlan => "generate_daily_plan",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    #[default]
    Focus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    Active,
}

/// Parameters of a `create_task` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParameters {
    /// Title-cased task title
    pub title: String,
    pub priority: TaskPriority,
    /// Always empty for now; descriptions are not extracted from messages
    pub description: String,
}

/// Parameters of a `start_pomodoro` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroParameters {
    /// Session length in minutes, always positive
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub label: String,
}

impl PomodoroParameters {
    pub fn focus(duration: u32) -> Self {
        Self {
            duration,
            kind: SessionKind::Focus,
            label: format!("{}-minute focus session", duration),
        }
    }
}

/// Parameters of a `create_note` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteParameters {
    pub title: String,
    pub content: String,
    pub category: NoteCategory,
}

/// Parameters of a `list_tasks` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParameters {
    pub filter: TaskFilter,
}

/// Empty parameter mapping, serialized as `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoParameters {}

/// Structured instruction for the app to execute
///
/// Serializes as `{"type": "<action_type>", "parameters": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "parameters", rename_all = "snake_case")]
pub enum ActionDescriptor {
    CreateTask(TaskParameters),
    StartPomodoro(PomodoroParameters),
    CreateNote(NoteParameters),
    ListTasks(ListParameters),
    AnalyzeProductivity(NoParameters),
    GenerateDailyPlan(NoParameters),
}

impl ActionDescriptor {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionDescriptor::CreateTask(_) => ActionType::CreateTask,
            ActionDescriptor::StartPomodoro(_) => ActionType::StartPomodoro,
            ActionDescriptor::CreateNote(_) => ActionType::CreateNote,
            ActionDescriptor::ListTasks(_) => ActionType::ListTasks,
            ActionDescriptor::AnalyzeProductivity(_) => ActionType::AnalyzeProductivity,
            ActionDescriptor::GenerateDailyPlan(_) => ActionType::GenerateDailyPlan,
        }
    }

    /// The `title` parameter, for the actions that have one
    pub fn title(&self) -> Option<&str> {
        match self {
            ActionDescriptor::CreateTask(p) => Some(&p.title),
            ActionDescriptor::CreateNote(p) => Some(&p.title),
            _ => None,
        }
    }
}
