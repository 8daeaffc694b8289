//! Integration tests for the interpreter
//!
//! These tests drive the public entry points end to end:
//! - Action intents produce exactly one descriptor with the right parameters
//! - Non-action messages fall back to canned replies with no actions
//! - The demo prompts behave exactly as the phrase tables dictate
//! - Rendering for the chat widget and the JSON API

use zeno_assistant::actions::{
    ActionDescriptor, ActionType, NoParameters, NoteCategory, PomodoroParameters, TaskFilter,
    TaskPriority,
};
use zeno_assistant::command::render::{api_json, chat_reply};
use zeno_assistant::command::{Interpreter, InterpreterResponse, EXAMPLE_PROMPTS};
use zeno_assistant::core::config::InterpreterConfig;
use zeno_assistant::intent::GeneralTopic;

fn interpreter() -> Interpreter {
    Interpreter::new().unwrap()
}

fn single_action(response: &InterpreterResponse) -> &ActionDescriptor {
    assert_eq!(response.actions.len(), 1, "expected one action: {:?}", response);
    &response.actions[0]
}

// ============================================================================
// Action Intents
// ============================================================================

#[test]
fn test_create_task_any_case() {
    let interpreter = interpreter();
    for message in ["create task buy milk", "CREATE TASK buy milk", "Please Create Task: buy milk"] {
        let response = interpreter.interpret(message);
        assert_eq!(single_action(&response).action_type(), ActionType::CreateTask);
    }
}

#[test]
fn test_create_task_full_parameters() {
    let response = interpreter().interpret("New task: Draft budget priority low");
    match single_action(&response) {
        ActionDescriptor::CreateTask(params) => {
            assert_eq!(params.title, "Draft Budget");
            assert_eq!(params.priority, TaskPriority::Low);
            assert_eq!(params.description, "");
        }
        other => panic!("unexpected action {:?}", other),
    }
    assert_eq!(
        response.message,
        "I'll create a task 'draft budget' with low priority for you! 📝"
    );
}

#[test]
fn test_high_priority_wins_over_low() {
    let response = interpreter().interpret("new task: ship it, urgent and low priority");
    match single_action(&response) {
        ActionDescriptor::CreateTask(params) => {
            assert_eq!(params.priority, TaskPriority::High);
            assert_eq!(params.title, "Ship It, Urgent And Low");
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_focus_session_default_duration() {
    let response = interpreter().interpret("Start a 25-minute focus session");
    assert_eq!(
        single_action(&response),
        &ActionDescriptor::StartPomodoro(PomodoroParameters::focus(25))
    );
    assert_eq!(
        response.message,
        "Starting a 25-minute focus session! 🍅 Stay concentrated and avoid distractions."
    );
}

#[test]
fn test_focus_session_explicit_duration() {
    let response = interpreter().interpret("start timer for 20 min");
    match single_action(&response) {
        ActionDescriptor::StartPomodoro(params) => {
            assert_eq!(params.duration, 20);
            assert_eq!(params.label, "20-minute focus session");
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_note_keeps_original_case() {
    let response = interpreter().interpret("Add note: Ask Priya about the Q3 OKRs");
    match single_action(&response) {
        ActionDescriptor::CreateNote(params) => {
            assert_eq!(params.content, "Ask Priya about the Q3 OKRs");
            assert_eq!(params.title, "Ask Priya about the Q3 OKRs");
            assert_eq!(params.category, NoteCategory::Other);
        }
        other => panic!("unexpected action {:?}", other),
    }
    assert_eq!(response.message, "I've created a note for you! 📝");
}

#[test]
fn test_long_note_title_is_truncated() {
    let content = "Remember to compare the vendor quotes before the Friday review meeting";
    let response = interpreter().interpret(&format!("new note: {}", content));
    match single_action(&response) {
        ActionDescriptor::CreateNote(params) => {
            assert_eq!(params.content, content);
            assert_eq!(params.title, format!("{}...", &content[..50]));
            assert_eq!(params.title.chars().count(), 53);
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_list_tasks() {
    let response = interpreter().interpret("what tasks are left?");
    match single_action(&response) {
        ActionDescriptor::ListTasks(params) => assert_eq!(params.filter, TaskFilter::Active),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_analyze_productivity() {
    let response = interpreter().interpret("Analyze my productivity");
    assert_eq!(
        single_action(&response),
        &ActionDescriptor::AnalyzeProductivity(NoParameters::default())
    );
}

#[test]
fn test_daily_plan() {
    let response = interpreter().interpret("Help me plan my day");
    assert_eq!(
        single_action(&response),
        &ActionDescriptor::GenerateDailyPlan(NoParameters::default())
    );
}

// ============================================================================
// General Replies
// ============================================================================

#[test]
fn test_empty_message_gets_default_reply() {
    let response = interpreter().interpret("");
    assert!(response.actions.is_empty());
    assert_eq!(response.message, GeneralTopic::Default.reply());
}

#[test]
fn test_general_topics() {
    let interpreter = interpreter();
    let cases = [
        ("hello!", GeneralTopic::Greeting),
        ("commands?", GeneralTopic::Help),
        ("thank you", GeneralTopic::Gratitude),
        ("that was great", GeneralTopic::Positive),
        ("purple", GeneralTopic::Default),
    ];
    for (message, topic) in cases {
        let response = interpreter.interpret(message);
        assert!(response.actions.is_empty());
        assert_eq!(response.message, topic.reply(), "message: {}", message);
    }
}

// ============================================================================
// Demo Prompts
// ============================================================================

/// "create a task" is not a substring match for "create task", so this demo
/// prompt requests no action. "high" contains "hi", so it reads as a greeting.
#[test]
fn test_demo_task_prompt_is_not_a_task() {
    let response = interpreter().interpret(EXAMPLE_PROMPTS[0]);
    assert!(response.actions.is_empty());
    assert_eq!(response.message, GeneralTopic::Greeting.reply());
}

/// "create a note" and "my current tasks" miss their phrase sets as well
#[test]
fn test_demo_note_and_list_prompts_fall_back() {
    let interpreter = interpreter();
    for prompt in [EXAMPLE_PROMPTS[2], EXAMPLE_PROMPTS[3]] {
        let response = interpreter.interpret(prompt);
        assert!(response.actions.is_empty(), "prompt: {}", prompt);
        assert_eq!(response.message, GeneralTopic::Default.reply());
    }
}

#[test]
fn test_demo_prompts_action_types() {
    let interpreter = interpreter();
    let types: Vec<Option<ActionType>> = EXAMPLE_PROMPTS
        .iter()
        .map(|p| interpreter.interpret(p).actions.first().map(|a| a.action_type()))
        .collect();
    assert_eq!(
        types,
        vec![
            None,
            Some(ActionType::StartPomodoro),
            None,
            None,
            Some(ActionType::AnalyzeProductivity),
            Some(ActionType::GenerateDailyPlan),
        ]
    );
}

// ============================================================================
// Configuration and Rendering
// ============================================================================

#[test]
fn test_config_file_drives_defaults() {
    let config = InterpreterConfig::from_toml_str(
        "default_focus_minutes = 30\ndefault_note_content = \"Scratch\"",
    )
    .unwrap();
    let interpreter = Interpreter::with_config(config).unwrap();

    let response = interpreter.interpret("focus session please");
    assert_eq!(
        single_action(&response),
        &ActionDescriptor::StartPomodoro(PomodoroParameters::focus(30))
    );

    let response = interpreter.interpret("take note");
    match single_action(&response) {
        ActionDescriptor::CreateNote(params) => assert_eq!(params.content, "Scratch"),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_chat_reply_shows_task_title() {
    let response = interpreter().respond("add task water the plants");
    let text = chat_reply(&response);
    assert!(text.starts_with("I'll create a task 'water the plants'"));
    assert!(text.ends_with("🤖 **Actions to execute:**\n• create_task: Water The Plants\n"));
}

#[test]
fn test_api_json_body() {
    let body = api_json(interpreter().try_interpret("list tasks")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["message"], "Let me show you your current tasks! 📋");
    assert_eq!(
        value["actions"],
        serde_json::json!([{"type": "list_tasks", "parameters": {"filter": "active"}}])
    );
}

#[test]
fn test_free_function_entry_point() {
    let response = zeno_assistant::interpret("start pomodoro");
    assert_eq!(response.actions.len(), 1);
}
