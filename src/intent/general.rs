//! Conversational replies for messages that request no action

use crate::intent::classifier::contains_any;

/// Sub-category of a general (non-action) message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralTopic {
    Greeting,
    Help,
    Gratitude,
    Positive,
    Default,
}

/// Topic table in priority order
const TOPIC_RULES: [(GeneralTopic, &[&str]); 4] = [
    (GeneralTopic::Greeting, &["hello", "hi", "hey"]),
    (GeneralTopic::Help, &["help", "what can you do", "commands"]),
    (GeneralTopic::Gratitude, &["thank", "thanks"]),
    (GeneralTopic::Positive, &["good", "great", "awesome", "nice"]),
];

impl GeneralTopic {
    /// Canned reply for the topic
    pub fn reply(&self) -> &'static str {
        match self {
            GeneralTopic::Greeting => "Hi! I'm Zara, your productivity assistant. I can help you create tasks, start focus sessions, take notes, and more! What would you like to do? 👋",
            GeneralTopic::Help => "I can help you with:\n• Creating and managing tasks\n• Starting pomodoro focus sessions\n• Taking notes\n• Analyzing your productivity\n• Planning your day\n\nJust ask me naturally, like 'create a task' or 'start a 25-minute focus session'! 🚀",
            GeneralTopic::Gratitude => "You're welcome! I'm here to help you stay productive. Is there anything else you'd like to do? 😊",
            GeneralTopic::Positive => "I'm glad to hear that! Keep up the great work. Productivity is all about consistent small steps. 💪",
            GeneralTopic::Default => "I'm here to help you be more productive! You can ask me to create tasks, start focus sessions, take notes, or check your productivity stats. What would you like to do? 🎯",
        }
    }
}

/// Pick the general topic for a message no action rule matched
pub fn classify_general(message: &str) -> GeneralTopic {
    let message_lower = message.trim().to_lowercase();
    let topic = TOPIC_RULES
        .iter()
        .find(|(_, words)| contains_any(&message_lower, words))
        .map(|(topic, _)| *topic)
        .unwrap_or(GeneralTopic::Default);

    tracing::trace!(?topic, "General topic selected");
    topic
}
