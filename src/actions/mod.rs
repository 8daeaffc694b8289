pub mod catalog;

pub use catalog::{
    ActionDescriptor, ActionType, ListParameters, NoParameters, NoteCategory, NoteParameters,
    PomodoroParameters, SessionKind, TaskFilter, TaskParameters, TaskPriority,
};
