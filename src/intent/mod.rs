//! Intent classification and parameter extraction
//!
//! message -> classifier::classify -> Intent -> extract::* | general::classify_general

pub mod classifier;
pub mod extract;
pub mod general;
pub mod patterns;

pub use classifier::{classify, Intent, IntentRule, INTENT_RULES};
pub use extract::Extraction;
pub use general::{classify_general, GeneralTopic};
pub use patterns::ExtractionPatterns;
