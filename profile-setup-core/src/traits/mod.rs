//! Presentation-side hook trait definition

mod feedback;

pub use feedback::{FeedbackSink, NoopFeedback};
