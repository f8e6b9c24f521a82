//! Profile Setup Core Library
//!
//! Provides the platform-independent state machine behind the profile setup screen:
//! - Form fields and their mutators (`ProfileFormState`)
//! - Derived values (greeting, parsed age, completion progress)
//! - The gated Continue transition that produces a `ProfileSnapshot`
//!
//! Presentation concerns (rendering, haptics, key handling) live in the front end and
//! reach this library only through plain method calls and the `FeedbackSink` trait.

pub mod error;
pub mod form;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::{completion_progress, greeting, parsed_age, ProfileFormState};
pub use traits::{FeedbackSink, NoopFeedback};
pub use types::{
    CompletionProgress, FocusedField, FormField, HapticStyle, NavigationPhase, ProfileSnapshot,
};
