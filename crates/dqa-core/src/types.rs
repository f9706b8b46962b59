//! Shared result types

use serde::{Deserialize, Serialize};

/// The uniform result of one question answered by the pipeline
///
/// `message` is either the generated answer or a human-readable error
/// description; `success` tells the presentation layer which one it got.
/// Failures never escape the pipeline as faults, so a chat surface can
/// always render this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub success: bool,
    pub message: String,
}

impl Answer {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_constructors() {
        let ok = Answer::ok("it works");
        assert!(ok.success);
        assert_eq!(ok.message, "it works");

        let err = Answer::err("it broke");
        assert!(!err.success);
        assert_eq!(err.message, "it broke");
    }
}
