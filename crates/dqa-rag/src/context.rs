//! Context assembly and prompt rendering

use dqa_core::ScoredMatch;

/// Fixed separator between passages so the generation model can tell
/// passage boundaries apart
pub const PASSAGE_DELIMITER: &str = "\n\n---\n\n";

/// Concatenate the matched passages in rank order into one context block
///
/// No deduplication and no truncation beyond the top-k already chosen.
pub fn assemble(matches: &[ScoredMatch]) -> String {
    matches
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(PASSAGE_DELIMITER)
}

/// Renders the grounding prompt: instructions, context block, and the
/// verbatim question
///
/// The rules are policy text the generation model is asked to honor, not
/// something this component enforces. `synthesize_examples` controls the
/// one deliberate grounding relaxation: allowing the model to write a code
/// example when the context describes behavior without showing code.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    synthesize_examples: bool,
}

impl PromptTemplate {
    pub fn new(synthesize_examples: bool) -> Self {
        Self {
            synthesize_examples,
        }
    }

    pub fn render(&self, context: &str, question: &str) -> String {
        let mut rules = vec![
            "Base your answer strictly on the logic and properties found in the Context."
                .to_string(),
        ];
        if self.synthesize_examples {
            rules.push(
                "If the Context explains how a feature works but lacks a code example, \
                 you MUST generate a code example that demonstrates the logic described."
                    .to_string(),
            );
        }
        rules.push("Do not invent new properties that are not mentioned in the Context.".to_string());
        rules.push(
            "If the Context is completely irrelevant to the question, only then say \
             \"I don't know based on this document.\""
                .to_string(),
        );

        let mut prompt = String::new();
        prompt.push_str(
            "You are an expert developer assistant. Answer the user's question using the \
             Context provided below.\n\nRULES:\n",
        );
        for (i, rule) in rules.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, rule));
        }

        prompt.push_str("\n--- CONTEXT START ---\n");
        prompt.push_str(context);
        prompt.push_str("\n--- CONTEXT END ---\n\n");
        prompt.push_str(&format!("User Question: \"{question}\"\n"));
        prompt.push_str("Answer:");

        prompt
    }
}
