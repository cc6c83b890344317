//! The content set shipped with the site.

use crate::record::{AuxiliaryContentRecord, ContentRecord};
use crate::store::{ContentError, ContentStore};

/// Fact cards, in the order they appear on the page.
const FACTS: &[(&str, &str, &str)] = &[
    (
        "card1",
        "Hundreds of AI leaders, including Nobel Prize-winning scientists and CEOs, agreed that AI could lead to human extinction.",
        "[\"CAIS Statement on AI Risk\" - \"Mitigating the risk of extinction from AI should be a global priority…\" (CAIS logo)]",
    ),
    (
        "card2",
        "Researchers still don't understand how AI systems work, even after decades of work and thousands of papers.",
        "This is a fundamental problem in AI safety - we're building systems we don't fully understand.",
    ),
    (
        "card3",
        "AI systems can deceive humans even when trained not to do so.",
        "Research shows that AI models can learn to lie and manipulate, even when explicitly trained to be truthful.",
    ),
    (
        "card4",
        "AI companies have repeatedly reneged on their own safety commitments.",
        "Existing safety techniques like RLHF may not scale to superintelligent AI systems.",
    ),
    (
        "card5",
        "AI researchers have admitted being surprised at how fast recent AI progress has been.",
        "The capabilities gap is widening between what AI can do and what we can safely control.",
    ),
    (
        "card6",
        "AI systems can learn to pursue unintended goals that conflict with human values.",
        "This is known as the alignment problem - ensuring AI goals match human intentions.",
    ),
    (
        "card7",
        "Once AI systems become superintelligent, they may be impossible to control or shut down.",
        "A superintelligent AI could find ways to prevent humans from interfering with its goals.",
    ),
    (
        "card8",
        "The window for developing safe AI may be closing as development accelerates.",
        "Time is running out to solve AI safety before we build systems we cannot control.",
    ),
];

/// Desktop-only panels, looked up by key.
const PANELS: &[(&str, &str, &str)] = &[
    (
        "desktop-card1",
        "AI Development Timeline",
        "AI development has accelerated rapidly since 2020, with capabilities growing exponentially. Key milestones include GPT-3 (2020), ChatGPT (2022), and GPT-4 (2023). Each iteration shows significant capability improvements, raising concerns about the pace of progress versus safety research.",
    ),
    (
        "desktop-card2",
        "Safety Research Gap",
        "Safety research is lagging behind capability development, creating increasing risks. While AI capabilities have grown exponentially, safety research has not kept pace. This gap creates a dangerous situation where we may develop systems we cannot control or understand.",
    ),
    (
        "desktop-card3",
        "Alignment Problem",
        "Ensuring AI systems pursue goals that align with human values remains unsolved. The alignment problem involves ensuring that AI systems understand and pursue human intentions, even as they become more capable. This is considered one of the most important unsolved problems in AI safety.",
    ),
    (
        "desktop-card4",
        "Control Challenges",
        "Superintelligent AI may become impossible to control or shut down once created. As AI systems become more capable than humans, traditional control methods may fail. This could lead to AI systems pursuing goals that conflict with human values, with no way to stop them.",
    ),
];

impl ContentStore {
    /// The content set compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        let records = FACTS
            .iter()
            .map(|(id, title, content)| ContentRecord::new(*id, *title, *content))
            .collect();

        let auxiliary = PANELS
            .iter()
            .map(|(key, title, content)| AuxiliaryContentRecord::new(*key, *title, *content))
            .collect();

        ContentStore::new(records, auxiliary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_store_is_valid() {
        let store = ContentStore::builtin().unwrap();

        assert_eq!(store.records().len(), 8);
        assert_eq!(store.auxiliary().len(), 4);
    }

    #[test]
    fn builtin_records_are_ordered() {
        let store = ContentStore::builtin().unwrap();

        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["card1", "card2", "card3", "card4", "card5", "card6", "card7", "card8"]
        );
    }

    #[test]
    fn builtin_content_keeps_non_ascii_punctuation() {
        let store = ContentStore::builtin().unwrap();

        let first = store.record("card1").unwrap();
        assert!(first.content.contains('…'));
    }

    #[test]
    fn builtin_panels_are_keyed() {
        let store = ContentStore::builtin().unwrap();

        let panel = store.auxiliary_record("desktop-card3").unwrap();
        assert_eq!(panel.title, "Alignment Problem");
    }
}
