//! Welcome screen content.
//!
//! The greeting that opens every conversation, plus the feature overview and
//! popular questions shown before the first message is sent.

/// The bot entry every conversation starts with, and returns to on clear.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Terraria Helper. I can answer questions about items, NPCs, bosses, crafting, and gameplay mechanics. What would you like to know?";

/// Heading of the welcome screen.
pub const TITLE: &str = "Welcome to Your Terraria Companion";

/// One-paragraph pitch under the heading.
pub const TAGLINE: &str = "Get instant answers to your Terraria questions with our AI-powered chatbot. From crafting recipes to boss strategies, we've got you covered!";

/// A topic the helper can answer questions about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Short heading of the topic.
    pub title: &'static str,
    /// One-sentence summary of what can be asked.
    pub description: &'static str,
}

/// The topics advertised on the welcome screen.
pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Weapons & Items",
        description: "Get detailed information about any weapon, tool, or item in Terraria",
    },
    Feature {
        title: "Boss Strategies",
        description: "Learn effective strategies for defeating all bosses",
    },
    Feature {
        title: "NPCs & Housing",
        description: "Understand NPC requirements and housing mechanics",
    },
    Feature {
        title: "Crafting Recipes",
        description: "Discover crafting recipes and progression paths",
    },
];

/// Suggested first questions, selectable by 1-based number.
pub const POPULAR_QUESTIONS: [&str; 5] = [
    "How do I defeat the Eye of Cthulhu?",
    "What's the best weapon for a mage build?",
    "How do I get the Goblin Tinkerer?",
    "What are the housing requirements for NPCs?",
    "How do I enter hardmode?",
];

/// Look up a popular question by its 1-based number.
pub fn popular_question(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| POPULAR_QUESTIONS.get(index))
        .copied()
}

/// Render the welcome screen as plain text.
pub fn welcome_text() -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(TAGLINE);
    out.push_str("\n\n");
    for feature in FEATURES.iter() {
        out.push_str(&format!("  * {}: {}\n", feature.title, feature.description));
    }
    out.push_str("\nPopular Questions (type /ask <n>):\n");
    for (index, question) in POPULAR_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, question));
    }
    out
}
