//! Greeting / thanks / farewell / website / location intents, checked before the
//! knowledge base. Triggers are plain substrings (no word boundaries), so "hi"
//! also fires inside "this".

/// A fixed intent: any trigger occurring in the lower-cased text selects it.
#[derive(Debug)]
pub struct SpecialIntent {
    pub name: &'static str,
    /// Lower-case literal alternatives.
    pub triggers: &'static [&'static str],
    pub responses: &'static [&'static str],
}

impl SpecialIntent {
    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// Checked in order; first match wins.
pub static SPECIAL_INTENTS: [SpecialIntent; 5] = [
    SpecialIntent {
        name: "greeting",
        triggers: &["hello", "hi", "hey", "namaste"],
        responses: &[
            "Namaste! 🌸 Welcome to Assam Down Town University Smart Assistant! How can I help you today?",
            "Hello! 😊 I'm here to assist you with ADTU information. What would you like to know?",
            "Hi there! 🎓 Ready to explore Assam Down Town University? Ask me about admissions, courses, or campus life!",
        ],
    },
    SpecialIntent {
        name: "thanks",
        triggers: &["thank you", "thanks", "dhanyabad"],
        responses: &[
            "You're most welcome! 😊 Feel free to ask if you need more information about ADTU.",
            "Happy to help! 🌟 Is there anything else you'd like to know about our university?",
            "You're welcome! 🙏 Visit www.adtu.in for detailed information.",
        ],
    },
    SpecialIntent {
        name: "farewell",
        triggers: &["bye", "goodbye", "see you"],
        responses: &[
            "Goodbye! 👋 Best wishes for your academic journey!",
            "Dhanyabaad! 🌸 Visit www.adtu.in for latest updates!",
            "See you! 🎓 Feel free to come back anytime!",
        ],
    },
    SpecialIntent {
        name: "website",
        triggers: &["website", "adtu.in", "online"],
        responses: &[
            "Our official website: www.adtu.in 📱 You'll find detailed information about admissions, courses, faculty, and campus life there!",
        ],
    },
    SpecialIntent {
        name: "location",
        triggers: &["assam", "guwahati", "northeast"],
        responses: &[
            "Yes! ADTU is located in beautiful Guwahati, Assam - the gateway to Northeast India! 🌄 Our campus offers a perfect blend of modern education and natural beauty.",
        ],
    },
];

/// First intent whose triggers occur anywhere in `text` (case-insensitive).
pub fn check_special_intents(text: &str) -> Option<&'static SpecialIntent> {
    let lowered = text.to_lowercase();
    SPECIAL_INTENTS.iter().find(|intent| intent.matches(&lowered))
}
