use serde::{Deserialize, Serialize};

/// Domain tag sent with every recommendation request.
///
/// Always serialised lower-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Music,
    Dining,
    Travel,
    Fashion,
    Learning,
    Wellness,
    General,
    Assistant,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Music => "music",
            Domain::Dining => "dining",
            Domain::Travel => "travel",
            Domain::Fashion => "fashion",
            Domain::Learning => "learning",
            Domain::Wellness => "wellness",
            Domain::General => "general",
            Domain::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "music" => Some(Domain::Music),
            "dining" => Some(Domain::Dining),
            "travel" => Some(Domain::Travel),
            "fashion" => Some(Domain::Fashion),
            "learning" => Some(Domain::Learning),
            "wellness" => Some(Domain::Wellness),
            "general" => Some(Domain::General),
            "assistant" => Some(Domain::Assistant),
            _ => None,
        }
    }

    /// The six domains that have their own page, in display order.
    pub fn cultural() -> [Domain; 6] {
        [
            Domain::Music,
            Domain::Dining,
            Domain::Travel,
            Domain::Fashion,
            Domain::Learning,
            Domain::Wellness,
        ]
    }

    /// Page content for the cultural domains. `None` for `general` and `assistant`.
    pub fn content(&self) -> Option<&'static DomainContent> {
        match self {
            Domain::Music => Some(&MUSIC),
            Domain::Dining => Some(&DINING),
            Domain::Travel => Some(&TRAVEL),
            Domain::Fashion => Some(&FASHION),
            Domain::Learning => Some(&LEARNING),
            Domain::Wellness => Some(&WELLNESS),
            Domain::General | Domain::Assistant => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Music => "Music",
            Domain::Dining => "Dining",
            Domain::Travel => "Travel",
            Domain::Fashion => "Fashion",
            Domain::Learning => "Learning",
            Domain::Wellness => "Wellness",
            Domain::General => "General",
            Domain::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static copy shown on a domain page.
#[derive(Debug)]
pub struct DomainContent {
    pub icon: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub examples: &'static [&'static str],
}

static MUSIC: DomainContent = DomainContent {
    icon: "🎵",
    tagline: "Discover sounds that resonate with your soul",
    description: "Discover sounds that resonate with your soul and cultural DNA",
    placeholder: "Example: \"I like Sampha and FKA twigs, want chill songs for late-night creative sessions...\"",
    examples: &[
        "I love Solange and jazz, looking for creative inspiration",
        "Into indie rock and minimalism, planning a road trip",
        "Beyoncé",
        "Ed Sheeran",
        "Kirk Franklin",
        "Feeling nostalgic, I grew up with 90s R&B",
    ],
};

static DINING: DomainContent = DomainContent {
    icon: "🍽️",
    tagline: "Find flavors that match your cultural palate",
    description: "Find flavors that match your cultural palate and lifestyle",
    placeholder: "Example: \"I'm into indie rock and minimalism. Where should I eat in Brooklyn?\"",
    examples: &[
        "Love Ethiopian food and jazz culture, visiting Portland",
        "Vegetarian who enjoys art galleries and poetry",
        "The French Laundry",
        "Eleven Madison Park",
        "Blue Hill at Stone Barns",
        "Into Korean culture and late-night creative work",
    ],
};

static TRAVEL: DomainContent = DomainContent {
    icon: "🧳",
    tagline: "Explore destinations aligned with your spirit",
    description: "Explore destinations aligned with your spirit and interests",
    placeholder: "Example: \"Planning a budget solo trip, I love jazz and old architecture...\"",
    examples: &[
        "Amsterdam",
        "New York City",
        "Machu Picchu",
        "Into wellness retreats and natural hot springs",
        "Fascinated by film history and vintage bookstores",
    ],
};

static FASHION: DomainContent = DomainContent {
    icon: "🧥",
    tagline: "Express your identity through style",
    description: "Express your identity through style that reflects your essence",
    placeholder: "Example: \"I dress like Solange and love sci-fi films, looking for sustainable brands...\"",
    examples: &[
        "Inspired by 90s hip-hop and minimal Japanese design",
        "Love vintage finds and indie music aesthetics",
        "Chanel",
        "Nike",
        "Zara",
        "Into sustainable fashion and earthy tones",
    ],
};

static LEARNING: DomainContent = DomainContent {
    icon: "📚",
    tagline: "Expand your mind with curated knowledge",
    description: "Expand your mind with curated knowledge paths tailored to your interests",
    placeholder: "Example: \"I love Dune and Kendrick Lamar. What should I explore intellectually?\"",
    examples: &[
        "Fascinated by Afrofuturism and space exploration",
        "Love philosophy and experimental music",
        "Dune",
        "The Great Gatsby",
        "Pride and Prejudice",
        "Into psychology and human behavior patterns",
    ],
};

static WELLNESS: DomainContent = DomainContent {
    icon: "🧘",
    tagline: "Nurture your well-being with personalized guidance",
    description: "Nurture your well-being with personalized guidance for mind, body, and soul",
    placeholder: "Example: \"Feeling anxious lately. I listen to lo-fi and love nature walks...\"",
    examples: &[
        "Stressed with work, love meditation and indie music",
        "Want to build better habits, inspired by minimalism",
        "Seeking balance between creativity and productivity",
    ],
};
