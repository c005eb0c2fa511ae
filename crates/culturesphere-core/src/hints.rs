//! Rotating hint text for the floating widgets.

use std::time::Duration;

use crate::page::Page;

/// How often the bubble text advances.
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(6);

/// Which widget the hints are for. They only differ on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deck {
    Guide,
    Companion,
}

const GUIDE_HOME: &[&str] = &[
    "👋 Welcome to CultureSphere AI",
    "🎵 Press 1 to explore your musical vibe",
    "🧳 Ready for a soulful trip?",
    "🧥 Discover fashion by feeling",
    "🧘 Find your calm through taste",
    "📚 What would Kendrick recommend?",
    "🍽️ Taste the world through culture",
];

const COMPANION_HOME: &[&str] = &[
    "👋 Welcome to CultureSphere AI",
    "🎵 Press 1 to explore your musical vibe",
    "🧳 Ready for a soulful trip?",
    "📚 Ask what to read next",
    "🧠 Discover smarter insights",
    "🍽️ Find your taste profile",
    "✨ Let AI guide your journey",
];

const MUSIC: &[&str] = &[
    "🎵 What sounds move your soul?",
    "🎧 Let's find your musical DNA",
    "🎶 Discover sounds that resonate",
    "🎤 Music is the universal language",
];

const DINING: &[&str] = &[
    "🍽️ Taste follows your cultural heart",
    "🥘 Food is culture on a plate",
    "🍜 What flavors call to you?",
    "🍷 Dining is an art form",
];

const TRAVEL: &[&str] = &[
    "🧳 Where does your spirit want to go?",
    "✈️ Adventure awaits your taste",
    "🗺️ Explore through a cultural lens",
    "🌍 The world is your cultural canvas",
];

const FASHION: &[&str] = &[
    "🧥 Style is your cultural signature",
    "👗 Express your inner aesthetic",
    "✨ Fashion reflects your soul",
    "🎨 Wear your cultural identity",
];

const LEARNING: &[&str] = &[
    "📚 Knowledge shapes your taste",
    "🧠 Expand your cultural mind",
    "📖 What should you explore next?",
    "🎓 Learning is a cultural journey",
];

const WELLNESS: &[&str] = &[
    "🧘 Find peace through your taste",
    "💆 Wellness is deeply personal",
    "🌱 Nurture your cultural well-being",
    "☯️ Balance through understanding",
];

pub fn hints_for(page: Page, deck: Deck) -> &'static [&'static str] {
    match page {
        Page::Home => match deck {
            Deck::Guide => GUIDE_HOME,
            Deck::Companion => COMPANION_HOME,
        },
        Page::Music => MUSIC,
        Page::Dining => DINING,
        Page::Travel => TRAVEL,
        Page::Fashion => FASHION,
        Page::Learning => LEARNING,
        Page::Wellness => WELLNESS,
    }
}

/// Cycles through the hints for the current page.
#[derive(Debug, Clone)]
pub struct HintRotator {
    deck: Deck,
    page: Page,
    index: usize,
}

impl HintRotator {
    pub fn new(deck: Deck, page: Page) -> Self {
        Self { deck, page, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        let hints = hints_for(self.page, self.deck);
        hints[self.index % hints.len()]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        let len = hints_for(self.page, self.deck).len();
        self.index = (self.index + 1) % len;
    }

    /// Switch page context. Resets to the first hint when the page changes.
    pub fn set_page(&mut self, page: Page) {
        if page != self.page {
            self.page = page;
            self.index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        let mut rotator = HintRotator::new(Deck::Guide, Page::Music);
        let len = hints_for(Page::Music, Deck::Guide).len();
        for _ in 0..len {
            rotator.advance();
        }
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), MUSIC[0]);
    }

    #[test]
    fn test_page_change_resets_index() {
        let mut rotator = HintRotator::new(Deck::Guide, Page::Home);
        for _ in 0..5 {
            rotator.advance();
        }
        assert_eq!(rotator.index(), 5);

        rotator.set_page(Page::Wellness);
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), WELLNESS[0]);
    }

    #[test]
    fn test_same_page_keeps_position() {
        let mut rotator = HintRotator::new(Deck::Companion, Page::Dining);
        rotator.advance();
        rotator.set_page(Page::Dining);
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds_for_every_page() {
        for deck in [Deck::Guide, Deck::Companion] {
            for page in Page::all() {
                let mut rotator = HintRotator::new(deck, page);
                for _ in 0..50 {
                    rotator.advance();
                    assert!(rotator.index() < hints_for(page, deck).len());
                }
            }
        }
    }

    #[test]
    fn test_decks_differ_only_on_home() {
        assert_ne!(hints_for(Page::Home, Deck::Guide), hints_for(Page::Home, Deck::Companion));
        assert_eq!(hints_for(Page::Travel, Deck::Guide), hints_for(Page::Travel, Deck::Companion));
    }
}
