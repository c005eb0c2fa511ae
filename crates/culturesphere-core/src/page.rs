use crate::domain::Domain;

/// A screen the user can be on. The slug doubles as assistant context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Music,
    Dining,
    Travel,
    Fashion,
    Learning,
    Wellness,
}

impl Page {
    pub fn all() -> [Page; 7] {
        [
            Page::Home,
            Page::Music,
            Page::Dining,
            Page::Travel,
            Page::Fashion,
            Page::Learning,
            Page::Wellness,
        ]
    }

    /// Position in `Page::all()`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Music => "music",
            Page::Dining => "dining",
            Page::Travel => "travel",
            Page::Fashion => "fashion",
            Page::Learning => "learning",
            Page::Wellness => "wellness",
        }
    }

    /// Domain tag used by the page's recommendation form.
    pub fn domain(&self) -> Domain {
        match self {
            Page::Home => Domain::General,
            Page::Music => Domain::Music,
            Page::Dining => Domain::Dining,
            Page::Travel => Domain::Travel,
            Page::Fashion => Domain::Fashion,
            Page::Learning => Domain::Learning,
            Page::Wellness => Domain::Wellness,
        }
    }

    pub fn from_domain(domain: Domain) -> Option<Self> {
        match domain {
            Domain::Music => Some(Page::Music),
            Domain::Dining => Some(Page::Dining),
            Domain::Travel => Some(Page::Travel),
            Domain::Fashion => Some(Page::Fashion),
            Domain::Learning => Some(Page::Learning),
            Domain::Wellness => Some(Page::Wellness),
            Domain::General => Some(Page::Home),
            Domain::Assistant => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            other => other.domain().display_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_uses_general_domain() {
        assert_eq!(Page::Home.domain(), Domain::General);
        assert_eq!(Page::Home.slug(), "home");
    }

    #[test]
    fn test_pages_map_back_from_their_domain() {
        for page in Page::all() {
            assert_eq!(Page::from_domain(page.domain()), Some(page));
        }
        assert_eq!(Page::from_domain(Domain::Assistant), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, page) in Page::all().into_iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }

    #[test]
    fn test_domain_pages_share_slug_with_domain() {
        for page in Page::all().into_iter().skip(1) {
            assert_eq!(page.slug(), page.domain().as_str());
        }
    }
}
