use ratatui::style::Color;
use culturesphere_core::Domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colours for one theme. Built fresh per frame and passed to every renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub error: Color,
    pub user: Color,
    pub assistant: Color,
    pub bubble_bg: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙 dark",
            Theme::Light => "☀️ light",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg: Color::Rgb(15, 23, 42),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(71, 85, 105),
                accent: Color::Rgb(167, 139, 250),
                highlight_bg: Color::Rgb(51, 65, 85),
                error: Color::Rgb(252, 165, 165),
                user: Color::Rgb(196, 181, 253),
                assistant: Color::Rgb(226, 232, 240),
                bubble_bg: Color::Rgb(30, 41, 59),
            },
            Theme::Light => Palette {
                bg: Color::Rgb(248, 250, 252),
                fg: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                accent: Color::Rgb(124, 58, 237),
                highlight_bg: Color::Rgb(226, 232, 240),
                error: Color::Rgb(185, 28, 28),
                user: Color::Rgb(109, 40, 217),
                assistant: Color::Rgb(30, 41, 59),
                bubble_bg: Color::Rgb(255, 255, 255),
            },
        }
    }
}

/// Signature colour of each domain page.
pub fn domain_color(domain: Domain) -> Color {
    match domain {
        Domain::Music => Color::Magenta,
        Domain::Dining => Color::LightRed,
        Domain::Travel => Color::LightBlue,
        Domain::Fashion => Color::LightMagenta,
        Domain::Learning => Color::Green,
        Domain::Wellness => Color::Cyan,
        Domain::General | Domain::Assistant => Color::LightMagenta,
    }
}
