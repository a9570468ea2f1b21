use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Opaque handle to the artwork shown next to a sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum SportIcon {
    Shuttlecock,
    Ball,
    Hoop,
}

impl SportIcon {
    /// Single-cell glyph used by the terminal renderer
    pub fn glyph(&self) -> &'static str {
        match self {
            SportIcon::Shuttlecock => "⚑",
            SportIcon::Ball => "●",
            SportIcon::Hoop => "◎",
        }
    }
}

/// A bookable sport offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sport {
    /// Display name, also used as the navigation key
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: SportIcon,
}

impl Sport {
    pub const fn new(title: &'static str, subtitle: &'static str, icon: SportIcon) -> Self {
        Self {
            title,
            subtitle,
            icon,
        }
    }

    /// Case-insensitive substring match against title or subtitle.
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.subtitle.to_lowercase().contains(needle)
    }
}

/// Every sport the application offers, in display order
pub static SPORTS: [Sport; 3] = [
    Sport::new("Badminton", "Lapangan Badminton", SportIcon::Shuttlecock),
    Sport::new("Futsal", "Lapangan Futsal", SportIcon::Ball),
    Sport::new("Basket", "Lapangan Basket", SportIcon::Hoop),
];

/// The full catalog
pub fn catalog() -> &'static [Sport] {
    &SPORTS
}

/// Filters `sports` down to the entries whose title or subtitle contains `query`,
/// ignoring case. An empty query keeps everything. Order is preserved.
pub fn filter<'a>(sports: &'a [Sport], query: &str) -> Vec<&'a Sport> {
    let needle = query.to_lowercase();
    sports
        .iter()
        .filter(|sport| sport.matches_lowercase(&needle))
        .collect()
}
