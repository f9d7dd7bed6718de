//! Scroll-driven navigation state.
//!
//! Everything here is a pure function of the scroll offset, the viewport height and
//! the measured section layouts, so it runs the same in the browser and in tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Added to the scroll offset so the nav highlights the upcoming section slightly
/// before it reaches the top of the viewport.
pub const LOOKAHEAD_PX: f64 = 200.0;
/// Fraction of the viewport height the page must scroll past before the sticky nav shows.
pub const STICKY_NAV_RATIO: f64 = 0.8;
pub const NAV_BAR_HEIGHT: f64 = 80.0;
pub const NAV_PADDING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Projects,
    FunFacts,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::FunFacts,
        Section::Contact,
    ];

    /// Sections below the hero, in document order.
    pub const TRACKED: [Section; 3] = [Section::Projects, Section::FunFacts, Section::Contact];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::FunFacts => "funfacts",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Section::Home),
            "projects" => Ok(Section::Projects),
            "funfacts" => Ok(Section::FunFacts),
            "contact" => Ok(Section::Contact),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// Measured position of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub section: Section,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.height
    }
}

pub fn show_sticky_nav(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * STICKY_NAV_RATIO
}

/// Resolves the section to highlight.
///
/// Layouts are expected in document order and non-overlapping; the first one
/// containing the biased scroll position wins. When none does, `previous` is kept.
pub fn active_section(
    scroll_y: f64,
    viewport_height: f64,
    layouts: &[SectionLayout],
    previous: Section,
) -> Section {
    let position = scroll_y + LOOKAHEAD_PX;
    if position < viewport_height {
        return Section::Home;
    }
    layouts
        .iter()
        .find(|layout| layout.contains(position))
        .map(|layout| layout.section)
        .unwrap_or(previous)
}

/// Vertical offset to scroll to so `section` sits just below the sticky nav.
pub fn scroll_target(section: Section, offset_top: f64) -> f64 {
    match section {
        Section::Home => 0.0,
        _ => (offset_top - (NAV_BAR_HEIGHT - NAV_PADDING)).max(0.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionTracker {
    active: Section,
    sticky: bool,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn sticky(&self) -> bool {
        self.sticky
    }

    /// Recomputes both outputs; returns true if either changed.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64, layouts: &[SectionLayout]) -> bool {
        let next = SectionTracker {
            active: active_section(scroll_y, viewport_height, layouts, self.active),
            sticky: show_sticky_nav(scroll_y, viewport_height),
        };
        let changed = next != *self;
        *self = next;
        changed
    }
}
