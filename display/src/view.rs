use crate::state::HomeState;

/// Heading shown on every render of the home page.
pub const TITLE: &str = "BarBot";

/// The two lines shown while no cocktails are on offer.
pub const NOT_AVAILABLE_LINES: [&str; 2] = [
    "No cocktails are available right now.",
    "Please check back later.",
];

/// Notice block shown in place of the cocktail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub lines: [&'static str; 2],
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            lines: NOT_AVAILABLE_LINES,
        }
    }
}

/// What the home page shows below its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    /// No cocktails on offer, show the "unavailable" notice.
    EmptyNotice(Notice),
    /// At least one cocktail on offer. Nothing is listed for these yet.
    Populated { cocktails: usize },
}

impl HomeView {
    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            HomeView::EmptyNotice(notice) => Some(notice),
            HomeView::Populated { .. } => None,
        }
    }
}

/// Picks the home page variant for the given state. Pure and total.
pub fn render_home(state: &HomeState) -> HomeView {
    if state.cocktail_list.is_empty() {
        HomeView::EmptyNotice(Notice::default())
    } else {
        HomeView::Populated {
            cocktails: state.cocktail_list.len(),
        }
    }
}
