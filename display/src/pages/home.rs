use leptos::prelude::*;

use crate::markup::{Element, Node};
use crate::state::HomeState;
use crate::view::{render_home, HomeView, TITLE};

// Style hooks for the stylesheet shipped with the kiosk.
pub const HOME_PAGE_CLASS: &str = "HomePage";
pub const HEADER_TEXT_CLASS: &str = "HeaderText";
pub const NOT_AVAILABLE_CONTAINER_CLASS: &str = "NotAvailableContainer";
pub const NOT_AVAILABLE_CLASS: &str = "NotAvailable";

impl HomeView {
    /// Builds the markup for this variant: container, heading and, for an
    /// empty list, the notice block.
    pub fn to_markup(&self) -> Node {
        let mut page = Element::new("div")
            .class(HOME_PAGE_CLASS)
            .child(Element::new("h1").class(HEADER_TEXT_CLASS).child(TITLE));

        if let Some(notice) = self.notice() {
            page = page.child(
                Element::new("div")
                    .class(NOT_AVAILABLE_CONTAINER_CLASS)
                    .children(notice.lines.iter().map(|line| {
                        Node::from(Element::new("h3").class(NOT_AVAILABLE_CLASS).child(*line))
                    })),
            );
        }

        page.into()
    }
}

/// Markup of the home page for `state`.
pub fn home_markup(state: &HomeState) -> Node {
    render_home(state).to_markup()
}

/// Landing page of the kiosk. Owns its state, which starts with no cocktails.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(HomeState::new());

    view! { <HomeContent state=state.read_only() /> }
}

#[component]
pub fn HomeContent(#[prop(into)] state: Signal<HomeState>) -> impl IntoView {
    let home_view = Memo::new(move |_| state.with(render_home));

    view! {
        <div class=HOME_PAGE_CLASS>
            <h1 class=HEADER_TEXT_CLASS>{TITLE}</h1>
            {move || match home_view.get() {
                HomeView::EmptyNotice(notice) => {
                    view! {
                        <div class=NOT_AVAILABLE_CONTAINER_CLASS>
                            {notice
                                .lines
                                .into_iter()
                                .map(|line| view! { <h3 class=NOT_AVAILABLE_CLASS>{line}</h3> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
                HomeView::Populated { .. } => view! {}.into_any(),
            }}
        </div>
    }
}
