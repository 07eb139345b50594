use barbot_display::pages::HomePage;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn App() -> impl IntoView {
    view! { <HomePage /> }
}

fn main() {
    console_error_panic_hook::set_once();
    log!("mounting BarBot display");
    leptos::mount::mount_to_body(App)
}
