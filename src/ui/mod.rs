/// Routed hub-page UI and its mount point
pub mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::bridge::WebExtensionBridge;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::startup::{check_bridge, ROOT_ELEMENT_MISSING, UI_BRIDGE_MISSING, UI_BRIDGE_READY};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::Home /> },
        Route::Settings => html! { <pages::SettingsPage /> },
        Route::NotFound => html! { <pages::NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Report bridge health once on mount, the UI-side half of the startup
    // protocol. Message sending belongs to MessageBrokerConnector once it
    // exists.
    use_effect_with((), move |_| {
        check_bridge(
            &WebExtensionBridge,
            &ConsoleSink,
            UI_BRIDGE_READY,
            UI_BRIDGE_MISSING,
        );
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Mount the routed tree onto the page's `#app` node.
///
/// The attachment point is looked up exactly once. When it is missing there
/// is nothing to recover onto, so the failure is reported and the UI stays
/// unrendered.
pub fn mount(sink: &dyn DiagnosticSink) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => sink.error(ROOT_ELEMENT_MISSING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/settings"), Some(Route::Settings));
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/unknown-route"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/settings/nested"), Some(Route::NotFound));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Settings.to_path(), "/settings");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
