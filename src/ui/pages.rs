/// Placeholder pages for the hub routes
use yew::prelude::*;
use yew_router::prelude::*;

use crate::ui::Route;

/// Current path, shown on every page so navigation state is visible while
/// the real panels are still unbuilt.
#[function_component(RouteIndicator)]
fn route_indicator() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <p>{"Current route: "}<code>{path}</code></p>
    }
}

#[function_component(NavLinks)]
fn nav_links() -> Html {
    html! {
        <nav>
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Settings}>{"Settings"}</Link<Route>>
        </nav>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div>
            <h1>{"Welcome to Tabitha"}</h1>
            <RouteIndicator />
            <p>{"This is the main UI. Panels will be mounted here by the UIManager."}</p>
            <NavLinks />
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <div>
            <h1>{"Settings"}</h1>
            <RouteIndicator />
            <p>{"Application settings will be managed here."}</p>
            <NavLinks />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div>
            <h2>{"404: Not Found"}</h2>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Go to Home"}</Link<Route>>
        </div>
    }
}
