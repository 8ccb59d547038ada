use yew::prelude::*;
use yew_router::prelude::*;
use common::display::site_display_name;
use crate::pages::error_page::fallback_page;
use crate::State;

/// A route enum containing all the routes in the app.

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    
    /// The route to the home page, the project list.
    
    #[at("/")]
    Home,
    
    /// The route to a single project.
    
    #[at("/projects/:id")]
    Project { id: i32 },
    
    /// The route to the error page. The error itself is described by the
    /// `error_code` and `error_message` query parameters.
    
    #[at("/error")]
    Error,
    
    /// The route for anything we don't know, shown as a 404.
    
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// A navbar with the site name, linking back home.

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let app_state = use_context::<State>();
    let Some(route) = use_route::<Route>() else { return fallback_page() };
    let site_name = site_display_name(app_state.as_ref().and_then(|s| s.site_settings.as_ref())).to_owned();
    
    html! {
        <div class="navbar">
            <div class="navbar-item">
                <Link<Route> to={Route::Home}>
                    <span class="site-name">{site_name}</span>
                </Link<Route>>
            </div>
            <div class="navbar-item">
                <Link<Route> to={Route::Home}>
                    <button class={if route == Route::Home {"button highlight"} else {"button"}}>{"projects"}</button>
                </Link<Route>>
            </div>
        </div>
    }
}
