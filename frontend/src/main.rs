use yew::prelude::*;
use yew_router::prelude::*;
use common::display::site_display_name;
use common::models::SiteSettings;
use components::navbar::*;
use pages::error_page::ErrorPage;
use pages::project_page::ProjectPage;
use pages::projects_page::ProjectsPage;
use util::get;
use wasm_bindgen_futures::spawn_local;
use log::{info, warn};

mod pages;
mod components;
mod config;
mod util;

/// Global app state, shared through a context.

#[derive(Clone, Debug, PartialEq, Default)]
struct State {
    /// `None` until the settings load, and for good if they fail to.
    site_settings: Option<SiteSettings>,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <ProjectsPage />
        },
        Route::Project { id } => html! {
            <ProjectPage {id} />
        },
        Route::Error | Route::NotFound => html! {
            <ErrorPage />
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let site_settings: UseStateHandle<Option<SiteSettings>> = use_state(|| None);

    {
        let site_settings = site_settings.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get::<SiteSettings>(&config::api().site_settings_uri()).await {
                    Ok(settings) => {
                        gloo::utils::document().set_title(site_display_name(Some(&settings)));
                        site_settings.set(Some(settings));
                    }
                    Err(err) => warn!("couldn't load site settings: {}", err),
                }
            });

            || {}
        });
    }

    let state = State {
        site_settings: (*site_settings).clone(),
    };

    html! {
        <ContextProvider<State> context={state}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<State>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    console_error_panic_hook::set_once();
    info!("using api at {}", config::api().base());
    yew::Renderer::<App>::new().render();
}
