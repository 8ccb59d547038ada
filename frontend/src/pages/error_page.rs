use yew::prelude::*;
use yew_router::prelude::*;
use common::display::{site_display_name, SUPPORT_EMAIL};
use common::error_info::ErrorContext;
use common::models::ErrorQuery;
use log::{debug, warn};
use time::OffsetDateTime;
use crate::components::navbar::Route;
use crate::util::error_query;
use crate::State;

/// A basic error page, to be displayed in extreme cases when we might not even
/// have the router.

pub fn fallback_page() -> Html {
    html! {
        <div style="text-align: center">
            <h2>{ "something went badly wrong" }</h2>
            <h2>{ "try refreshing the page" }</h2>
        </div>
    }
}

/// Sends the user to the error page for a request that failed.

pub fn redirect_to_error(navigator: Option<Navigator>, err: &anyhow::Error) {
    let Some(navigator) = navigator else { return };
    if let Err(nav_err) = navigator.replace_with_query(&Route::Error, &error_query(err)) {
        warn!("couldn't open the error page: {}", nav_err);
    }
}

/// The full page error view.
///
/// Everything shown comes from the `error_code` and `error_message` query
/// parameters, with a missing code treated as a 404. The primary action always
/// leads home, whatever its label says.

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let app_state = use_context::<State>();
    let Some(location) = use_location() else { return fallback_page() };

    let query = location.query::<ErrorQuery>().unwrap_or_else(|err| {
        debug!("couldn't read the error query, showing the default: {}", err);
        ErrorQuery::default()
    });
    let context = ErrorContext::from(query);
    let site_name = site_display_name(app_state.as_ref().and_then(|s| s.site_settings.as_ref())).to_owned();
    let year = OffsetDateTime::now_utc().year();

    html! {
        <div class="error-page">
            <div class="error-content">
                <h1 class="error-code">{context.code.clone()}</h1>
                <h2 class="error-title">{context.title()}</h2>
                <p class="error-description">{context.description().to_owned()}</p>

                <div class="error-actions">
                    <a class="button highlight" href={context.action_target()}>{context.action_label()}</a>
                    <Link<Route> to={Route::Home} classes="button">{"go to the home page"}</Link<Route>>
                </div>

                <p class="error-support">
                    {"If the problem keeps happening, "}
                    <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{"contact support"}</a>
                    {"."}
                </p>
            </div>

            <div class="footer">{format!("© {} {}", year, site_name)}</div>
        </div>
    }
}
