use common::display::featured_first;
use common::models::Project;
use crate::components::project_card::ProjectCard;
use crate::pages::error_page::redirect_to_error;
use crate::config;
use crate::util::get;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// The home page: a grid of project cards, featured projects first.
///
/// If the project list can't be loaded the user is sent to the error page.

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects: UseStateHandle<Option<Vec<Project>>> = use_state(|| None);
    let navigator = use_navigator();

    {
        let projects = projects.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get::<Vec<Project>>(&config::api().projects_uri()).await {
                    Ok(list) => {
                        info!("loaded {} projects", list.len());
                        projects.set(Some(featured_first(list)));
                    }
                    Err(err) => {
                        warn!("couldn't load projects: {}", err);
                        redirect_to_error(navigator, &err);
                    }
                }
            });

            || {}
        });
    }

    html! {
        <div class="projects">
            { match (*projects).as_ref() {
                None => html! {
                    <div class="loading">{"loading projects..."}</div>
                },
                Some(list) if list.is_empty() => html! {
                    <div class="empty">{"no projects to show yet"}</div>
                },
                Some(list) => html! {
                    <div class="project-grid">
                        { list.iter().map(|project| html! {
                            <ProjectCard key={project.id.to_string()} project={project.clone()} />
                        }).collect::<Html>() }
                    </div>
                },
            } }
        </div>
    }
}
