use common::models::Project;
use common::ticket::Ticket;
use crate::components::navbar::Route;
use crate::components::status_badge::StatusBadge;
use crate::components::tech_tags::TechTags;
use crate::pages::error_page::redirect_to_error;
use crate::config;
use crate::util::get;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub id: i32,
}

/// The detail page for one project. An unknown project sends the user to the
/// error page with the api's status, usually a 404. Answers for a project the
/// page has already moved away from are ignored.

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let project: UseStateHandle<Option<Project>> = use_state(|| None);
    let navigator = use_navigator();

    {
        let project = project.clone();
        use_effect_with(props.id, move |&id| {
            let ticket = Ticket::new();
            if project.is_some() {
                project.set(None);
            }
            {
                let ticket = ticket.clone();
                spawn_local(async move {
                    let result = get::<Project>(&config::api().project_uri(id)).await;
                    if !ticket.is_live() {
                        debug!("dropping response for project {}, page has moved on", id);
                        return;
                    }
                    match result {
                        Ok(loaded) => project.set(Some(loaded)),
                        Err(err) => {
                            warn!("couldn't load project {}: {}", id, err);
                            redirect_to_error(navigator, &err);
                        }
                    }
                });
            }

            move || ticket.retire()
        });
    }

    let Some(project) = (*project).as_ref() else {
        return html! { <div class="loading">{"loading project..."}</div> };
    };

    html! {
        <div class="project">
            <div class="project-heading">
                <h2>{project.title.clone()}</h2>
                <StatusBadge status={project.status.clone()} />
            </div>
            if let Some(kind) = &project.project_type {
                <p class="project-type">{kind.clone()}</p>
            }
            if let Some(url) = &project.image_url {
                <div class="project-image">
                    <img src={url.clone()} alt={format!("{} project image", project.title)} />
                </div>
            }
            <p>{project.description.clone()}</p>
            <TechTags technologies={project.technologies_used.clone()} />
            <Link<Route> to={Route::Home} classes="button">{"back to projects"}</Link<Route>>
        </div>
    }
}
