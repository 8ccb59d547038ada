use common::cache::{QueryCache, QueryKey, IMAGE_STALE_TIME};
use common::display::{already_showing, initial_image, CardImage};
use common::models::{ImagesResponse, Project, ProjectImage};
use common::ticket::Ticket;
use crate::components::navbar::Route;
use crate::components::status_badge::StatusBadge;
use crate::components::tech_tags::TechTags;
use crate::config;
use crate::util::get;
use log::debug;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

type ImageFetch = Result<Option<ProjectImage>, Rc<anyhow::Error>>;

type ImageCache = QueryCache<QueryKey, Option<ProjectImage>, Rc<anyhow::Error>>;

thread_local! {
    // shared by every card on the page
    static IMAGE_CACHE: Rc<ImageCache> = Rc::new(QueryCache::new(IMAGE_STALE_TIME));
}

async fn first_image(uri: String) -> ImageFetch {
    let images = get::<ImagesResponse>(&uri).await.map_err(Rc::new)?;
    Ok(images.first_image())
}

/// Properties for the project card component.

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

/// A preview card for a project, linking to its page.
///
/// The card looks up the project's first image through the shared image cache
/// when it mounts or its project changes, ignoring any answer that arrives
/// for a project it no longer shows. Until that finishes it shows a
/// spinner; if the project has no image, or the request fails for any reason,
/// it shows a placeholder instead. The card itself never shows an error.

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let id = props.project.id;
    let image: UseStateHandle<Option<ImageFetch>> = use_state(|| {
        initial_image(IMAGE_CACHE.with(|cache| cache.peek(&QueryKey::project_image(id))))
    });

    {
        let image = image.clone();
        use_effect_with(id, move |&id| {
            let key = QueryKey::project_image(id);
            let cache = IMAGE_CACHE.with(Rc::clone);
            let ticket = Ticket::new();

            if let Some(hit) = cache.peek(&key) {
                if !already_showing((*image).as_ref(), &hit) {
                    image.set(Some(Ok(hit)));
                }
            } else {
                if image.is_some() {
                    image.set(None);
                }
                let uri = config::api().project_images_uri(id);
                let ticket = ticket.clone();
                spawn_local(async move {
                    let result = cache.fetch(key, move || first_image(uri)).await;
                    if let Err(err) = &result {
                        debug!("no image for project {}: {}", id, err);
                    }
                    if !ticket.apply(|| image.set(Some(result))) {
                        debug!("dropping image for project {}, card has moved on", id);
                    }
                });
            }

            move || ticket.retire()
        });
    }

    let project = &props.project;
    let image_view = match CardImage::from_fetch((*image).as_ref(), &project.title) {
        CardImage::Loading => html! {
            <div class="project-card-image loading">
                <div class="spinner" />
            </div>
        },
        CardImage::Image { src, alt } => html! {
            <div class="project-card-image">
                <img {src} {alt} loading="lazy" />
            </div>
        },
        CardImage::Placeholder => html! {
            <div class="project-card-image placeholder">
                <span class="placeholder-icon">{"▣"}</span>
            </div>
        },
    };

    html! {
        <Link<Route> to={Route::Project { id }} classes="project-card-link">
            <div class={classes!("project-card", project.featured.then_some("featured"))}>
                {image_view}
                <div class="project-card-body">
                    <div class="project-card-heading">
                        <h3>{project.title.clone()}</h3>
                        <StatusBadge status={project.status.clone()} />
                    </div>
                    <p class="project-card-description">{project.description.clone()}</p>
                    <TechTags technologies={project.technologies_used.clone()} />
                </div>
            </div>
        </Link<Route>>
    }
}
