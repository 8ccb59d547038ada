use crate::models::{Project, ProjectImage, SiteSettings};

/// Shown wherever the site settings don't provide a title.

pub const DEFAULT_SITE_NAME: &str = "Project Showcase";

pub const SUPPORT_EMAIL: &str = "support@projectshowcase.dev";

/// Splits a comma separated technology list into tags, in order.
///
/// Segments are trimmed but empty ones are kept, so `"rust,"` gives
/// `["rust", ""]`. Returns `None` when there is no list at all, in which case
/// no tag section should be drawn.

pub fn technology_tags(technologies: Option<&str>) -> Option<Vec<&str>> {
    technologies.map(|t| t.split(',').map(str::trim).collect())
}

/// The style bucket a project status falls into.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusStyle {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatusStyle {
    pub fn for_status(status: &str) -> StatusStyle {
        match status.to_lowercase().as_str() {
            "live" => StatusStyle::Success,
            "in progress" => StatusStyle::Warning,
            "archived" => StatusStyle::Danger,
            _ => StatusStyle::Neutral,
        }
    }

    pub fn class(&self) -> &'static str {
        match *self {
            StatusStyle::Success => "badge badge-success",
            StatusStyle::Warning => "badge badge-warning",
            StatusStyle::Danger => "badge badge-danger",
            StatusStyle::Neutral => "badge badge-neutral",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusBadge<'a> {
    /// Always the status exactly as the api sent it.
    pub label: &'a str,
    pub style: StatusStyle,
}

pub fn status_badge(status: Option<&str>) -> Option<StatusBadge<'_>> {
    status.map(|label| StatusBadge {
        label,
        style: StatusStyle::for_status(label),
    })
}

/// Puts featured projects first, keeping the served order within each group.

pub fn featured_first(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_key(|p| !p.featured);
    projects
}

/// What the image slot of a project card shows.

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CardImage {
    Loading,
    Image { src: String, alt: String },
    Placeholder,
}

impl CardImage {

    /// Maps the state of a card's image fetch to what gets drawn. `None` means
    /// the fetch hasn't finished. A failed fetch looks exactly like a project
    /// with no images.

    pub fn from_fetch<E>(fetch: Option<&Result<Option<ProjectImage>, E>>, title: &str) -> CardImage {
        match fetch {
            None => CardImage::Loading,
            Some(Ok(Some(image))) => CardImage::Image {
                src: image.image_url.clone(),
                alt: match image.alt_text.as_deref() {
                    Some(alt) if !alt.is_empty() => alt.to_owned(),
                    _ => format!("{} project image", title),
                },
            },
            Some(Ok(None)) | Some(Err(_)) => CardImage::Placeholder,
        }
    }
}

/// The first state of a card's image slot, given what the image cache holds
/// for it. A fresh hit shows straight away, a miss starts out loading.

pub fn initial_image<E>(cached: Option<Option<ProjectImage>>) -> Option<Result<Option<ProjectImage>, E>> {
    cached.map(Ok)
}

/// Whether the image slot already shows `hit`, in which case setting it again
/// would only cost a render.

pub fn already_showing<E>(state: Option<&Result<Option<ProjectImage>, E>>, hit: &Option<ProjectImage>) -> bool {
    matches!(state, Some(Ok(current)) if current == hit)
}

/// The name to show for the site, falling back to [`DEFAULT_SITE_NAME`].

pub fn site_display_name(settings: Option<&SiteSettings>) -> &str {
    settings
        .and_then(|s| s.site_title.as_deref())
        .filter(|title| !title.trim().is_empty())
        .unwrap_or(DEFAULT_SITE_NAME)
}
