use common::display::technology_tags;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TechTagsProps {
    /// The raw comma separated list from the project.
    pub technologies: Option<AttrValue>,
}

#[function_component(TechTags)]
pub fn tech_tags(props: &TechTagsProps) -> Html {
    let Some(tags) = technology_tags(props.technologies.as_deref()) else { return html! {} };
    
    html! {
        <div class="tech-tags">
            { tags.into_iter().map(|tag| html! {
                <span class="tech-tag">{tag.to_owned()}</span>
            }).collect::<Html>() }
        </div>
    }
}
