use yew::prelude::*;

use crate::animation::Animation;
use crate::components::reveal::Reveal;
use crate::projects::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    /// Position in the grid, staggers the entry animation.
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <Reveal animation={Animation::project_card(props.index)} class="project-card">
            <article>
                <div class="project-image">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    if let Some(url) = project.live_url {
                        <div class="project-overlay">
                            <a href={url} target="_blank" rel="noopener noreferrer" class="project-overlay-link" aria-label="Open live site">
                                {"↗"}
                            </a>
                        </div>
                    }
                </div>
                <span class="project-category">{project.category}</span>
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span key={*tag} class="project-tag">{*tag}</span> }) }
                </div>
                if let Some(url) = project.live_url {
                    <a href={url} target="_blank" rel="noopener noreferrer" class="project-live-link">
                        {"View Live Site"}
                    </a>
                }
            </article>
        </Reveal>
    }
}
