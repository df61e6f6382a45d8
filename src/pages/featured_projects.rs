use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::section_heading::SectionHeading;
use crate::projects;
use crate::Route;

#[function_component(FeaturedProjects)]
pub fn featured_projects() -> Html {
    html! {
        <section id="featured-projects" class="section-padding">
            <div class="container-custom">
                <div class="section-header-row">
                    <SectionHeading
                        label="Portfolio"
                        title="Featured Projects"
                        description={Some(AttrValue::from("Explore a selection of my recent work, showcasing clean code and thoughtful design."))}
                    />
                    <Link<Route> to={Route::Projects} classes="button-outline">
                        {"View All Projects ↗"}
                    </Link<Route>>
                </div>
                <div class="project-grid">
                    { for projects::featured().iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
