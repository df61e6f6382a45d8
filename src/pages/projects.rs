use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::section_heading::SectionHeading;
use crate::projects;
use crate::Route;

#[function_component(Projects)]
pub fn projects_page() -> Html {
    let category = use_state(|| None::<&'static str>);

    let select = |choice: Option<&'static str>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(choice))
    };

    let filter_button = |label: &'static str, choice: Option<&'static str>| {
        let active = *category == choice;
        html! {
            <button
                key={label}
                class={classes!("filter-button", active.then(|| "active"))}
                onclick={select(choice)}
            >
                {label}
            </button>
        }
    };

    html! {
        <section class="section-padding">
            <div class="container-custom">
                <SectionHeading
                    label="Portfolio"
                    title="All Projects"
                    description={Some(AttrValue::from("Websites and applications I've designed and built."))}
                />
                <div class="project-filters">
                    { filter_button("All", None) }
                    { for projects::categories().into_iter().map(|c| filter_button(c, Some(c))) }
                </div>
                <div class="project-grid">
                    { for projects::by_category(*category).into_iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project} index={index} />
                    }) }
                </div>
                <div class="projects-cta">
                    <p>{"Have a project in mind?"}</p>
                    <Link<Route> to={Route::Contact} classes="hire-button">
                        {"Let's talk"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
