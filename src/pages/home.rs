use yew::prelude::*;

use crate::pages::featured_projects::FeaturedProjects;
use crate::pages::hero::Hero;

#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top when arriving from another route.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <FeaturedProjects />
        </>
    }
}
