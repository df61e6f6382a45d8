use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section-padding not-found">
            <div class="container-custom">
                <h1 class="section-title">{"404"}</h1>
                <p class="section-description">{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="button-outline">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}
