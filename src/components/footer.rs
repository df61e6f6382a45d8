use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container-custom footer-content">
                <Link<Route> to={Route::Home} classes="footer-logo">
                    {config::OWNER_FIRST_NAME}<span class="accent">{"."}</span>
                </Link<Route>>
                <p class="footer-copy">
                    {format!("© {} {} {}. All rights reserved.", year, config::OWNER_FIRST_NAME, config::OWNER_LAST_NAME)}
                </p>
            </div>
        </footer>
    }
}
