use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

mod config;
mod projects;
mod animation;
mod parallax;
mod contact;
mod timing;
mod hooks {
    pub mod reveal;
    pub mod scroll;
    pub mod anchor;
}
mod components {
    pub mod notification;
    pub mod reveal;
    pub mod section_heading;
    pub mod project_card;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod featured_projects;
    pub mod projects;
    pub mod contact;
    pub mod not_found;
}

use components::{
    footer::Footer,
    notification::NotificationProvider,
};
use hooks::{
    anchor::use_smooth_anchor_scroll,
    scroll::use_header_shadow,
};
use pages::{
    home::Home,
    projects::Projects,
    contact::Contact,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Where a click landed, as far as the mobile menu cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuClick {
    Toggle,
    NavLink,
    InsidePanel,
    Outside,
}

impl MenuClick {
    /// Classifies a document-level click. Clicks on the toggle are left to the
    /// toggle's own handler.
    pub fn from_document(in_panel: bool, on_toggle: bool) -> Option<Self> {
        match (in_panel, on_toggle) {
            (_, true) => None,
            (true, false) => Some(MenuClick::InsidePanel),
            (false, false) => Some(MenuClick::Outside),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl Reducible for MenuState {
    type Action = MenuClick;

    fn reduce(self: Rc<Self>, click: Self::Action) -> Rc<Self> {
        let open = match click {
            MenuClick::Toggle => !self.open,
            MenuClick::NavLink | MenuClick::Outside => false,
            MenuClick::InsidePanel => self.open,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

fn node_contains(node: &NodeRef, target: Option<&Node>) -> bool {
    node.cast::<Node>()
        .map_or(false, |n| n.contains(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    let has_shadow = use_header_shadow();
    let panel_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let menu = menu.dispatcher();
        let panel_ref = panel_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let in_panel = node_contains(&panel_ref, target.as_ref());
            let on_toggle = node_contains(&toggle_ref, target.as_ref());
            if let Some(click) = MenuClick::from_document(in_panel, on_toggle) {
                menu.dispatch(click);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("toggling mobile menu");
            menu.dispatch(MenuClick::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuClick::NavLink))
    };

    let active = menu.open.then(|| "active");

    html! {
        <header class={classes!("header", has_shadow.then(|| "scrolled"))}>
            <div class="container-custom nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::OWNER_FIRST_NAME}<span class="accent">{"."}</span>
                </Link<Route>>

                <button
                    ref={toggle_ref}
                    class={classes!("nav-toggle", active)}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <span class="hamburger"></span>
                </button>
                <nav ref={panel_ref} id="nav" class={classes!("nav", active)}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes="nav-link">
                            {"Projects"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link nav-cta">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    use_smooth_anchor_scroll();

    html! {
        <BrowserRouter>
            <NotificationProvider>
                <style>
                    {r#"
                        :root {
                            --background: #0f0f14;
                            --foreground: #f4f4f5;
                            --muted: #a1a1aa;
                            --accent: #8b5cf6;
                            --border: rgba(255, 255, 255, 0.08);
                            --card: #17171f;
                        }
                        * { box-sizing: border-box; margin: 0; padding: 0; }
                        html { scroll-behavior: smooth; }
                        body {
                            background: var(--background);
                            color: var(--foreground);
                            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                            line-height: 1.6;
                        }
                        a { color: inherit; text-decoration: none; }
                        .accent { color: var(--accent); }
                        .container-custom { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                        .section-padding { padding: 6rem 0; }

                        .header {
                            position: sticky;
                            top: 0;
                            z-index: 100;
                            background: rgba(15, 15, 20, 0.85);
                            backdrop-filter: blur(10px);
                            transition: box-shadow 0.3s ease;
                        }
                        .header.scrolled { box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1); }
                        .nav-content { display: flex; align-items: center; justify-content: space-between; height: 72px; }
                        .nav-logo { font-size: 1.5rem; font-weight: 700; }
                        .nav { display: flex; gap: 2rem; align-items: center; }
                        .nav-link { color: var(--muted); font-weight: 500; transition: color 0.2s; }
                        .nav-link:hover { color: var(--foreground); }
                        .nav-cta { color: var(--accent); }
                        .nav-toggle { display: none; background: none; border: none; width: 32px; height: 32px; cursor: pointer; }
                        .hamburger, .hamburger::before, .hamburger::after {
                            display: block;
                            width: 24px;
                            height: 2px;
                            background: var(--foreground);
                            transition: transform 0.3s ease, background 0.3s ease;
                            position: relative;
                        }
                        .hamburger::before, .hamburger::after { content: ''; position: absolute; left: 0; }
                        .hamburger::before { top: -7px; }
                        .hamburger::after { top: 7px; }
                        .nav-toggle.active .hamburger { background: transparent; transform: rotate(45deg); }
                        .nav-toggle.active .hamburger::before { top: 0; }
                        .nav-toggle.active .hamburger::after { top: 0; transform: rotate(90deg); }

                        .section-heading { max-width: 36rem; }
                        .section-label { color: var(--accent); font-size: 0.875rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; }
                        .section-title { font-size: clamp(2rem, 4vw, 2.75rem); font-weight: 600; margin: 0.5rem 0 1rem; }
                        .section-description { color: var(--muted); }
                        .section-header-row { display: flex; justify-content: space-between; align-items: flex-end; gap: 1.5rem; margin-bottom: 3rem; flex-wrap: wrap; }

                        .hire-button {
                            display: inline-flex;
                            align-items: center;
                            gap: 0.5rem;
                            padding: 0.75rem 2rem;
                            font-weight: 700;
                            color: white;
                            background: #6c5ce7;
                            border: none;
                            border-radius: 6px;
                            box-shadow: 0px 5px 0px 0px #a29bfe;
                            transition: all 0.1s;
                            cursor: pointer;
                        }
                        .hire-button:hover { background: #5b4cdb; }
                        .hire-button:active { transform: translateY(5px); box-shadow: none; }
                        .button-outline {
                            display: inline-flex;
                            align-items: center;
                            padding: 0.75rem 1.5rem;
                            border: 1px solid var(--border);
                            border-radius: 6px;
                            font-weight: 500;
                            transition: border-color 0.2s;
                        }
                        .button-outline:hover { border-color: var(--accent); }

                        .project-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                        .project-image { position: relative; overflow: hidden; border-radius: 12px; aspect-ratio: 4 / 3; margin-bottom: 1.25rem; background: var(--card); }
                        .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                        .project-card:hover .project-image img { transform: scale(1.05); }
                        .project-overlay {
                            position: absolute;
                            inset: 0;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: rgba(108, 92, 231, 0.6);
                            opacity: 0;
                            transition: opacity 0.3s;
                        }
                        .project-card:hover .project-overlay { opacity: 1; }
                        .project-overlay-link { padding: 0.75rem 1rem; border-radius: 50%; background: var(--accent); color: white; }
                        .project-category { color: var(--accent); font-size: 0.875rem; font-weight: 500; }
                        .project-title { font-size: 1.25rem; font-weight: 600; margin: 0.25rem 0 0.5rem; }
                        .project-description { color: var(--muted); font-size: 0.875rem; margin-bottom: 1rem; }
                        .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
                        .project-tag { padding: 0.25rem 0.75rem; font-size: 0.75rem; border-radius: 999px; background: var(--card); }
                        .project-live-link { color: var(--accent); font-size: 0.875rem; font-weight: 500; }
                        .project-filters { display: flex; flex-wrap: wrap; gap: 0.75rem; margin: 2rem 0 3rem; }
                        .filter-button { padding: 0.5rem 1rem; border-radius: 999px; border: 1px solid var(--border); background: none; color: inherit; cursor: pointer; }
                        .filter-button.active { background: var(--accent); border-color: var(--accent); color: white; }
                        .projects-cta { margin-top: 4rem; display: flex; align-items: center; gap: 1.5rem; flex-wrap: wrap; }

                        .footer { border-top: 1px solid var(--border); padding: 2rem 0; }
                        .footer-content { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
                        .footer-logo { font-weight: 700; font-size: 1.25rem; }
                        .footer-copy { color: var(--muted); font-size: 0.875rem; }

                        @media (max-width: 1024px) {
                            .project-grid { grid-template-columns: repeat(2, 1fr); }
                        }
                        @media (max-width: 768px) {
                            .nav-toggle { display: block; }
                            .nav {
                                position: absolute;
                                top: 72px;
                                left: 0;
                                right: 0;
                                flex-direction: column;
                                gap: 1.25rem;
                                padding: 1.5rem;
                                background: var(--background);
                                border-bottom: 1px solid var(--border);
                                transform: translateY(-150%);
                                transition: transform 0.3s ease;
                            }
                            .nav.active { transform: translateY(0); }
                            .project-grid { grid-template-columns: 1fr; }
                        }
                    "#}
                </style>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </NotificationProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    debug_assert!(projects::ids_are_unique(projects::PROJECTS), "duplicate project ids");
    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(menu: Rc<MenuState>, click: MenuClick) -> Rc<MenuState> {
        menu.reduce(click)
    }

    #[test]
    fn nav_link_click_closes_open_panel() {
        let menu = click(Rc::new(MenuState::default()), MenuClick::Toggle);
        assert!(menu.open);
        // A link click reaches both the link wrapper and the document listener.
        let menu = click(menu, MenuClick::NavLink);
        let menu = click(menu, MenuClick::from_document(true, false).unwrap());
        assert!(!menu.open);
    }

    #[test]
    fn outside_click_closes_menu() {
        let menu = click(Rc::new(MenuState::default()), MenuClick::Toggle);
        assert_eq!(MenuClick::from_document(false, false), Some(MenuClick::Outside));
        assert!(!click(menu, MenuClick::Outside).open);
    }

    #[test]
    fn clicks_on_panel_or_toggle_keep_menu() {
        let open = click(Rc::new(MenuState::default()), MenuClick::Toggle);
        assert_eq!(MenuClick::from_document(false, true), None);
        assert_eq!(MenuClick::from_document(true, true), None);
        let still = click(open.clone(), MenuClick::InsidePanel);
        assert!(Rc::ptr_eq(&open, &still));
    }

    #[test]
    fn toggle_flips_and_closed_menu_ignores_closing_clicks() {
        let closed = Rc::new(MenuState::default());
        let again = click(closed.clone(), MenuClick::NavLink);
        assert!(Rc::ptr_eq(&closed, &again));
        let open = click(closed, MenuClick::Toggle);
        assert!(!click(open, MenuClick::Toggle).open);
    }

    #[test]
    fn routes_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/projects"), Some(Route::Projects));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::Contact.to_path(), "/contact");
    }
}
