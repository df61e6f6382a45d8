use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{Animation, Stagger, Variant};
use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::reveal::{use_reveal, RevealOptions};
use crate::hooks::scroll::use_section_progress;
use crate::parallax::ParallaxFrame;
use crate::Route;

const STAR_COUNT: usize = 20;

#[derive(Clone, PartialEq)]
struct Star {
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
}

fn scatter_stars() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            duration: 2.0 + Math::random() * 2.0,
            delay: Math::random() * 2.0,
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let progress = use_section_progress(section.clone());
    let frame = ParallaxFrame::at(progress);
    let stars = use_state(scatter_stars);

    let content = use_node_ref();
    let content_variant = Variant::from_revealed(use_reveal(content.clone(), RevealOptions::HERO));
    let item_style = |index: usize| Stagger::HERO.apply(Animation::hero_item(), index).style(content_variant);

    html! {
        <section ref={section} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-layers { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(88, 28, 135, 0.2), transparent 60%);
                    }
                    .hero-grid-pattern {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(rgba(139,92,246,0.03) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(139,92,246,0.03) 1px, transparent 1px);
                        background-size: 50px 50px;
                    }
                    .hero-orb { position: absolute; border-radius: 50%; filter: blur(64px); }
                    .hero-orb.one { top: 5rem; left: 10%; width: 18rem; height: 18rem; background: rgba(168, 85, 247, 0.1); }
                    .hero-orb.two { top: 10rem; right: 15%; width: 24rem; height: 24rem; background: rgba(139, 92, 246, 0.1); }
                    .hero-orb.three { bottom: 5rem; left: 30%; width: 20rem; height: 20rem; background: rgba(99, 102, 241, 0.1); }
                    .hero-stars { position: absolute; inset: 0; }
                    .hero-star {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(216, 180, 254, 0.4);
                        animation-name: twinkle;
                        animation-iteration-count: infinite;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0.2; transform: scale(1); }
                        50% { opacity: 0.8; transform: scale(1.5); }
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .hero-content > * + * { margin-top: 2rem; }
                    .hero-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        background: rgba(108, 92, 231, 0.1);
                        border: 1px solid rgba(108, 92, 231, 0.2);
                        color: var(--accent);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; font-weight: 600; }
                    .hero-subtitle { font-size: 1.2rem; color: var(--muted); max-width: 32rem; }
                    .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                    .hero-stats { display: flex; gap: 2rem; padding-top: 2rem; border-top: 1px solid var(--border); }
                    .hero-stat-value { font-size: 1.9rem; font-weight: 600; }
                    .hero-stat-label { font-size: 0.875rem; color: var(--muted); }
                    .hero-visual { position: relative; aspect-ratio: 1; max-width: 32rem; margin: 0 auto; width: 100%; }
                    .hero-ring-slot { position: absolute; inset: 0; }
                    .hero-ring { position: absolute; border-radius: 50%; }
                    .hero-ring.outer { inset: 0; border: 2px dashed rgba(108, 92, 231, 0.2); animation: spin 30s linear infinite; }
                    .hero-ring.middle { inset: 2rem; border: 2px solid rgba(108, 92, 231, 0.1); }
                    .hero-ring.inner { inset: 4rem; background: rgba(108, 92, 231, 0.05); }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .hero-avatar-wrap { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
                    .hero-avatar {
                        width: 12rem;
                        height: 12rem;
                        border-radius: 50%;
                        border: 4px solid var(--accent);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.25rem;
                        font-weight: 600;
                        color: var(--accent);
                        background: rgba(108, 92, 231, 0.1);
                        overflow: hidden;
                        position: relative;
                    }
                    .hero-avatar img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                    .hero-chip {
                        position: absolute;
                        padding: 0.5rem 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        animation: float 4s ease-in-out infinite;
                    }
                    .hero-chip.html { top: 5rem; right: 0; }
                    .hero-chip.js { bottom: 5rem; left: 0; animation-delay: -2s; }
                    .hero-chip.css { bottom: 8rem; right: 2rem; animation-delay: -1s; }
                    @keyframes float {
                        0%, 100% { translate: 0 -10px; }
                        50% { translate: 0 10px; }
                    }
                    .scroll-cue { display: inline-block; color: var(--muted); font-size: 0.875rem; }
                    @media (max-width: 1024px) {
                        .hero-inner { grid-template-columns: 1fr; gap: 3rem; }
                    }
                "#}
            </style>

            <div class="hero-layers" aria-hidden="true">
                <div class="hero-gradient" style={frame.background_style()}></div>
                <div class="hero-orb one" style={frame.orb_style(0)}></div>
                <div class="hero-orb two" style={frame.orb_style(1)}></div>
                <div class="hero-orb three" style={frame.orb_style(2)}></div>
                <div class="hero-stars" style={frame.stars_style()}>
                    { for stars.iter().map(|star| html! {
                        <div
                            class="hero-star"
                            style={format!(
                                "left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}s;",
                                star.left, star.top, star.duration, star.delay
                            )}
                        ></div>
                    }) }
                </div>
                <div class="hero-grid-pattern" style={frame.background_style()}></div>
            </div>

            <div class="container-custom hero-inner">
                <div ref={content} class="hero-content">
                    <div style={item_style(0)}>
                        <span class="hero-badge">{"✦ Available for Freelance Projects"}</span>
                    </div>
                    <h1 class="hero-title" style={item_style(1)}>
                        {config::OWNER_FIRST_NAME}<br />
                        <span class="accent">{config::OWNER_LAST_NAME}</span>
                    </h1>
                    <p class="hero-subtitle" style={item_style(2)}>
                        {format!(
                            "{} building fast, responsive, and user-focused websites that turn design concepts into accessible digital experiences.",
                            config::OWNER_ROLE
                        )}
                    </p>
                    <div class="hero-actions" style={item_style(3)}>
                        <Link<Route> to={Route::Contact} classes="hire-button">
                            {"Hire Me →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Projects} classes="button-outline">
                            {"View Portfolio"}
                        </Link<Route>>
                    </div>
                    <div class="hero-stats" style={item_style(4)}>
                        <div>
                            <Reveal animation={Animation::pop(0.5, 0.5).with_delay(0.6)}>
                                <p class="hero-stat-value">{"1"}</p>
                            </Reveal>
                            <p class="hero-stat-label">{"Year Experience"}</p>
                        </div>
                        <div>
                            <Reveal animation={Animation::pop(0.5, 0.5).with_delay(0.7)}>
                                <p class="hero-stat-value">{"1"}</p>
                            </Reveal>
                            <p class="hero-stat-label">{"Project & Growing"}</p>
                        </div>
                    </div>
                    <a href="#featured-projects" class="scroll-cue" style={item_style(5)}>
                        {"↓ See featured work"}
                    </a>
                </div>

                <Reveal animation={Animation::hero_portrait()} options={RevealOptions::HERO}>
                    <div class="hero-visual">
                        <Reveal animation={Animation::pop(0.5, 1.0).with_delay(0.2)} class="hero-ring-slot">
                            <div class="hero-ring outer"></div>
                        </Reveal>
                        <Reveal animation={Animation::pop(0.5, 1.0).with_delay(0.3)} class="hero-ring-slot">
                            <div class="hero-ring middle"></div>
                        </Reveal>
                        <Reveal animation={Animation::pop(0.5, 1.0).with_delay(0.4)} class="hero-ring-slot">
                            <div class="hero-ring inner"></div>
                        </Reveal>
                        <div class="hero-avatar-wrap">
                            <Reveal animation={Animation::hero_avatar()}>
                                <div class="hero-avatar">
                                    <img
                                        src="/assets/michael-profile.jpg"
                                        alt={format!("{} {}", config::OWNER_FIRST_NAME, config::OWNER_LAST_NAME)}
                                        onerror={Callback::from(|e: Event| {
                                            // Fall back to the initials underneath.
                                            let img: web_sys::HtmlElement = e.target_unchecked_into();
                                            let _ = img.style().set_property("display", "none");
                                        })}
                                    />
                                    <span>{config::OWNER_INITIALS}</span>
                                </div>
                            </Reveal>
                        </div>
                        <Reveal animation={Animation::slide_x(50.0, 0.6).with_delay(0.5)} class="hero-chip html">
                            {"HTML5"}
                        </Reveal>
                        <Reveal animation={Animation::slide_x(-50.0, 0.6).with_delay(0.6)} class="hero-chip js">
                            {"JavaScript"}
                        </Reveal>
                        <Reveal animation={Animation::fade_up(50.0, 0.6).with_delay(0.7)} class="hero-chip css">
                            {"CSS3"}
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
