use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::Animation;
use crate::components::notification::{use_notifier, Severity};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::contact::{ContactForm, Field, FormAction, Submission, TabOpen};

#[function_component(Contact)]
pub fn contact() -> Html {
    let notifier = use_notifier();
    let form = use_reducer(ContactForm::default);
    // Owns the simulated send; dropping the page drops and cancels it.
    let pending_send = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        let notifier = notifier.clone();
        let pending_send = pending_send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut attempt = (*form).clone();
            match attempt.submit() {
                Submission::Ignored => {}
                Submission::Rejected(err) => {
                    debug!("contact form rejected: {:?}", err);
                    notifier.error(err.to_string());
                }
                Submission::Started => {
                    info!("simulating contact form submission");
                    form.dispatch(FormAction::Submit);
                    let notifier = notifier.clone();
                    let dispatcher = form.dispatcher();
                    let timeout = Timeout::new(config::SIMULATED_SUBMIT_MS, move || {
                        if let Some(message) = attempt.settle() {
                            notifier.success(message);
                        }
                        dispatcher.dispatch(FormAction::Settle);
                    });
                    *pending_send.borrow_mut() = Some(timeout);
                }
            }
        })
    };

    let on_whatsapp = {
        let url = form.draft.whatsapp_url();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let window = match web_sys::window() {
                Some(window) => window,
                None => {
                    warn!("no window to open WhatsApp link from");
                    return;
                }
            };
            let opened = window.open_with_url_and_target(&url, "_blank");
            let outcome = TabOpen::from_result(&opened);
            match outcome {
                TabOpen::Opened => notifier.show(outcome.notice(), Severity::Info),
                TabOpen::Blocked => {
                    warn!("WhatsApp tab was blocked by the browser");
                    notifier.error(outcome.notice());
                }
                TabOpen::Failed => {
                    warn!("failed to open WhatsApp link: {:?}", opened);
                    notifier.error(outcome.notice());
                }
            }
        })
    };

    let bind_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let draft = &form.draft;
    let is_sending = form.is_sending();

    html! {
        <section class="section-padding contact-page">
            <style>
                {r#"
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 1.4fr;
                        gap: 4rem;
                        margin-top: 3rem;
                    }
                    .contact-info p { color: var(--muted); margin-bottom: 1.5rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
                    .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
                    .form-group label { font-size: 0.875rem; font-weight: 500; }
                    .form-group input, .form-group textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid var(--border);
                        background: var(--card);
                        color: inherit;
                        font: inherit;
                    }
                    .form-group textarea { min-height: 160px; resize: vertical; }
                    .form-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                    .whatsapp-button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 6px;
                        border: none;
                        background: #25d366;
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .hire-button:disabled { opacity: 0.7; cursor: not-allowed; }
                    @media (max-width: 900px) {
                        .contact-layout, .form-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container-custom">
                <SectionHeading
                    label="Contact"
                    title="Let's Work Together"
                    description={Some(AttrValue::from("Have a project in mind? Send me a message and I'll get back to you."))}
                />
                <div class="contact-layout">
                    <Reveal animation={Animation::fade_up(30.0, 0.6)} class="contact-info">
                        <p>{"I'm currently available for freelance work. Whether you need a new website, a redesign, or help with an existing project, let's talk."}</p>
                        <p>{"Prefer chatting? Fill in the form and send it straight to WhatsApp."}</p>
                    </Reveal>
                    <Reveal animation={Animation::fade_up(30.0, 0.6).with_delay(0.1)}>
                        <form id="contactForm" class="contact-form" onsubmit={onsubmit} novalidate={true}>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="name">{"Name"}</label>
                                    <input id="name" name="name" type="text" placeholder="Your name"
                                        value={draft.name.clone()} oninput={bind_input(Field::Name)} />
                                </div>
                                <div class="form-group">
                                    <label for="email">{"Email"}</label>
                                    <input id="email" name="email" type="email" placeholder="you@example.com"
                                        value={draft.email.clone()} oninput={bind_input(Field::Email)} />
                                </div>
                            </div>
                            <div class="form-group">
                                <label for="subject">{"Subject"}</label>
                                <input id="subject" name="subject" type="text" placeholder="What's this about?"
                                    value={draft.subject.clone()} oninput={bind_input(Field::Subject)} />
                            </div>
                            <div class="form-group">
                                <label for="message">{"Message"}</label>
                                <textarea id="message" name="message" placeholder="Tell me about your project"
                                    value={draft.message.clone()} oninput={on_message_input} />
                            </div>
                            <div class="form-actions">
                                <button type="submit" class="hire-button" disabled={is_sending}>
                                    { if is_sending { "Sending..." } else { "Send Message" } }
                                </button>
                                <button id="whatsappBtn" type="button" class="whatsapp-button" onclick={on_whatsapp}>
                                    {"Send via WhatsApp"}
                                </button>
                            </div>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
