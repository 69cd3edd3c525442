//! Contact section: info cards plus the simulated-submission form.

use leptos::prelude::*;
use leptos::html::Section;

use crate::content::CONTACT_CARDS;
use crate::state::contact_form::{ContactForm, SubmitStatus};
use crate::util::reveal::{stagger_delay, use_reveal};

/// Run the deferred side of a submission: complete it after the fixed
/// delay, then dismiss the confirmation after its display window. Both
/// steps go through `try_update` with the submission token, so a disposed
/// component or a superseded submission is never mutated.
fn run_submission(form: RwSignal<ContactForm>, token: u32) {
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        use crate::state::contact_form::{CONFIRMATION_MS, SUBMIT_DELAY_MS};
        use std::time::Duration;

        gloo_timers::future::sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;
        if form.try_update(|f| f.complete_submit(token)) != Some(true) {
            return;
        }
        gloo_timers::future::sleep(Duration::from_millis(CONFIRMATION_MS)).await;
        let _ = form.try_update(|f| f.dismiss(token));
    });
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (form, token);
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);
    let form = RwSignal::new(ContactForm::default());

    let section_class = move || {
        if revealed.get() {
            "section is-revealed"
        } else {
            "section"
        }
    };

    let submitting = move || form.with(|f| f.status == SubmitStatus::Submitting);
    let submitted = move || form.with(|f| f.status == SubmitStatus::Submitted);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        log::info!("contact form accepted (simulated submission)");
        run_submission(form, token);
    };

    view! {
        <section id="contact" node_ref=section_ref class=section_class>
            <div class="section__inner">
                <header class="reveal section__header section__header--centered">
                    <p class="section__eyebrow">"Contact"</p>
                    <h2 class="section__title">"Let's Work Together"</h2>
                    <p class="section__lead">
                        "Have a project in mind? I'd love to hear about it. Let's discuss \
                         how we can bring your ideas to life."
                    </p>
                </header>

                <div class="contact">
                    <div class="reveal contact__cards" style:transition-delay="200ms">
                        {CONTACT_CARDS
                            .iter()
                            .enumerate()
                            .map(|(index, card)| {
                                let inner = view! {
                                    <h3 class="contact-card__title">{card.title}</h3>
                                    <p class="contact-card__value">{card.value}</p>
                                };
                                let delay = stagger_delay(index, 300, 100);
                                match card.link {
                                    Some(link) => view! {
                                        <a
                                            class="reveal contact-card"
                                            href=link
                                            target=link.starts_with("http").then_some("_blank")
                                            rel=link.starts_with("http").then_some("noopener noreferrer")
                                            style:transition-delay=delay
                                        >
                                            {inner}
                                        </a>
                                    }
                                        .into_any(),
                                    None => view! {
                                        <div
                                            class="reveal contact-card"
                                            style:transition-delay=delay
                                        >
                                            {inner}
                                        </div>
                                    }
                                        .into_any(),
                                }
                            })
                            .collect::<Vec<_>>()}

                        <div class="contact__availability">
                            <span class="contact__availability-dot"></span>
                            <span>"Available for new projects"</span>
                        </div>
                    </div>

                    <div class="reveal contact__form-panel" style:transition-delay="400ms">
                        <h3 class="contact__form-heading">"Send me a message"</h3>

                        <Show
                            when=submitted
                            fallback=move || {
                                view! {
                                    <form class="contact-form" on:submit=on_submit>
                                        <label class="contact-form__label">
                                            "Name"
                                            <input
                                                class="contact-form__input"
                                                type="text"
                                                placeholder="Your name"
                                                required=true
                                                prop:value=move || form.with(|f| f.name.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.name = event_target_value(&ev));
                                                }
                                            />
                                        </label>

                                        <label class="contact-form__label">
                                            "Email"
                                            <input
                                                class="contact-form__input"
                                                type="email"
                                                placeholder="your@email.com"
                                                required=true
                                                prop:value=move || form.with(|f| f.email.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.email = event_target_value(&ev));
                                                }
                                            />
                                        </label>

                                        <label class="contact-form__label">
                                            "Message"
                                            <textarea
                                                class="contact-form__input contact-form__input--area"
                                                rows="4"
                                                placeholder="Tell me about your project..."
                                                required=true
                                                prop:value=move || form.with(|f| f.message.clone())
                                                on:input=move |ev| {
                                                    form.update(|f| f.message = event_target_value(&ev));
                                                }
                                            ></textarea>
                                        </label>

                                        <button
                                            class="btn btn--primary contact-form__submit"
                                            type="submit"
                                            disabled=submitting
                                        >
                                            {move || {
                                                if submitting() { "Sending..." } else { "Send Message" }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="contact__confirmation">
                                <span class="contact__confirmation-mark">"\u{2713}"</span>
                                <h4>"Message sent!"</h4>
                                <p>"I'll get back to you as soon as possible."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
