//! Landing section: greeting, typewriter headline, calls to action.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{EMAIL_URL, GITHUB_URL, HERO_HEADLINE, OWNER_NAME};
use crate::util::reveal::{stagger_delay, use_reveal};
use crate::util::scroll;

/// Delay between typed characters of the headline.
#[cfg(target_arch = "wasm32")]
const TYPE_INTERVAL_MS: u64 = 50;

/// Hero section. The headline types itself out one character at a time;
/// the rest of the content fades in with staggered delays once revealed.
#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);

    let (typed, set_typed) = signal(String::new());
    let (typing_done, set_typing_done) = signal(false);

    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        for ch in HERO_HEADLINE.chars() {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TYPE_INTERVAL_MS)).await;
            // Stop typing if the component is gone.
            if set_typed.try_update(|text| text.push(ch)).is_none() {
                return;
            }
        }
        let _ = set_typing_done.try_set(true);
    });
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (set_typed, set_typing_done);
    }

    let section_class = move || {
        if revealed.get() {
            "hero is-revealed"
        } else {
            "hero"
        }
    };

    let headline_class = move || {
        if typing_done.get() {
            "hero__headline"
        } else {
            "hero__headline hero__headline--typing"
        }
    };

    view! {
        <section id="home" node_ref=section_ref class=section_class>
            <div class="hero__inner">
                <p class="reveal hero__greeting" style:transition-delay=stagger_delay(0, 200, 200)>
                    "Hey there, I'm"
                </p>
                <h1 class="reveal hero__name" style:transition-delay=stagger_delay(1, 200, 200)>
                    {OWNER_NAME}
                </h1>
                <div class="reveal hero__subtitle" style:transition-delay=stagger_delay(2, 200, 200)>
                    <h2 class=headline_class>{typed}</h2>
                </div>
                <p class="reveal hero__bio" style:transition-delay=stagger_delay(3, 200, 200)>
                    "I create fast, accessible, and beautiful web experiences using React, \
                     Python, and modern technologies. Currently available for freelance projects."
                </p>

                <div class="reveal hero__actions" style:transition-delay=stagger_delay(4, 200, 200)>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| scroll::scroll_to_section("projects")
                    >
                        "View Projects \u{2192}"
                    </button>
                    <button
                        class="btn btn--outline"
                        on:click=move |_| scroll::scroll_to_section("contact")
                    >
                        "Get in Touch"
                    </button>
                </div>

                <div class="reveal hero__social" style:transition-delay=stagger_delay(5, 200, 200)>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hero__social-link"
                        aria-label="GitHub"
                    >
                        "GitHub"
                    </a>
                    <a href=EMAIL_URL class="hero__social-link" aria-label="Email">
                        "Email"
                    </a>
                </div>
            </div>

            <button
                class="hero__scroll-hint"
                on:click=move |_| scroll::scroll_to_section("projects")
            >
                <span>"Scroll to explore"</span>
                <span class="hero__scroll-dot"></span>
            </button>
        </section>
    }
}
