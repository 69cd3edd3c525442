//! Page footer: copyright, social links, back-to-top.

use leptos::prelude::*;

use crate::content::{EMAIL_URL, GITHUB_URL, OWNER_NAME};
use crate::util::scroll;

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        2025
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">{OWNER_NAME}</span>
                    <p class="footer__copyright">
                        {format!("\u{a9} {} All rights reserved.", current_year())}
                    </p>
                </div>

                <div class="footer__social">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer__social-link"
                        aria-label="GitHub"
                    >
                        "GitHub"
                    </a>
                    <a href=EMAIL_URL class="footer__social-link" aria-label="Email">
                        "Email"
                    </a>
                </div>

                <div class="footer__meta">
                    <p class="footer__built-with">"Built with Leptos & Rust"</p>
                    <button
                        class="footer__top-button"
                        aria-label="Back to top"
                        on:click=move |_| scroll::scroll_to_top()
                    >
                        "\u{2191}"
                    </button>
                </div>
            </div>
        </footer>
    }
}
