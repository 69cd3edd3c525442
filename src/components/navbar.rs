//! Fixed top navigation: smooth-scroll links, theme toggle, mobile menu.

use leptos::prelude::*;

use crate::content::OWNER_NAME;
use crate::state::nav::{HOME_SECTION, NAV_LINKS};
use crate::state::theme;
use crate::util::scroll;

/// Scroll depth past which the bar gets its solid backdrop.
#[cfg(target_arch = "wasm32")]
const SCROLLED_AFTER_PX: f64 = 20.0;

/// Top navigation bar.
///
/// Receives the page-wide theme flag from the root component; everything
/// else (mobile menu, scrolled backdrop) is local state.
#[component]
pub fn Navbar(dark: RwSignal<bool>) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let (scrolled, set_scrolled) = signal(false);

    // Window scroll listener for the backdrop style, removed on unmount.
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(window) = web_sys::window() {
            let callback = Closure::<dyn FnMut()>::new(move || {
                let depth = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or_default();
                set_scrolled.set(depth > SCROLLED_AFTER_PX);
            });
            let _ = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = set_scrolled;
    }

    let bar_class = move || {
        if scrolled.get() {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    };

    let menu_class = move || {
        if menu_open.get() {
            "navbar__menu navbar__menu--open"
        } else {
            "navbar__menu"
        }
    };

    // Close any open mobile menu before scrolling.
    let go_to = move |section: &'static str| {
        menu_open.set(false);
        scroll::scroll_to_section(section);
    };

    let toggle_theme = move |_| dark.update(|d| *d = theme::toggle(*d));
    let theme_glyph = move || if dark.get() { "\u{2600}" } else { "\u{263E}" };

    view! {
        <nav class=bar_class>
            <div class="navbar__inner">
                <a
                    class="navbar__logo"
                    href="#home"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(HOME_SECTION);
                    }
                >
                    {OWNER_NAME}
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <a
                                    class="navbar__link"
                                    href=format!("#{section}")
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go_to(section);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}

                    <button
                        class="navbar__icon-button"
                        aria-label="Toggle dark mode"
                        on:click=toggle_theme
                    >
                        {theme_glyph}
                    </button>
                </div>

                <div class="navbar__mobile-controls">
                    <button
                        class="navbar__icon-button"
                        aria-label="Toggle dark mode"
                        on:click=toggle_theme
                    >
                        {theme_glyph}
                    </button>
                    <button
                        class="navbar__icon-button"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <div class=menu_class>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let section = link.section;
                        view! {
                            <a
                                class="navbar__menu-link"
                                href=format!("#{section}")
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go_to(section);
                                }
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
