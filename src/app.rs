//! Root page composition: theme ownership plus the fixed section order.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::util::dark_mode;

/// Root application component.
///
/// Owns the single theme flag for the whole page and renders the sections
/// in fixed order. No routing, no conditional composition, no fetching.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Persisted preference wins; otherwise the OS color scheme.
    let dark = RwSignal::new(dark_mode::read_preference());

    // Keep the document class and the stored value equal to the flag on
    // every value, including the initial one.
    Effect::new(move || {
        let enabled = dark.get();
        log::debug!("theme sync: dark={enabled}");
        dark_mode::sync(enabled);
    });

    view! {
        <Title text="Amin | Fullstack Developer"/>

        <Navbar dark=dark/>
        <main>
            <Hero/>
            <Projects/>
            <About/>
            <Skills/>
            <Contact/>
        </main>
        <Footer/>
    }
}
