//! Project gallery: reveal-gated grid of project cards.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{GITHUB_URL, PROJECTS};
use crate::util::reveal::{stagger_delay, use_reveal};

const CARD_BASE_MS: usize = 150;
const CARD_STEP_MS: usize = 100;

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);

    let section_class = move || {
        if revealed.get() {
            "section section--tinted is-revealed"
        } else {
            "section section--tinted"
        }
    };

    view! {
        <section id="projects" node_ref=section_ref class=section_class>
            <div class="section__inner">
                <header class="reveal section__header">
                    <p class="section__eyebrow">"My Work"</p>
                    <h2 class="section__title">"Featured Projects"</h2>
                    <p class="section__lead">
                        "A selection of projects that showcase my skills in frontend \
                         development, UI design, and problem-solving."
                    </p>
                </header>

                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <article
                                    class="reveal project-card"
                                    style:transition-delay=stagger_delay(
                                        index,
                                        CARD_BASE_MS,
                                        CARD_STEP_MS,
                                    )
                                >
                                    <div class="project-card__media">
                                        <img src=project.image alt=project.title loading="lazy"/>
                                        <div class="project-card__overlay">
                                            <a
                                                class="btn btn--light"
                                                href=project.live_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                "Demo"
                                            </a>
                                            <a
                                                class="btn btn--outline-light"
                                                href=project.repo_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                "Code"
                                            </a>
                                        </div>
                                    </div>
                                    <div class="project-card__body">
                                        <h3 class="project-card__title">{project.title}</h3>
                                        <p class="project-card__description">
                                            {project.description}
                                        </p>
                                        <ul class="project-card__tech">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|tech| view! { <li>{*tech}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="reveal section__cta" style:transition-delay="800ms">
                    <a
                        class="btn btn--outline"
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View All on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
