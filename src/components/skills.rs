//! Skills section: technology grid plus category columns.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{SKILL_CATEGORIES, TECHNOLOGIES};
use crate::util::reveal::{stagger_delay, use_reveal};

const TILE_BASE_MS: usize = 200;
const TILE_STEP_MS: usize = 50;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);

    let section_class = move || {
        if revealed.get() {
            "section is-revealed"
        } else {
            "section"
        }
    };

    view! {
        <section id="skills" node_ref=section_ref class=section_class>
            <div class="section__inner">
                <header class="reveal section__header section__header--centered">
                    <p class="section__eyebrow">"Technologies"</p>
                    <h2 class="section__title">"Skills & Tools"</h2>
                    <p class="section__lead">"Technologies I use to bring ideas to life"</p>
                </header>

                <div class="skills-grid">
                    {TECHNOLOGIES
                        .iter()
                        .enumerate()
                        .map(|(index, tech)| {
                            view! {
                                <div
                                    class="reveal skill-tile"
                                    style:transition-delay=stagger_delay(
                                        index,
                                        TILE_BASE_MS,
                                        TILE_STEP_MS,
                                    )
                                >
                                    <span
                                        class="skill-tile__swatch"
                                        style:background=tech.color
                                    ></span>
                                    <span class="skill-tile__name">{tech.name}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="reveal skills-categories" style:transition-delay="800ms">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skills-category">
                                    <h3 class="skills-category__title">{category.title}</h3>
                                    <ul class="skills-category__list">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li>{*skill}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
