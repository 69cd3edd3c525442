//! About section: bio, stat counters, highlight cards.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{HIGHLIGHTS, STATS};
use crate::util::reveal::{stagger_delay, use_reveal};

const CARD_BASE_MS: usize = 300;
const CARD_STEP_MS: usize = 100;

#[component]
pub fn About() -> impl IntoView {
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
        <section id="about" node_ref=section_ref class=section_class>
            <div class="section__inner about">
                <div class="reveal about__text">
                    <p class="section__eyebrow">"About Me"</p>
                    <h2 class="section__title">"Passionate about building great products"</h2>

                    <p>
                        "I'm a fullstack developer based in Baku, Azerbaijan with a passion \
                         for creating exceptional digital experiences. I specialize in \
                         building modern web applications using React, Python, and other \
                         cutting-edge technologies."
                    </p>
                    <p>
                        "My approach combines clean code practices with a keen eye for \
                         design. I believe that great software is not just functional, it \
                         should be a joy to use and maintain."
                    </p>
                    <p>
                        "When I'm not coding, I'm exploring new technologies, contributing \
                         to open-source, or sharing knowledge with the developer community."
                    </p>

                    <div class="reveal about__stats" style:transition-delay="300ms">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="about__stat">
                                        <span class="about__stat-number">{stat.number}</span>
                                        <span class="about__stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="about__highlights">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <div
                                    class="reveal highlight-card"
                                    style:transition-delay=stagger_delay(
                                        index,
                                        CARD_BASE_MS,
                                        CARD_STEP_MS,
                                    )
                                >
                                    <span class="highlight-card__glyph">{item.glyph}</span>
                                    <h3 class="highlight-card__title">{item.title}</h3>
                                    <p class="highlight-card__description">{item.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
