//! "Professional Journey" timeline of experience cards.

#[cfg(test)]
#[path = "experience_card_test.rs"]
mod experience_card_test;

use leptos::prelude::*;

use crate::content::{EXPERIENCE, Experience};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceCardModel {
    pub index: usize,
    pub post: &'static str,
    pub duration: &'static str,
    pub company_name: &'static str,
    pub location: Option<&'static str>,
    pub responsibilities: &'static [&'static str],
}

impl ExperienceCardModel {
    #[must_use]
    pub fn from_experience(index: usize, exp: &Experience) -> Self {
        Self {
            index,
            post: exp.post,
            duration: exp.duration,
            company_name: exp.company_name,
            location: exp.location,
            responsibilities: exp.job_description,
        }
    }
}

/// One card model per experience entry, in input order.
#[must_use]
pub fn experience_cards(entries: &[Experience]) -> Vec<ExperienceCardModel> {
    entries
        .iter()
        .enumerate()
        .map(|(index, exp)| ExperienceCardModel::from_experience(index, exp))
        .collect()
}

#[component]
pub fn ExperienceTimeline(#[prop(default = EXPERIENCE)] entries: &'static [Experience]) -> impl IntoView {
    let cards = experience_cards(entries);

    view! {
        <section class="showcase">
            <h1 class="showcase__title">"Professional Journey"</h1>
            <div class="showcase__scroll">
                <div class="timeline">
                    <div class="timeline__line" aria-hidden="true"></div>
                    <div class="timeline__items">
                        {cards.into_iter().map(|card| view! { <TimelineItem card/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Date pill on the left of the line, card on the right.
#[component]
fn TimelineItem(card: ExperienceCardModel) -> impl IntoView {
    let duration = card.duration;
    let index = card.index;

    view! {
        <div class="timeline__item" data-index=index.to_string()>
            <span class="timeline__dot" aria-hidden="true"></span>
            <div class="timeline__date">
                <span class="date-pill">"📅 " {duration}</span>
            </div>
            <div class="timeline__content">
                <ExperienceCard card/>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceCard(card: ExperienceCardModel) -> impl IntoView {
    let ExperienceCardModel { post, duration, company_name, location, responsibilities, .. } = card;

    view! {
        <article class="experience-card">
            <header class="experience-card__header">
                <span class="experience-card__icon" aria-hidden="true">"💼"</span>
                <div class="experience-card__meta">
                    <div class="experience-card__title-row">
                        <h2 class="experience-card__title">{post}</h2>
                        <span class="badge">{duration}</span>
                    </div>
                    <div class="experience-card__detail">"🏢 " {company_name}</div>
                    {location.map(|place| view! { <div class="experience-card__detail">"📍 " {place}</div> })}
                </div>
            </header>
            <div class="experience-card__body">
                <h3 class="experience-card__section">"★ Key Responsibilities"</h3>
                <ul class="experience-card__list">
                    {responsibilities
                        .iter()
                        .map(|line| view! { <li class="experience-card__item">{*line}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
