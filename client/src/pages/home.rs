//! Home page: hero, highlights, experience timeline, project showcase.

use leptos::prelude::*;

use crate::components::experience_card::ExperienceTimeline;
use crate::components::highlight_card::HighlightCard;
use crate::components::project_card::ProjectShowcase;
use crate::content::{HIGHLIGHTS, PROFILE};

pub const EXPERIENCE_SECTION_ID: &str = "experience-section";
pub const PROJECTS_SECTION_ID: &str = "projects-section";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Welcome to My Portfolio"</h1>
                <div class="hero__badges">
                    {PROFILE.home_badges.iter().map(|b| view! { <span class="badge badge--outline">{*b}</span> }).collect_view()}
                </div>
                <p class="hero__intro">{PROFILE.home_intro}</p>
                <div class="hero__actions">
                    <a class="button button--primary" href=format!("#{PROJECTS_SECTION_ID}")>"View Projects →"</a>
                    <a class="button button--outline" href=format!("#{EXPERIENCE_SECTION_ID}")>"Experience"</a>
                </div>
                <hr class="separator"/>
            </section>

            <section class="highlights">
                {HIGHLIGHTS.iter().map(|h| view! { <HighlightCard highlight=*h/> }).collect_view()}
            </section>

            <div id=EXPERIENCE_SECTION_ID>
                <ExperienceTimeline/>
            </div>
            <div id=PROJECTS_SECTION_ID>
                <ProjectShowcase/>
            </div>
        </div>
    }
}
