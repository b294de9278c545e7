//! About page: profile, summary, skills, resume, contact details, contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::content::PROFILE;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="profile">
                <img class="profile__image" src=PROFILE.image alt=format!("{} Profile", PROFILE.name)/>
                <div class="profile__intro">
                    <h1 class="profile__name">{PROFILE.name}</h1>
                    <div class="profile__roles">
                        {PROFILE.roles.iter().map(|r| view! { <span class="badge">{*r}</span> }).collect_view()}
                    </div>
                    <p class="profile__tagline">{PROFILE.tagline}</p>
                </div>
            </section>

            <div class="about__grid">
                <div class="card about__summary">
                    <h2 class="card__title">"👤 Professional Summary"</h2>
                    <p class="about__summary-text">{PROFILE.summary}</p>
                    <h3 class="about__skills-title">"🎯 Core Skills"</h3>
                    <div class="about__skills">
                        {PROFILE.skills.iter().map(|s| view! { <div class="skill">{*s}</div> }).collect_view()}
                    </div>
                    <a
                        class="button button--primary"
                        href=PROFILE.resume.href
                        download=PROFILE.resume_file_name
                    >
                        {format!("⬇ {}", PROFILE.resume.label)}
                    </a>
                </div>

                <div class="about__side">
                    <ContactInfoCard/>
                    <div class="card about__location">
                        <h2 class="card__title">"📍 Location"</h2>
                        <p>{PROFILE.location}</p>
                    </div>
                </div>
            </div>

            <ContactForm/>
        </div>
    }
}

#[component]
fn ContactInfoCard() -> impl IntoView {
    view! {
        <div class="card about__contact">
            <h2 class="card__title">"💼 Contact Information"</h2>
            <div class="contact-row">
                <span aria-hidden="true">"✉"</span>
                <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
            </div>
            {PROFILE.phone.map(|phone| view! {
                <div class="contact-row">
                    <span aria-hidden="true">"☎"</span>
                    <a href=format!("tel:{phone}")>{phone}</a>
                </div>
            })}
            <div class="contact-row">
                <span aria-hidden="true">"in"</span>
                <a href=PROFILE.linkedin.href target="_blank" rel="noopener noreferrer">
                    {PROFILE.linkedin.label}
                </a>
            </div>
        </div>
    }
}
