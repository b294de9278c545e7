//! Project showcase cards.
//!
//! DESIGN
//! ======
//! `project_cards` projects content entries into view models; the components
//! only render models. Cards alternate sides of the timeline on wide screens.
//! Link buttons and technology badges appear only when the entry has them.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::content::{PROJECTS, Project};

/// Which side of the timeline a card sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSide {
    Left,
    Right,
}

impl CardSide {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub fn class_modifier(self) -> &'static str {
        match self {
            Self::Left => "project-card--left",
            Self::Right => "project-card--right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLinkKind {
    Source,
    Live,
}

impl CardLinkKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "Source code",
            Self::Live => "Live demo",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Source => "</>",
            Self::Live => "↗",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLink {
    pub kind: CardLinkKind,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardModel {
    pub index: usize,
    pub side: CardSide,
    pub title: &'static str,
    pub links: Vec<CardLink>,
    pub bullets: &'static [&'static str],
    pub technologies: Option<&'static [&'static str]>,
}

impl ProjectCardModel {
    #[must_use]
    pub fn from_project(index: usize, project: &Project) -> Self {
        let links = [
            project.github_link.map(|href| CardLink { kind: CardLinkKind::Source, href }),
            project.live_link.map(|href| CardLink { kind: CardLinkKind::Live, href }),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            index,
            side: CardSide::for_index(index),
            title: project.title,
            links,
            bullets: project.description,
            technologies: project.technologies,
        }
    }
}

/// One card model per project, in input order.
#[must_use]
pub fn project_cards(projects: &[Project]) -> Vec<ProjectCardModel> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCardModel::from_project(index, project))
        .collect()
}

/// "Project Showcase" section: a scrollable timeline of project cards.
#[component]
pub fn ProjectShowcase(#[prop(default = PROJECTS)] projects: &'static [Project]) -> impl IntoView {
    let cards = project_cards(projects);

    view! {
        <section class="showcase">
            <h1 class="showcase__title">"Project Showcase"</h1>
            <div class="timeline timeline--projects">
                <div class="timeline__line" aria-hidden="true"></div>
                <div class="showcase__scroll">
                    <div class="showcase__list">
                        {cards.into_iter().map(|card| view! { <ProjectCard card/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(card: ProjectCardModel) -> impl IntoView {
    let ProjectCardModel { index, side, title, links, bullets, technologies } = card;

    view! {
        <article class=format!("project-card {}", side.class_modifier()) data-index=index.to_string()>
            <span class="timeline__dot" aria-hidden="true"></span>
            <div class="project-card__body">
                <header class="project-card__header">
                    <div class="project-card__heading">
                        <span class="project-card__icon" aria-hidden="true">"📚"</span>
                        <div>
                            <h2 class="project-card__title">{title}</h2>
                            <span class="project-card__subtitle">"★ Project Overview"</span>
                        </div>
                    </div>
                    <div class="project-card__links">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="icon-button"
                                        class:icon-button--live={link.kind == CardLinkKind::Live}
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=link.kind.label()
                                        aria-label=link.kind.label()
                                    >
                                        {link.kind.glyph()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </header>
                <ul class="project-card__bullets">
                    {bullets
                        .iter()
                        .map(|line| view! { <li class="project-card__bullet">{*line}</li> })
                        .collect_view()}
                </ul>
                {technologies
                    .map(|techs| {
                        view! {
                            <div class="project-card__badges">
                                {techs
                                    .iter()
                                    .map(|tech| view! { <span class="badge">{*tech}</span> })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </article>
    }
}
