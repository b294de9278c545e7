//! Project showcase entries, in curation order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub github_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
    pub description: &'static [&'static str],
    pub technologies: Option<&'static [&'static str]>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio",
        github_link: None,
        live_link: Some("/"),
        description: &[
            "Designed and built this portfolio with a dark, timeline-driven layout.",
            "Contact form delivers messages through a transactional email relay.",
        ],
        technologies: Some(&["Rust", "Leptos", "Axum", "Figma"]),
    },
    Project {
        title: "Food Delivery App Redesign",
        github_link: None,
        live_link: None,
        description: &[
            "Reworked the ordering flow to reduce steps from cart to checkout.",
            "Produced an interactive prototype validated with five test users.",
        ],
        technologies: Some(&["Figma", "Prototyping", "User Research"]),
    },
    Project {
        title: "Travel Planner Dashboard",
        github_link: None,
        live_link: None,
        description: &[
            "Concept dashboard for planning multi-city trips on desktop and mobile.",
            "Explored information density with card and list layouts.",
        ],
        technologies: None,
    },
];
