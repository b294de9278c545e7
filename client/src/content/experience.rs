//! Work history, most recent first.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub post: &'static str,
    pub duration: &'static str,
    pub company_name: &'static str,
    pub location: Option<&'static str>,
    pub job_description: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        post: "UI/UX Design Intern",
        duration: "Jan 2024 - Present",
        company_name: "Product Design Studio",
        location: Some("Remote"),
        job_description: &[
            "Designed end-to-end flows for a web dashboard, from user interviews to high-fidelity prototypes.",
            "Built and maintained a component library in Figma shared with the engineering team.",
            "Ran usability sessions and turned findings into prioritized design changes.",
        ],
    },
    Experience {
        post: "Freelance UI Designer",
        duration: "Jun 2023 - Dec 2023",
        company_name: "Independent",
        location: Some("Kanpur, UP"),
        job_description: &[
            "Delivered landing pages and mobile app mockups for small business clients.",
            "Translated brand guidelines into responsive layouts and reusable styles.",
        ],
    },
    Experience {
        post: "Design Lead",
        duration: "Aug 2022 - May 2023",
        company_name: "College Technical Society",
        location: None,
        job_description: &[
            "Led a team of four designers producing event branding and web pages.",
            "Introduced a shared design system that cut turnaround on new pages.",
        ],
    },
];
