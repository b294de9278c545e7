//! Site owner profile and home page highlights.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Badges under the hero title on the home page.
    pub home_badges: &'static [&'static str],
    pub home_intro: &'static str,
    /// Badges under the name on the about page.
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub email: &'static str,
    pub phone: Option<&'static str>,
    pub linkedin: Link,
    pub location: &'static str,
    pub image: &'static str,
    pub resume: Link,
    /// File name offered by the browser when saving the resume.
    pub resume_file_name: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Vasini Singh",
    home_badges: &["UI/UX Designer", "Based in Kanpur, UP"],
    home_intro: "I specialize in crafting designs that blend functionality and aesthetics seamlessly, \
                 creating intuitive user experiences that leave a lasting impact.",
    roles: &["UI/UX Designer", "Creative Technologist"],
    tagline: "Transforming complex design challenges into intuitive, visually stunning digital experiences \
              that tell a compelling story.",
    summary: "UI/UX designer focused on research-driven, accessible interfaces. I work from user interviews \
              through wireframes to polished prototypes, and I enjoy collaborating closely with engineers so \
              designs ship the way they were imagined.",
    skills: &[
        "User-Centered Design",
        "Responsive Interface Creation",
        "Design Systems Development",
        "Interactive Prototyping",
    ],
    email: "tovasinisingh@gmail.com",
    phone: None,
    linkedin: Link { label: "LinkedIn Profile", href: "https://www.linkedin.com/in/vasini-singh-18a442205/" },
    location: "Kanpur, Uttar Pradesh, India",
    image: "/VasiniProfile.png",
    resume: Link { label: "Download Resume", href: "/VasiniProfile.pdf" },
    resume_file_name: "Vasini_Singh_Resume.pdf",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightIcon {
    Palette,
    Brain,
    Code,
}

impl HighlightIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Palette => "🎨",
            Self::Brain => "🧠",
            Self::Code => "💻",
        }
    }

    /// Modifier class selecting the card's gradient.
    #[must_use]
    pub fn class_modifier(self) -> &'static str {
        match self {
            Self::Palette => "highlight-card--palette",
            Self::Brain => "highlight-card--brain",
            Self::Code => "highlight-card--code",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: HighlightIcon::Palette,
        title: "Creative Design",
        description: "Crafting visually stunning interfaces that capture attention and inspire engagement",
    },
    Highlight {
        icon: HighlightIcon::Brain,
        title: "Problem Solving",
        description: "Approaching each design challenge with analytical thinking and innovative solutions",
    },
    Highlight {
        icon: HighlightIcon::Code,
        title: "Technical Expertise",
        description: "Bridging the gap between design and implementation with technical understanding",
    },
];
