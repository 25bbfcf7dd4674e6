use crate::theme::ThemeMode;

pub const OWNER_NAME: &str = "Dachepalli Sathvik";
pub const OWNER_FULL_NAME: &str = "Sathvik Dachepalli";
pub const MATCHA_GREEN: &str = "#88A37C";

pub const RESUME_PATH: &str = "./resume.pdf";
pub const PORTRAIT_PATH: &str = "/portrait.png";
pub const PORTRAIT_ALT: &str = "Sathvik portrait";
pub const GITHUB_URL: &str = "https://github.com/SathvikDachepalli";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sathvik-dachepalli";
pub const CONTACT_EMAIL: &str = "dachepallisathvik@gmail.com";

pub const ABOUT_TEXT: &str =
    "I'm Sathvik, a software developer who loves building visually pleasing, high-performance UIs.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    React,
    TailwindCss,
    JavaScript,
    TypeScript,
    Python,
    NodeJs,
    GitHub,
    LinkedIn,
    Download,
}

impl Icon {
    fn slug(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::TailwindCss => "tailwindcss",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::NodeJs => "nodedotjs",
            Self::GitHub => "github",
            Self::LinkedIn => "linkedin",
            Self::Download => "download",
        }
    }

    pub fn url(self) -> String {
        match self {
            Self::Download => "/icons/download.svg".to_string(),
            brand => format!(
                "https://cdn.simpleicons.org/{}/{}",
                brand.slug(),
                MATCHA_GREEN.trim_start_matches('#')
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackEntry {
    pub icon: Icon,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const STACK: &[StackEntry] = &[
    StackEntry { icon: Icon::React, name: "React" },
    StackEntry { icon: Icon::TailwindCss, name: "Tailwind CSS" },
    StackEntry { icon: Icon::JavaScript, name: "JavaScript" },
    StackEntry { icon: Icon::TypeScript, name: "TypeScript" },
    StackEntry { icon: Icon::Python, name: "Python" },
    StackEntry { icon: Icon::NodeJs, name: "Node.js" },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Smart Cart (IoT)",
        description: "Led a 6-member team building an IoT Smart Cart with clean UI and smooth product interaction.",
        tech: &["python", "arudino", "flask"],
    },
    ProjectEntry {
        title: "Internet Vehicle Interface",
        description: "ESP32-CAM IoT system enabling remote vehicle control using real-time streaming.",
        tech: &["python", "arudino", "http"],
    },
    ProjectEntry {
        title: "Sign Language Recognition (CNN)",
        description: "Real-time ASL translator built using Python + CNN.",
        tech: &["python", "CNN", "ML"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Primary,
    Secondary,
}

impl Appearance {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "matcha-primary",
            Self::Secondary => "matcha-secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkButton {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
    pub appearance: Appearance,
    pub download: bool,
    pub new_tab: bool,
}

pub const HERO_LINKS: &[LinkButton] = &[
    LinkButton {
        label: "Resume",
        icon: Icon::Download,
        href: RESUME_PATH,
        appearance: Appearance::Primary,
        download: true,
        new_tab: false,
    },
    LinkButton {
        label: "GitHub",
        icon: Icon::GitHub,
        href: GITHUB_URL,
        appearance: Appearance::Secondary,
        download: false,
        new_tab: true,
    },
    LinkButton {
        label: "LinkedIn",
        icon: Icon::LinkedIn,
        href: LINKEDIN_URL,
        appearance: Appearance::Secondary,
        download: false,
        new_tab: true,
    },
];

// Tags flip between filled and outlined with the theme.
pub fn tag_appearance(theme: ThemeMode) -> Appearance {
    match theme {
        ThemeMode::Light => Appearance::Primary,
        ThemeMode::Dark => Appearance::Secondary,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackTile {
    pub name: &'static str,
    pub icon_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagLabel {
    pub text: &'static str,
    pub appearance: Appearance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: Vec<TagLabel>,
}

pub fn stack_tiles(entries: &[StackEntry]) -> Vec<StackTile> {
    entries
        .iter()
        .map(|entry| StackTile {
            name: entry.name,
            icon_url: entry.icon.url(),
        })
        .collect()
}

pub fn project_cards(entries: &[ProjectEntry], theme: ThemeMode) -> Vec<ProjectCard> {
    let appearance = tag_appearance(theme);

    entries
        .iter()
        .map(|entry| ProjectCard {
            title: entry.title,
            description: entry.description,
            tags: entry
                .tech
                .iter()
                .map(|&text| TagLabel { text, appearance })
                .collect(),
        })
        .collect()
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

pub fn footer_line(year: u32) -> String {
    format!("© {year} {OWNER_FULL_NAME} — Crafted with Matcha •")
}
