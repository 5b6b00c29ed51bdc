//! Static content of the home page.

use crate::palette::CardColor;

pub const OWNER: &str = "Toma Tomonari";
pub const CONTACT_EMAIL: &str = "tomatomonari@gmail.com";
pub const SITE_URL: &str = "https://tomatomonari.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/toma-tomonari/";
pub const X_URL: &str = "https://x.com";
pub const LOGO_SRC: &str = "/tt-logo.svg";

/// Hero headline: `{HERO_LEAD} [word] {HERO_TAIL}` over `HERO_SUBTITLE`.
pub const HERO_LEAD: &str = "AI";
pub const HERO_TAIL: &str = "PM";
pub const HERO_SUBTITLE: &str = "Design Thinker";
/// Rotating hero word (English / Japanese pair), swapped every few seconds.
pub const ROTATING_WORDS: [&str; 2] = ["Driven", "駆動"];
/// Widest rotating word, rendered invisibly to keep the slot width stable.
pub const GHOST_WORD: &str = "Driven";
pub const ROTATE_INTERVAL_MS: u64 = 3000;

pub const PRE_FOOTER: [&str; 2] = ["Let's build something", "amazing together."];
pub const AVAILABILITY: &str = "Available for work";
pub const CONTACT_PROMPT: &str = "Drop me a message and I'll get back to you soon.";

pub const MANIFESTO: [&str; 2] = [
    "4+ years of experience building products, leading multidisciplinary teams and delivering outcomes.",
    "This includes driving product at early-stage startups and solving complex industry challenges for Fortune 500 companies to community institutions.",
];

pub const ABOUT: [&str; 2] = [
    "I'm a product manager with 6+ years of experience shipping digital products that users love. From fintech to e-commerce, I've led cross-functional teams to deliver solutions that drive real business impact.",
    "Currently exploring the intersection of AI and product development, building tools that make work more efficient and enjoyable.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Work History",
        href: "#experience",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Education",
        href: "#education",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
];

/// A card in the experience or projects carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    /// Detail page, when one exists.
    pub link: Option<&'static str>,
    pub color: CardColor,
}

pub const EXPERIENCE: [Entry; 5] = [
    Entry {
        title: "Product Consultant",
        role: "Startups & Korean Gov",
        date: "2024 - Present",
        description: "Led go-to-market pitching projects for government-backed startups.",
        link: Some("/work/product-consultant"),
        color: CardColor::Blue,
    },
    Entry {
        title: "Product Manager",
        role: "Tech Startups",
        date: "2021 - 2024",
        description: "3 years of shipping SaaS products.",
        link: Some("/work/product-manager"),
        color: CardColor::Green,
    },
    Entry {
        title: "Senior PM",
        role: "Google",
        date: "2020 - 2021",
        description: "Led the search team on discovery features and personalization.",
        link: None,
        color: CardColor::Cyan,
    },
    Entry {
        title: "Product Lead",
        role: "Fintech Startup",
        date: "2019 - 2020",
        description: "Launched mobile banking features serving 500K+ users.",
        link: None,
        color: CardColor::Purple,
    },
    Entry {
        title: "Associate PM",
        role: "E-commerce Platform",
        date: "2018 - 2019",
        description: "Optimized checkout flow increasing conversion by 15%.",
        link: None,
        color: CardColor::Orange,
    },
];

pub const PROJECTS: [Entry; 5] = [
    Entry {
        title: "AI Meeting Prep",
        role: "RAG Tool",
        date: "2025",
        description: "Built an AI agent to prep briefs before meetings.",
        link: Some("/project/ai-meeting-prep"),
        color: CardColor::Pink,
    },
    Entry {
        title: "Portfolio 2026",
        role: "Leptos + WASM",
        date: "2026",
        description: "High-performance server-rendered site with hydrated animations.",
        link: Some("/project/portfolio-2026"),
        color: CardColor::Gray,
    },
    Entry {
        title: "Design System",
        role: "Component Library",
        date: "2024",
        description: "Built a scalable design system for rapid prototyping.",
        link: None,
        color: CardColor::Cream,
    },
    Entry {
        title: "Voice Assistant",
        role: "LLM Integration",
        date: "2024",
        description: "Built a voice-controlled assistant for smart home automation.",
        link: None,
        color: CardColor::Green,
    },
    Entry {
        title: "Analytics Dashboard",
        role: "Data Visualization",
        date: "2023",
        description: "Real-time metrics dashboard with interactive charts.",
        link: None,
        color: CardColor::Blue,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
    pub logo: Option<&'static str>,
    pub color: CardColor,
}

impl Education {
    /// Placeholder shown in place of a missing logo.
    pub fn initial(&self) -> String {
        self.school.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const EDUCATION: [Education; 4] = [
    Education {
        school: "Stanford d.school",
        degree: "Design Thinking",
        year: "2023",
        logo: None,
        color: CardColor::Dschool,
    },
    Education {
        school: "Masters in PM",
        degree: "Product Management",
        year: "2022",
        logo: None,
        color: CardColor::Arkansas,
    },
    Education {
        school: "AWS Certification",
        degree: "Solutions Architect",
        year: "2021",
        logo: None,
        color: CardColor::Cyan,
    },
    Education {
        school: "Google UX",
        degree: "Professional Certificate",
        year: "2020",
        logo: None,
        color: CardColor::Blue,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    pub label: &'static str,
    pub src: &'static str,
}

pub const CREDENTIALS: [Credential; 3] = [
    Credential {
        label: "Stanford d.school",
        src: "/logos/sdschool.svg",
    },
    Credential {
        label: "U of A Walton College",
        src: "/logos/uofawalton.svg",
    },
    Credential {
        label: "McMillon Innovation Studio",
        src: "/logos/studiologoset.svg",
    },
];

/// Display label for a `tech` key in content frontmatter.
pub fn tech_label(key: &str) -> Option<&'static str> {
    Some(match key {
        "rust" => "Rust",
        "leptos" => "Leptos",
        "wasm" => "WebAssembly",
        "axum" => "Axum",
        "tailwind" => "Tailwind CSS",
        "nextjs" => "Next.js",
        "typescript" => "TypeScript",
        "framer" => "Framer Motion",
        "git" => "Git",
        "github" => "GitHub",
        "vercel" => "Vercel",
        _ => return None,
    })
}

pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_initial() {
        assert_eq!(EDUCATION[0].initial(), "S");
        let blank = Education {
            school: "",
            ..EDUCATION[0]
        };
        assert_eq!(blank.initial(), "");
    }

    #[test]
    fn test_tech_labels() {
        assert_eq!(tech_label("tailwind"), Some("Tailwind CSS"));
        assert_eq!(tech_label("cobol"), None);
    }

    #[test]
    fn test_links_point_at_content_routes() {
        for entry in EXPERIENCE.iter().chain(PROJECTS.iter()) {
            if let Some(link) = entry.link {
                let parts = link.trim_start_matches('/').split('/').collect::<Vec<_>>();
                assert_eq!(parts.len(), 2, "{link}");
                assert!(["work", "project", "program"].contains(&parts[0]), "{link}");
            }
        }
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }

    #[test]
    fn test_hero_headline() {
        assert!(ROTATING_WORDS.contains(&GHOST_WORD));
        assert_eq!(format!("{HERO_LEAD} {} {HERO_TAIL}", ROTATING_WORDS[0]), "AI Driven PM");
    }

    #[test]
    fn test_copyright_year_is_numeric() {
        assert!(copyright_year().parse::<u32>().is_ok());
    }
}
