//! Static page data.
//!
//! Everything here is a fixed constant; nothing is fetched or persisted.
//! Components iterate these tables directly when rendering.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Site owner shown in the navbar, hero, and footer.
pub const OWNER_NAME: &str = "Amin";

/// Typed out character by character in the hero subtitle.
pub const HERO_HEADLINE: &str = "Fullstack Developer building modern web applications";

pub const EMAIL_URL: &str = "mailto:aminmama8121@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/aminmama8121-bit";

/// A portfolio project card.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SaaS Landing Page",
        description: "Modern landing page with responsive layout, smooth animations, and conversion-optimized design.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=500&fit=crop",
        tech: &["React", "Tailwind CSS", "Vite"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
    Project {
        title: "Weather Application",
        description: "Clean weather app with API integration, location search, and 5-day forecast display.",
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800&h=500&fit=crop",
        tech: &["React", "OpenWeather API", "Tailwind CSS"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
    Project {
        title: "E-commerce Product Page",
        description: "Product page with cart functionality, size selection, and smooth user experience.",
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800&h=500&fit=crop",
        tech: &["React", "Tailwind CSS", "Context API"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
    Project {
        title: "Analytics Dashboard",
        description: "Professional dashboard with interactive charts and real-time data visualization.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=500&fit=crop",
        tech: &["React", "Recharts", "Tailwind CSS"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
    Project {
        title: "Task Management App",
        description: "Feature-rich task manager with categories, filters, and drag-and-drop functionality.",
        image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800&h=500&fit=crop",
        tech: &["React", "Tailwind CSS", "LocalStorage"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
    Project {
        title: "Portfolio Website",
        description: "Modern portfolio with smooth animations, dark mode, and responsive design.",
        image: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=800&h=500&fit=crop",
        tech: &["React", "Tailwind CSS", "Vite"],
        live_url: "https://example.com",
        repo_url: "https://github.com",
    },
];

/// A highlight card in the about section.
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        glyph: "\u{2328}",
        title: "Clean Code",
        description: "Writing maintainable, scalable code with best practices",
    },
    Highlight {
        glyph: "\u{1F3A8}",
        title: "UI/UX Focus",
        description: "Creating beautiful, intuitive user experiences",
    },
    Highlight {
        glyph: "\u{26A1}",
        title: "Performance",
        description: "Building fast, optimized applications",
    },
    Highlight {
        glyph: "\u{1F465}",
        title: "Collaboration",
        description: "Working effectively with teams and clients",
    },
];

/// A counter in the about section.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "5+", label: "Projects" },
    Stat { number: "2+", label: "Years Exp" },
    Stat { number: "100%", label: "Satisfied" },
];

/// An entry in the skills grid, with the technology's brand color.
#[derive(Clone, Copy, Debug)]
pub struct Technology {
    pub name: &'static str,
    pub color: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "React", color: "#61DAFB" },
    Technology { name: "JavaScript", color: "#F7DF1E" },
    Technology { name: "TypeScript", color: "#3178C6" },
    Technology { name: "Python", color: "#3776AB" },
    Technology { name: "Node.js", color: "#339933" },
    Technology { name: "Tailwind", color: "#06B6D4" },
    Technology { name: "PostgreSQL", color: "#4169E1" },
    Technology { name: "MongoDB", color: "#47A248" },
    Technology { name: "Git", color: "#F05032" },
    Technology { name: "Docker", color: "#2496ED" },
    Technology { name: "FastAPI", color: "#009688" },
    Technology { name: "Vite", color: "#646CFF" },
];

/// A skill category column below the technologies grid.
#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["React", "JavaScript", "TypeScript", "HTML/CSS", "Tailwind CSS"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Python", "Node.js", "FastAPI", "REST APIs", "GraphQL"],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &["Git", "Docker", "Vercel", "VS Code", "Figma"],
    },
];

/// A card in the contact section. `link` is `None` for plain facts.
#[derive(Clone, Copy, Debug)]
pub struct ContactCard {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        value: "aminmama8121@gmail.com",
        link: Some(EMAIL_URL),
    },
    ContactCard {
        title: "GitHub",
        value: "@buba",
        link: Some(GITHUB_URL),
    },
    ContactCard {
        title: "Location",
        value: "Baku, Azerbaijan",
        link: None,
    },
];
