#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigation entry: visible label plus the id of the section it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

/// Section id targeted by the logo and the hero scroll indicator.
pub const HOME_SECTION: &str = "home";

/// Ordered navigation entries rendered in the navbar and the mobile menu.
///
/// Each `section` must match the `id` attribute of a rendered top-level
/// section so smooth scrolling can find its target.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Projects", section: "projects" },
    NavLink { label: "About", section: "about" },
    NavLink { label: "Skills", section: "skills" },
    NavLink { label: "Contact", section: "contact" },
];
