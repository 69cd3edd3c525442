//! Page sections and the navigation chrome.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
