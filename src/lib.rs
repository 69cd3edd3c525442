//! # portfolio
//!
//! Single-page portfolio site built with Leptos and compiled to
//! WebAssembly. The whole page is declarative view composition: a fixed
//! vertical sequence of sections, scroll-triggered reveal transitions, a
//! persisted dark/light theme, and a client-only contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component owning the theme flag and the section order |
//! | [`components`] | Navbar, hero, projects, about, skills, contact, footer |
//! | [`content`] | Static page data (projects, skills, contact cards) |
//! | [`state`] | Pure state models: theme resolution, contact form, nav links |
//! | [`util`] | Browser glue: dark mode, reveal observer, smooth scrolling |
//!
//! State models in [`state`] are plain types with no DOM dependencies so
//! they unit-test natively; everything that touches `web_sys` lives in
//! [`util`] or component effect code behind `wasm32` guards.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;
