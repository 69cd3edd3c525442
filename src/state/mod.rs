//! Pure client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `contact_form`, `nav`) so individual
//! components can depend on small focused models. Nothing in here touches
//! the DOM; the browser side effects live in [`crate::util`].

pub mod contact_form;
pub mod nav;
pub mod theme;
