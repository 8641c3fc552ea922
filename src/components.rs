//! Reusable HTML components for page generation
//!
//! Maud component functions for the page chrome and the two panels of the
//! preview page. Components receive plain data and never render markdown
//! themselves.

pub mod input;
pub mod layout;
pub mod preview;
