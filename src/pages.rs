//! Page generation modules
//!
//! The service has a single page. It composes the shared components from the
//! components module with markdown rendered through the injected renderer.

pub mod home;
