//! Form rendering module
//!
//! - `field_renderer`: bordered field with inline error text
//! - `admission_form`: the admission form screen

mod admission_form;
mod field_renderer;

pub use admission_form::draw as draw_admission_form;
