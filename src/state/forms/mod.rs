//! Form domain layer
//!
//! Field identifiers, the per-field validation table and the admission
//! form state with its submit and reset operations.

mod error;
mod field;
mod form_state;
mod validation;

pub use error::{FormError, SubmitError};
pub use field::{Course, Field, FieldFlags, FieldKind, Gender};
pub use form_state::{AdmissionSnapshot, FormState};
