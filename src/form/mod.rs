//! Clinical input form: field catalog, editable state and numeric encoding.

pub mod schema;
mod state;
mod submission;

pub use schema::{FIELD_COUNT, FIELDS, FieldDescriptor, FieldKind, FieldOption};
pub use state::{FormError, FormState};
pub use submission::{SubmissionVector, VALIDATION_MESSAGE, ValidationError};
