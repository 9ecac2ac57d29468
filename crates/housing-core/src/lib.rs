//! Housing Core: the model tenancy form model, the flat template field
//! mapping, the error taxonomy, and the collaborator traits the forms and
//! server crates are built against.

pub mod collaborators;
pub mod error;
pub mod fields;
pub mod models;
