//! Housing Server: HTTP resource for the model tenancy form.
//!
//! Serves the blank form template and turns submitted tenancies into
//! downloadable agreements. Validation, extraction and rendering are
//! delegated to the collaborators held in [`state::AppState`].

pub mod args;
pub mod error;
pub mod routes;
pub mod state;
