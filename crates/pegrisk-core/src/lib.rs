//! pegrisk-core
//!
//! Pure domain types shared by the scoring crate and the front end: input
//! records, prediction results, cohort estimates and PRO-MAL results.
//! No model coefficients live here.

pub mod error;
pub mod models;
