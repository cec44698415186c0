//! pegrisk-models
//!
//! Prediction model definitions. Pure computation, no I/O.
//! Defines the input schema, coefficients, cutoff and cohort table of each
//! PEG-placement model, the PRO-MAL survival score, and the shared scoring
//! pieces they are built from.

pub mod classify;
pub mod cohort;
pub mod error;
pub mod fields;
pub mod interval;
pub mod logistic;
pub mod peg;
pub mod promal;
pub mod registry;
pub mod standardize;

pub use registry::{evaluate, all_models, get_model, Evaluation, EvaluationContext, Model, ModelId};
