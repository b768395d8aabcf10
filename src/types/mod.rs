//! Core types for Prakruti

mod dosha;
mod trait_def;
mod observation;
mod result;
mod error;
mod config;

pub use dosha::{Dosha, DoshaScores};
pub use trait_def::{TraitCategory, TraitDefinition, TraitOptions};
pub use observation::Observation;
pub use result::{Constitution, PrakrutiResult, TraitContribution};
pub use error::SessionError;
pub use config::SessionConfig;
