//! Typed configuration and lifecycle errors.
//!
//! Commands surface these through `anyhow`; the variants exist so the facade
//! and the scheduler constructor can be tested against precise failures.

use crate::libs::config::BreakKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the end-of-day break cannot have a break duration")]
    DayBreakWithDuration,

    #[error("the {0} break requires a break duration")]
    MissingBreakDuration(BreakKind),

    #[error("the end-of-day break cannot have an end-of-break hook")]
    DayBreakWithEndHook,

    #[error("duplicate configuration for the {0} break")]
    DuplicateKind(BreakKind),

    #[error("active hours start must not be after the end")]
    InvertedActiveHours,

    #[error("the break scheduler is already initialized")]
    AlreadyInitialized,

    #[error("the break scheduler is not initialized")]
    NotInitialized,
}
