//! # Singularity-Function Engine
//!
//! Macaulay's method expresses the entire loading of a beam as one sum of
//! singularity terms, then derives bending, slope, and deflection from that
//! same sum by successive integration shifts. This module owns that algebra:
//!
//! - [`term`] - the leaf: one `C·<x-a>^n` addend and its evaluation/rendering
//! - [`function`] - the aggregate: term collection, boundary-condition solver
//!   for the two integration constants, and evaluation/rendering per analysis
//!
//! The engine is single-threaded and pure: once [`SingularityFunction::solve`]
//! has run, evaluation at any number of sample points is a read-only
//! side-effect-free operation.

pub mod function;
pub mod term;

// Re-export the engine surface at module level
pub use function::{
    AnalysisKind, BcKind, BoundaryCondition, IntegrationConstants, Load, SingularityFunction,
};
pub use term::{LoadKind, Term, MAGNITUDE_EPSILON};
