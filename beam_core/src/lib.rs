//! # beam_core - Beam Analysis Engine
//!
//! `beam_core` computes internal shear, bending moment, slope, and deflection
//! of a loaded beam using Macaulay's singularity-function method. Loads and
//! boundary conditions are registered per loading plane, the two integration
//! constants are solved from the boundary conditions, and results come back
//! as numeric series and human-readable equation strings - all
//! JSON-serializable for downstream plotting and reporting tools.
//!
//! ## Design Philosophy
//!
//! - **Pure**: no I/O, no shared state - evaluation after `solve()` is
//!   side-effect free and safe to sample from parallel readers
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::beam::{Beam, Plane};
//! use beam_core::singularity::BcKind;
//!
//! // Simply supported 1 m beam with a central 20 N load
//! let mut beam = Beam::new(1.0, 207e9, 2e-8).unwrap();
//! beam.add_point_load(0.0, 10.0, Plane::Xy).unwrap();
//! beam.add_point_load(0.5, -20.0, Plane::Xy).unwrap();
//! beam.add_point_load(1.0, 10.0, Plane::Xy).unwrap();
//! beam.add_boundary_condition(0.0, BcKind::Deflection, 0.0, Plane::Xy).unwrap();
//! beam.add_boundary_condition(1.0, BcKind::Deflection, 0.0, Plane::Xy).unwrap();
//!
//! let report = beam.run_analysis(101).unwrap();
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`singularity`] - the singularity-function algebra engine (terms,
//!   aggregate, boundary-condition solver)
//! - [`beam`] - two-plane beam front end, sampled diagrams, maxima report
//! - [`section`] - cross-section properties (A, I)
//! - [`errors`] - structured error types

pub mod beam;
pub mod errors;
pub mod section;
pub mod singularity;

// Re-export commonly used types at crate root for convenience
pub use beam::{AnalysisReport, Beam, Plane, PointValue};
pub use errors::{BeamError, BeamResult};
pub use section::CrossSection;
pub use singularity::{AnalysisKind, BcKind, Load, LoadKind, SingularityFunction, Term};
