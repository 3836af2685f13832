//! # Beam Analysis Front End
//!
//! [`Beam`] is the primary entry point of the crate: it owns one
//! [`SingularityFunction`] per loading plane, forwards load and
//! boundary-condition registrations to the right plane, and turns the solved
//! engine into a serializable report of equations, sampled diagrams, and
//! extreme values.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, Plane};
//! use beam_core::singularity::BcKind;
//!
//! // 1 m circular beam, E = 207 GPa, loaded in the XY plane
//! let mut beam = Beam::new(1.0, 207e9, 2e-8).unwrap();
//! beam.add_point_load(0.0, 10.0, Plane::Xy).unwrap();
//! beam.add_point_load(0.5, -20.0, Plane::Xy).unwrap();
//! beam.add_point_load(1.0, 10.0, Plane::Xy).unwrap();
//! beam.add_boundary_condition(0.0, BcKind::Deflection, 0.0, Plane::Xy).unwrap();
//! beam.add_boundary_condition(0.5, BcKind::Angle, 0.0, Plane::Xy).unwrap();
//!
//! let report = beam.run_analysis(101).unwrap();
//! assert_eq!(report.planes.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::BeamResult;
use crate::section::CrossSection;
use crate::singularity::{AnalysisKind, BcKind, Load, SingularityFunction};

// =============================================================================
// PLANES
// =============================================================================

/// The plane a load acts in. Loads at an angle are resolved into these two
/// components by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    /// Vertical loading plane
    Xy,
    /// Horizontal loading plane
    Xz,
}

impl Plane {
    /// Both loading planes in reporting order
    pub const ALL: [Plane; 2] = [Plane::Xy, Plane::Xz];

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Plane::Xy => "XY",
            Plane::Xz => "XZ",
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// REPORT TYPES
// =============================================================================

/// A value paired with the beam position it occurs at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointValue {
    /// Position along the beam (m)
    pub position: f64,
    /// Signed value at that position
    pub value: f64,
    /// Unit label for display
    pub units: String,
}

impl std::fmt::Display for PointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>12.6} {:<7} @ {:>6.3} [m]",
            self.value, self.units, self.position
        )
    }
}

/// One analysis kind's results on one plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSeries {
    /// Which analysis this series describes
    pub kind: AnalysisKind,
    /// Rendered singularity equation, constants included
    pub equation: String,
    /// Uniformly sampled `(position, value)` pairs over `[0, length]`
    pub diagram: Vec<(f64, f64)>,
    /// The sampled value of largest magnitude and where it occurs
    pub extreme: PointValue,
}

/// All four analyses for one loading plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneReport {
    /// The loading plane these series belong to
    pub plane: Plane,
    /// Shear, bending, angle, and deflection series in integration order
    pub series: Vec<AnalysisSeries>,
}

/// Full analysis report for a beam. Planes without loads are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Beam length (m)
    pub length: f64,
    /// Elastic modulus (Pa)
    pub e: f64,
    /// Second moment of area (m^4)
    pub i: f64,
    /// One report per loaded plane
    pub planes: Vec<PlaneReport>,
}

// =============================================================================
// BEAM
// =============================================================================

/// Primary type for beam analysis.
///
/// Add loads and boundary conditions per plane, then call
/// [`run_analysis`](Self::run_analysis) once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beam {
    length: f64,
    e: f64,
    i: f64,
    singularity_xy: SingularityFunction,
    singularity_xz: SingularityFunction,
}

impl Beam {
    /// Create a beam from its length (m), elastic modulus (Pa), and second
    /// moment of area (m^4)
    pub fn new(length: f64, e: f64, i: f64) -> BeamResult<Self> {
        Ok(Beam {
            length,
            e,
            i,
            singularity_xy: SingularityFunction::new(length, e, i)?,
            singularity_xz: SingularityFunction::new(length, e, i)?,
        })
    }

    /// Create a beam whose second moment of area is derived from a
    /// cross-section
    pub fn with_section(length: f64, e: f64, section: &CrossSection) -> BeamResult<Self> {
        section.validate()?;
        Beam::new(length, e, section.moment_of_inertia())
    }

    /// Beam length (m)
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Elastic modulus (Pa)
    pub fn elastic_modulus(&self) -> f64 {
        self.e
    }

    /// Second moment of area (m^4)
    pub fn moment_of_inertia(&self) -> f64 {
        self.i
    }

    /// The singularity function for a plane
    pub fn plane(&self, plane: Plane) -> &SingularityFunction {
        match plane {
            Plane::Xy => &self.singularity_xy,
            Plane::Xz => &self.singularity_xz,
        }
    }

    fn plane_mut(&mut self, plane: Plane) -> &mut SingularityFunction {
        match plane {
            Plane::Xy => &mut self.singularity_xy,
            Plane::Xz => &mut self.singularity_xz,
        }
    }

    /// Add a point load (N) at a position (m) in a plane
    pub fn add_point_load(&mut self, location: f64, magnitude: f64, plane: Plane) -> BeamResult<()> {
        self.plane_mut(plane).add_load(Load::point(location, magnitude))
    }

    /// Add a uniform distributed load (N/m) over `[start, stop]` in a plane
    pub fn add_distributed_load(
        &mut self,
        start: f64,
        stop: f64,
        magnitude: f64,
        plane: Plane,
    ) -> BeamResult<()> {
        self.plane_mut(plane)
            .add_load(Load::distributed(start, stop, magnitude))
    }

    /// Add an applied moment (N-m) at a position (m) in a plane
    pub fn add_moment(&mut self, location: f64, magnitude: f64, plane: Plane) -> BeamResult<()> {
        self.plane_mut(plane).add_load(Load::moment(location, magnitude))
    }

    /// Add a known slope or deflection value at a position in a plane
    pub fn add_boundary_condition(
        &mut self,
        location: f64,
        kind: BcKind,
        value: f64,
        plane: Plane,
    ) -> BeamResult<()> {
        self.plane_mut(plane).add_boundary_condition(location, kind, value)
    }

    /// Solve every loaded plane and build the full report.
    ///
    /// Each analysis kind is sampled uniformly over `[0, length]` at
    /// `samples` points (minimum 2), tracking the extreme magnitude along
    /// the way. Planes without loads are skipped.
    pub fn run_analysis(&mut self, samples: usize) -> BeamResult<AnalysisReport> {
        let samples = samples.max(2);
        let mut planes = Vec::new();

        for plane in Plane::ALL {
            if !self.plane(plane).has_loads() {
                continue;
            }
            self.plane_mut(plane).solve()?;

            let sf = self.plane(plane);
            let mut series = Vec::with_capacity(AnalysisKind::ALL.len());
            for kind in AnalysisKind::ALL {
                series.push(sample_series(sf, kind, samples)?);
            }
            planes.push(PlaneReport { plane, series });
        }

        Ok(AnalysisReport {
            length: self.length,
            e: self.e,
            i: self.i,
            planes,
        })
    }
}

/// Sample one analysis kind over the span, tracking the extreme magnitude
fn sample_series(
    sf: &SingularityFunction,
    kind: AnalysisKind,
    samples: usize,
) -> BeamResult<AnalysisSeries> {
    let length = sf.length();
    let mut diagram = Vec::with_capacity(samples);
    let mut extreme_value = 0.0f64;
    let mut extreme_position = 0.0;

    for n in 0..samples {
        let x = length * n as f64 / (samples - 1) as f64;
        let value = sf.evaluate_at(x, kind, true)?;
        diagram.push((x, value));

        if value.abs() > extreme_value.abs() {
            extreme_value = value;
            extreme_position = x;
        }
    }

    Ok(AnalysisSeries {
        kind,
        equation: sf.render_equation(kind, true)?,
        diagram,
        extreme: PointValue {
            position: extreme_position,
            value: extreme_value,
            units: kind.unit_label().to_string(),
        },
    })
}
