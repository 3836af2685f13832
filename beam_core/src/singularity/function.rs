//! # Singularity-Function Aggregate
//!
//! [`SingularityFunction`] collects the [`Term`]s produced by every load on
//! one loading plane and derives all four analyses from the same sum: shear
//! directly, then bending, angle, and deflection by successive integration
//! shifts. Integrating the load function twice introduces two constants, which
//! are pinned down from registered boundary conditions by [`solve`].
//!
//! ## Sign Convention
//!
//! - Loads and reactions: positive upward
//! - Moment: positive causes tension on bottom fiber (sagging)
//! - Deflection: positive upward
//!
//! Angle and deflection use the factorial-normalized Macaulay convention
//! uniformly for every load kind; see the reference-beam tests at the bottom
//! of this module for the hand-solved verification case.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::singularity::{AnalysisKind, BcKind, Load, SingularityFunction};
//!
//! // 1 m beam, E = 207 GPa, I = 2e-8 m^4, simply supported with a
//! // central point load of 20 N (reactions included explicitly)
//! let mut sf = SingularityFunction::new(1.0, 207e9, 2e-8).unwrap();
//! sf.add_load(Load::point(0.0, 10.0)).unwrap();
//! sf.add_load(Load::point(0.5, -20.0)).unwrap();
//! sf.add_load(Load::point(1.0, 10.0)).unwrap();
//! sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
//! sf.add_boundary_condition(0.5, BcKind::Angle, 0.0).unwrap();
//! sf.solve().unwrap();
//!
//! let mid = sf.evaluate_at(0.5, AnalysisKind::Deflection, true).unwrap();
//! assert!((mid - (-20.0 / (48.0 * 207e9 * 2e-8))).abs() < 1e-12);
//! ```
//!
//! `solve()` must run before angle/deflection are evaluated with constants
//! included.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

use super::term::{LoadKind, Term};

// =============================================================================
// ANALYSIS KIND
// =============================================================================

/// The four beam analyses, ordered so each successive kind is one additional
/// integration of the shear-level load sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    /// Internal shear force
    Shear,
    /// Internal bending moment
    Bending,
    /// Slope of the elastic curve
    Angle,
    /// Transverse deflection
    Deflection,
}

impl AnalysisKind {
    /// All analysis kinds in integration order
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Shear,
        AnalysisKind::Bending,
        AnalysisKind::Angle,
        AnalysisKind::Deflection,
    ];

    /// Power shift applied to every term's base exponent for this analysis
    pub fn power_shift(&self) -> i32 {
        match self {
            AnalysisKind::Shear => 0,
            AnalysisKind::Bending => 1,
            AnalysisKind::Angle => 2,
            AnalysisKind::Deflection => 3,
        }
    }

    /// Whether this analysis carries the integration constants and the
    /// division by E*I (shear and bending are statically determined)
    pub fn uses_constants(&self) -> bool {
        matches!(self, AnalysisKind::Angle | AnalysisKind::Deflection)
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisKind::Shear => "Shear",
            AnalysisKind::Bending => "Bending",
            AnalysisKind::Angle => "Angle",
            AnalysisKind::Deflection => "Deflection",
        }
    }

    /// SI unit label for reported values
    pub fn unit_label(&self) -> &'static str {
        match self {
            AnalysisKind::Shear => "[N]",
            AnalysisKind::Bending => "[N-m]",
            AnalysisKind::Angle => "[rad]",
            AnalysisKind::Deflection => "[m]",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// LOADS
// =============================================================================

/// A load to register on a singularity function.
///
/// Tagged-variant descriptor: the only behavioral differences between kinds
/// are the base exponent and the switch-on predicate, both of which fold into
/// [`Term::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Uniform distributed load (N/m) over `[start, stop]`
    Distributed {
        start: f64,
        stop: f64,
        magnitude: f64,
    },

    /// Point load (N) at a position along the beam
    Point { location: f64, magnitude: f64 },

    /// Applied moment (N-m) at a position along the beam
    Moment { location: f64, magnitude: f64 },
}

impl Load {
    /// Create a distributed load
    pub fn distributed(start: f64, stop: f64, magnitude: f64) -> Self {
        Load::Distributed {
            start,
            stop,
            magnitude,
        }
    }

    /// Create a point load
    pub fn point(location: f64, magnitude: f64) -> Self {
        Load::Point {
            location,
            magnitude,
        }
    }

    /// Create an applied moment
    pub fn moment(location: f64, magnitude: f64) -> Self {
        Load::Moment {
            location,
            magnitude,
        }
    }
}

// =============================================================================
// BOUNDARY CONDITIONS
// =============================================================================

/// Which derived quantity a boundary condition constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BcKind {
    /// Known slope at a location
    Angle,
    /// Known deflection at a location
    Deflection,
}

impl BcKind {
    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BcKind::Angle => "Angle",
            BcKind::Deflection => "Deflection",
        }
    }
}

/// A known slope or deflection value at a beam location.
///
/// Duplicate locations are allowed; the solver uses the first matching
/// entries in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCondition {
    pub location: f64,
    pub kind: BcKind,
    pub value: f64,
}

/// The two constants arising from integrating the load function twice,
/// determined by [`SingularityFunction::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConstants {
    pub c1: f64,
    pub c2: f64,
}

// =============================================================================
// SINGULARITY FUNCTION
// =============================================================================

/// Ordered sum of singularity terms for one loading plane, with the
/// boundary-condition solver and evaluation/rendering keyed by analysis kind.
///
/// Lifecycle: construct once per plane, register loads and boundary
/// conditions, call [`solve`](Self::solve), then treat as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingularityFunction {
    length: f64,
    e: f64,
    i: f64,
    terms: Vec<Term>,
    boundary_conditions: Vec<BoundaryCondition>,
    constants: Option<IntegrationConstants>,
}

impl SingularityFunction {
    /// Create a singularity function for a beam of the given length,
    /// elastic modulus, and second moment of area.
    pub fn new(length: f64, e: f64, i: f64) -> BeamResult<Self> {
        if length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                length.to_string(),
                "Beam length must be positive",
            ));
        }
        if e <= 0.0 {
            return Err(BeamError::invalid_input(
                "e",
                e.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if i <= 0.0 {
            return Err(BeamError::invalid_input(
                "i",
                i.to_string(),
                "Second moment of area must be positive",
            ));
        }

        Ok(SingularityFunction {
            length,
            e,
            i,
            terms: Vec::new(),
            boundary_conditions: Vec::new(),
            constants: None,
        })
    }

    /// Beam length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Registered terms, in registration order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Registered boundary conditions, in registration order
    pub fn boundary_conditions(&self) -> &[BoundaryCondition] {
        &self.boundary_conditions
    }

    /// Solved integration constants, `None` until [`solve`](Self::solve)
    /// has succeeded
    pub fn constants(&self) -> Option<IntegrationConstants> {
        self.constants
    }

    /// Whether any registered term carries a non-negligible magnitude.
    ///
    /// Callers use this to skip analysis of an unloaded plane entirely.
    pub fn has_loads(&self) -> bool {
        self.terms.iter().any(Term::is_active)
    }

    /// Register a load.
    ///
    /// Locations are validated against `[0, length]` and never clamped.
    ///
    /// A distributed load ending before the beam end automatically registers
    /// an equal-and-opposite distributed term at `stop` first: singularity
    /// terms only switch on and stay on, so ending a load requires
    /// superposing a canceling term. The counter-term is owned by this path
    /// exclusively and must never be added by the caller.
    pub fn add_load(&mut self, load: Load) -> BeamResult<()> {
        match load {
            Load::Point {
                location,
                magnitude,
            } => {
                self.check_span("location", location)?;
                self.push_term(Term::new(location, magnitude, LoadKind::Point));
            }
            Load::Moment {
                location,
                magnitude,
            } => {
                self.check_span("location", location)?;
                self.push_term(Term::new(location, magnitude, LoadKind::Moment));
            }
            Load::Distributed {
                start,
                stop,
                magnitude,
            } => {
                self.check_span("start", start)?;
                self.check_span("stop", stop)?;
                if stop < start {
                    return Err(BeamError::out_of_range("stop", stop, start, self.length));
                }
                if stop < self.length {
                    self.push_term(Term::new(stop, -magnitude, LoadKind::Distributed));
                }
                self.push_term(Term::new(start, magnitude, LoadKind::Distributed));
            }
        }
        Ok(())
    }

    /// Register a boundary condition.
    ///
    /// Appends unconditionally after the range check; duplicate locations are
    /// allowed and the solver picks the first matching entries.
    pub fn add_boundary_condition(
        &mut self,
        location: f64,
        kind: BcKind,
        value: f64,
    ) -> BeamResult<()> {
        self.check_span("location", location)?;
        self.boundary_conditions.push(BoundaryCondition {
            location,
            kind,
            value,
        });
        self.constants = None;
        Ok(())
    }

    fn check_span(&self, field: &str, location: f64) -> BeamResult<()> {
        if location < 0.0 || location > self.length {
            return Err(BeamError::out_of_range(field, location, 0.0, self.length));
        }
        Ok(())
    }

    fn push_term(&mut self, term: Term) {
        self.terms.push(term);
        self.constants = None;
    }

    /// Solve for the two integration constants from the registered boundary
    /// conditions.
    ///
    /// Two patterns are accepted:
    ///
    /// - at least one angle and one deflection condition (first of each used)
    /// - no angle condition but at least two deflection conditions at
    ///   distinct locations (first two used)
    ///
    /// Anything else cannot determine a unique constant pair, since the
    /// governing relation is integrated twice from the load function.
    /// Recomputes from scratch on every call; idempotent for unchanged
    /// inputs.
    pub fn solve(&mut self) -> BeamResult<()> {
        let angle_bcs: Vec<BoundaryCondition> = self
            .boundary_conditions
            .iter()
            .copied()
            .filter(|bc| bc.kind == BcKind::Angle)
            .collect();
        let deflection_bcs: Vec<BoundaryCondition> = self
            .boundary_conditions
            .iter()
            .copied()
            .filter(|bc| bc.kind == BcKind::Deflection)
            .collect();

        let ei = self.e * self.i;

        if !angle_bcs.is_empty() && !deflection_bcs.is_empty() {
            let angle_bc = angle_bcs[0];
            let deflection_bc = deflection_bcs[0];

            let raw_angle = self.evaluate_at(angle_bc.location, AnalysisKind::Angle, false)?;
            let raw_deflection =
                self.evaluate_at(deflection_bc.location, AnalysisKind::Deflection, false)?;

            let c1 = ei * (angle_bc.value - raw_angle);
            let c2 = ei * (deflection_bc.value - raw_deflection) - c1 * deflection_bc.location;
            self.constants = Some(IntegrationConstants { c1, c2 });
        } else if deflection_bcs.len() >= 2 {
            let bc1 = deflection_bcs[0];
            let bc2 = deflection_bcs[1];

            if bc1.location == bc2.location {
                return Err(BeamError::insufficient_constraints(format!(
                    "two deflection conditions at the same location {} form a degenerate system",
                    bc1.location
                )));
            }

            // K_i = C1*x_i + C2 at each location
            let k1 = ei
                * (bc1.value - self.evaluate_at(bc1.location, AnalysisKind::Deflection, false)?);
            let k2 = ei
                * (bc2.value - self.evaluate_at(bc2.location, AnalysisKind::Deflection, false)?);

            let c1 = (k1 - k2) / (bc1.location - bc2.location);
            let c2 = k1 - c1 * bc1.location;
            self.constants = Some(IntegrationConstants { c1, c2 });
        } else {
            return Err(BeamError::insufficient_constraints(
                "either one angle and one deflection condition, or two deflection conditions \
                 at distinct locations are required",
            ));
        }

        Ok(())
    }

    /// Evaluate the summed terms at `x` for an analysis kind.
    ///
    /// Shear and bending are returned raw: they are statically determined
    /// from the load sum and need no solved state. Angle and deflection add
    /// the integration constants when `include_constants` is set (an error
    /// before [`solve`](Self::solve) has succeeded) and always divide by
    /// `E*I`.
    pub fn evaluate_at(
        &self,
        x: f64,
        kind: AnalysisKind,
        include_constants: bool,
    ) -> BeamResult<f64> {
        if self.terms.is_empty() {
            return Ok(0.0);
        }

        let shift = kind.power_shift();
        let mut val: f64 = self.terms.iter().map(|t| t.evaluate(x, shift)).sum();

        if kind.uses_constants() {
            if include_constants {
                let IntegrationConstants { c1, c2 } = self.require_constants(kind)?;
                val += match kind {
                    AnalysisKind::Angle => c1,
                    _ => c1 * x + c2,
                };
            }
            val /= self.e * self.i;
        }

        Ok(val)
    }

    /// Render the singularity equation for an analysis kind.
    ///
    /// Non-zero terms are joined with sign-aware `+`/`-` separators (a
    /// negative first term gets a bare leading `-`). For angle and
    /// deflection with `include_constants`, `C1` is appended sign-aware, and
    /// for deflection `C2` as well - requesting them before
    /// [`solve`](Self::solve) is the same error as in evaluation.
    ///
    /// Returns an empty string when no terms are registered, the signal
    /// callers use to skip a plane entirely.
    pub fn render_equation(&self, kind: AnalysisKind, include_constants: bool) -> BeamResult<String> {
        let mut s = String::new();
        if self.terms.is_empty() {
            return Ok(s);
        }

        let shift = kind.power_shift();
        for term in &self.terms {
            if !term.is_active() {
                continue;
            }
            if s.is_empty() {
                if term.coefficient < 0.0 {
                    s.push('-');
                }
            } else if term.coefficient < 0.0 {
                s.push_str(" - ");
            } else {
                s.push_str(" + ");
            }
            s.push_str(&term.render(shift));
        }

        if include_constants && kind.uses_constants() {
            let IntegrationConstants { c1, c2 } = self.require_constants(kind)?;
            push_signed(&mut s, c1);
            if kind == AnalysisKind::Deflection {
                push_signed(&mut s, c2);
            }
        }

        Ok(s)
    }

    fn require_constants(&self, kind: AnalysisKind) -> BeamResult<IntegrationConstants> {
        self.constants
            .ok_or_else(|| BeamError::not_solved(kind.display_name()))
    }
}

fn push_signed(s: &mut String, value: f64) {
    if value >= 0.0 {
        s.push_str(&format!(" + {}", value));
    } else {
        s.push_str(&format!(" - {}", value.abs()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: f64 = 1.0;
    const E: f64 = 207e9;
    const I: f64 = 2e-8;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    /// Simply supported 1 m beam with a central 20 N load, reactions
    /// registered explicitly: +10 at 0, -20 at L/2, +10 at L.
    fn three_point_beam() -> SingularityFunction {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::point(0.0, 10.0)).unwrap();
        sf.add_load(Load::point(L / 2.0, -20.0)).unwrap();
        sf.add_load(Load::point(L, 10.0)).unwrap();
        sf
    }

    #[test]
    fn test_rejects_nonpositive_constants() {
        assert!(SingularityFunction::new(0.0, E, I).is_err());
        assert!(SingularityFunction::new(L, -1.0, I).is_err());
        assert!(SingularityFunction::new(L, E, 0.0).is_err());
    }

    #[test]
    fn test_load_location_range_checked() {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();

        let err = sf.add_load(Load::point(1.5, 10.0)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");

        let err = sf.add_load(Load::moment(-0.1, 5.0)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");

        // Distributed stop before start is a range error, never clamped
        let err = sf.add_load(Load::distributed(0.8, 0.2, 5.0)).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");

        assert!(sf.terms().is_empty());
    }

    #[test]
    fn test_bc_location_range_checked() {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        let err = sf
            .add_boundary_condition(2.0, BcKind::Deflection, 0.0)
            .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_distributed_counter_term_registered() {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::distributed(0.2, 0.6, 5.0)).unwrap();

        // Canceling term first, then the primary term
        assert_eq!(sf.terms().len(), 2);
        assert_eq!(sf.terms()[0], Term::new(0.6, -5.0, LoadKind::Distributed));
        assert_eq!(sf.terms()[1], Term::new(0.2, 5.0, LoadKind::Distributed));
    }

    #[test]
    fn test_full_span_distributed_has_no_counter_term() {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::distributed(0.0, L, 5.0)).unwrap();
        assert_eq!(sf.terms().len(), 1);
    }

    #[test]
    fn test_distributed_shear_caps_beyond_stop() {
        // Net shear contribution freezes at w*(b-a) for all x >= b
        let (a, b, w) = (0.2, 0.6, 5.0);
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::distributed(a, b, w)).unwrap();

        for x in [b, 0.7, 0.9, L] {
            let v = sf.evaluate_at(x, AnalysisKind::Shear, false).unwrap();
            assert!(approx_eq(v, w * (b - a), 1e-12));
        }
        // Still growing inside the loaded region
        let v = sf.evaluate_at(0.4, AnalysisKind::Shear, false).unwrap();
        assert!(approx_eq(v, w * 0.2, 1e-12));
    }

    #[test]
    fn test_empty_function_evaluates_to_zero() {
        let sf = SingularityFunction::new(L, E, I).unwrap();
        for kind in AnalysisKind::ALL {
            assert_eq!(sf.evaluate_at(0.5, kind, true).unwrap(), 0.0);
        }
        assert!(!sf.has_loads());
        assert_eq!(
            sf.render_equation(AnalysisKind::Shear, true).unwrap(),
            ""
        );
    }

    #[test]
    fn test_constants_required_before_use() {
        let sf = three_point_beam();

        // Shear and bending need no solved state
        assert!(sf.evaluate_at(0.5, AnalysisKind::Shear, true).is_ok());
        assert!(sf.evaluate_at(0.5, AnalysisKind::Bending, true).is_ok());

        let err = sf
            .evaluate_at(0.5, AnalysisKind::Deflection, true)
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_SOLVED");

        let err = sf
            .render_equation(AnalysisKind::Angle, true)
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_SOLVED");

        // Raw evaluation stays available
        assert!(sf.evaluate_at(0.5, AnalysisKind::Angle, false).is_ok());
    }

    #[test]
    fn test_solve_angle_deflection_reference_beam() {
        // Hand-solved simply supported beam, central load P = 20 N:
        //   EI*theta(x) = 10/2*x^2 - 20/2*<x-L/2>^2 + C1,  C1 = -P*L^2/16
        //   deflection at midspan = -P*L^3/(48*E*I)
        let mut sf = three_point_beam();
        sf.add_boundary_condition(L / 2.0, BcKind::Angle, 0.0).unwrap();
        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
        sf.solve().unwrap();

        let constants = sf.constants().unwrap();
        assert!(approx_eq(constants.c1, -20.0 * L * L / 16.0, 1e-12));
        assert!(approx_eq(constants.c2, 0.0, 1e-12));

        // Both boundary values reproduced
        let slope_mid = sf.evaluate_at(L / 2.0, AnalysisKind::Angle, true).unwrap();
        assert!(approx_eq(slope_mid, 0.0, 1e-15));
        let defl_left = sf.evaluate_at(0.0, AnalysisKind::Deflection, true).unwrap();
        assert_eq!(defl_left, 0.0);

        let defl_mid = sf
            .evaluate_at(L / 2.0, AnalysisKind::Deflection, true)
            .unwrap();
        assert!(approx_eq(defl_mid, -20.0 * L.powi(3) / (48.0 * E * I), 1e-12));
    }

    #[test]
    fn test_two_deflection_solve_matches_angle_form() {
        let mut reference = three_point_beam();
        reference
            .add_boundary_condition(L / 2.0, BcKind::Angle, 0.0)
            .unwrap();
        reference
            .add_boundary_condition(0.0, BcKind::Deflection, 0.0)
            .unwrap();
        reference.solve().unwrap();

        let mut pinned = three_point_beam();
        pinned
            .add_boundary_condition(0.0, BcKind::Deflection, 0.0)
            .unwrap();
        pinned
            .add_boundary_condition(L, BcKind::Deflection, 0.0)
            .unwrap();
        pinned.solve().unwrap();

        // Same physical deflection curve from either formulation
        for n in 0..=20 {
            let x = L * n as f64 / 20.0;
            let d1 = reference
                .evaluate_at(x, AnalysisKind::Deflection, true)
                .unwrap();
            let d2 = pinned.evaluate_at(x, AnalysisKind::Deflection, true).unwrap();
            assert!(approx_eq(d1, d2, 1e-6));
        }
    }

    #[test]
    fn test_degenerate_deflection_locations_rejected() {
        let mut sf = three_point_beam();
        sf.add_boundary_condition(0.5, BcKind::Deflection, 0.0).unwrap();
        sf.add_boundary_condition(0.5, BcKind::Deflection, 0.0).unwrap();

        let err = sf.solve().unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_CONSTRAINTS");
        assert!(sf.constants().is_none());
    }

    #[test]
    fn test_insufficient_boundary_conditions_rejected() {
        let mut sf = three_point_beam();
        assert!(sf.solve().is_err());

        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
        let err = sf.solve().unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_CONSTRAINTS");

        // A lone angle condition is also not enough
        let mut sf = three_point_beam();
        sf.add_boundary_condition(0.5, BcKind::Angle, 0.0).unwrap();
        assert!(sf.solve().is_err());
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut sf = three_point_beam();
        sf.add_boundary_condition(L / 2.0, BcKind::Angle, 0.0).unwrap();
        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();

        sf.solve().unwrap();
        let first = sf.constants().unwrap();
        sf.solve().unwrap();
        let second = sf.constants().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_matches_evaluation() {
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::point(0.0, 10.0)).unwrap();

        // A single point load at the origin renders to the bare constant
        // term, whose value is the shear everywhere on the span
        assert_eq!(
            sf.render_equation(AnalysisKind::Shear, false).unwrap(),
            "10<x-0>^0"
        );
        for x in [0.0, 0.25, 0.5, 1.0] {
            let v = sf.evaluate_at(x, AnalysisKind::Shear, false).unwrap();
            assert_eq!(v, 10.0);
        }
    }

    #[test]
    fn test_render_sign_separators() {
        let sf = three_point_beam();
        assert_eq!(
            sf.render_equation(AnalysisKind::Shear, false).unwrap(),
            "10<x-0>^0 - 20<x-0.5>^0 + 10<x-1>^0"
        );

        // Negative first term gets a bare leading minus
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::point(0.0, -10.0)).unwrap();
        sf.add_load(Load::point(0.5, 10.0)).unwrap();
        assert_eq!(
            sf.render_equation(AnalysisKind::Shear, false).unwrap(),
            "-10<x-0>^0 + 10<x-0.5>^0"
        );
    }

    #[test]
    fn test_render_skips_zero_terms() {
        let mut sf = three_point_beam();
        sf.add_load(Load::point(0.25, 0.0)).unwrap();
        assert_eq!(
            sf.render_equation(AnalysisKind::Shear, false).unwrap(),
            "10<x-0>^0 - 20<x-0.5>^0 + 10<x-1>^0"
        );
    }

    #[test]
    fn test_render_appends_constants() {
        let mut sf = three_point_beam();
        sf.add_boundary_condition(L / 2.0, BcKind::Angle, 0.0).unwrap();
        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
        sf.solve().unwrap();

        let constants = sf.constants().unwrap();
        assert!(constants.c1 < 0.0);

        let angle = sf.render_equation(AnalysisKind::Angle, true).unwrap();
        assert!(angle.ends_with(&format!(" - {}", constants.c1.abs())));

        let deflection = sf.render_equation(AnalysisKind::Deflection, true).unwrap();
        assert!(deflection.ends_with(&format!(" - {} + {}", constants.c1.abs(), constants.c2)));
    }

    #[test]
    fn test_moment_load_contributions() {
        // An applied moment is invisible at the shear level and a step at
        // the bending level
        let mut sf = SingularityFunction::new(L, E, I).unwrap();
        sf.add_load(Load::moment(0.4, 15.0)).unwrap();

        assert_eq!(sf.evaluate_at(0.8, AnalysisKind::Shear, false).unwrap(), 0.0);
        assert_eq!(sf.evaluate_at(0.2, AnalysisKind::Bending, false).unwrap(), 0.0);
        assert_eq!(
            sf.evaluate_at(0.8, AnalysisKind::Bending, false).unwrap(),
            15.0
        );
    }

    #[test]
    fn test_mutation_invalidates_solution() {
        let mut sf = three_point_beam();
        sf.add_boundary_condition(L / 2.0, BcKind::Angle, 0.0).unwrap();
        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
        sf.solve().unwrap();
        assert!(sf.constants().is_some());

        sf.add_load(Load::point(0.75, 1.0)).unwrap();
        assert!(sf.constants().is_none());
        let err = sf
            .evaluate_at(0.5, AnalysisKind::Angle, true)
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_SOLVED");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut sf = three_point_beam();
        sf.add_boundary_condition(0.0, BcKind::Deflection, 0.0).unwrap();
        let json = serde_json::to_string(&sf).unwrap();
        let roundtrip: SingularityFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(sf.terms(), roundtrip.terms());
        assert_eq!(sf.boundary_conditions(), roundtrip.boundary_conditions());
    }
}
