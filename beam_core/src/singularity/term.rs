//! Singularity-function terms
//!
//! A singularity function `<x-a>^n` is zero for `x < a` and `(x-a)^n` for
//! `x >= a`, which lets shear and moment be written as single closed-form
//! expressions across load discontinuities. Each [`Term`] is one addend
//! `C·<x-a>^n` of such an expression; the exponent `n` is the load kind's base
//! power plus the integration shift of the analysis being evaluated.
//!
//! ## Base Powers (shear level)
//!
//! | Kind        | Base power |
//! |-------------|-----------:|
//! | Distributed |          1 |
//! | Point       |          0 |
//! | Moment      |         -1 |

use serde::{Deserialize, Serialize};

/// Absolute tolerance for treating a magnitude as zero.
///
/// Applied consistently to both equation rendering (skipping `+ 0` terms)
/// and load-presence checks.
pub const MAGNITUDE_EPSILON: f64 = 1e-14;

/// The physical kind of an applied load.
///
/// The kind determines the singularity-function exponent at the shear level;
/// every derived analysis (bending, angle, deflection) shifts that exponent
/// by its integration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    /// Uniform distributed load (force per unit length)
    Distributed,
    /// Concentrated point load
    Point,
    /// Applied (concentrated) moment
    Moment,
}

impl LoadKind {
    /// All load kinds in standard order
    pub const ALL: [LoadKind; 3] = [LoadKind::Distributed, LoadKind::Point, LoadKind::Moment];

    /// Singularity-function exponent of this kind at the shear level
    pub fn base_power(&self) -> i32 {
        match self {
            LoadKind::Distributed => 1,
            LoadKind::Point => 0,
            LoadKind::Moment => -1,
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Distributed => "Distributed Load",
            LoadKind::Point => "Point Load",
            LoadKind::Moment => "Moment",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One singularity-function addend `C·<x-start>^(base+shift)`.
///
/// Terms are created once when a load is registered and never mutated.
/// A term contributes nothing at any query point strictly left of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Position along the beam where the term switches on
    pub start: f64,
    /// Signed magnitude of the load
    pub coefficient: f64,
    /// Load kind, fixing the base exponent
    pub kind: LoadKind,
}

impl Term {
    /// Create a new term
    pub fn new(start: f64, coefficient: f64, kind: LoadKind) -> Self {
        Term {
            start,
            coefficient,
            kind,
        }
    }

    /// Whether this term carries a non-negligible magnitude
    pub fn is_active(&self) -> bool {
        self.coefficient.abs() > MAGNITUDE_EPSILON
    }

    /// Evaluate this term at `point` under an integration shift.
    ///
    /// The effective exponent is `base_power + power_shift`. Rules:
    ///
    /// - `0` left of `start` (the term has not switched on)
    /// - `0` for a negative effective exponent (an impulse term never enters
    ///   the ordinary integration chain)
    /// - `C` for exponent 0, `C·(x-a)` for exponent 1
    /// - `C/n! · (x-a)^n` otherwise - the Macaulay normalization that makes
    ///   each integration of `<x-a>^n` yield `<x-a>^(n+1)/(n+1)` in closed
    ///   form without re-deriving constants per step
    pub fn evaluate(&self, point: f64, power_shift: i32) -> f64 {
        let eff_power = self.kind.base_power() + power_shift;

        if point < self.start || eff_power < 0 {
            return 0.0;
        }

        match eff_power {
            0 => self.coefficient,
            1 => self.coefficient * (point - self.start),
            n => self.coefficient / factorial(n) * (point - self.start).powi(n),
        }
    }

    /// Render this term as a singularity-function string, e.g. `10/2<x-0.5>^2`.
    ///
    /// The magnitude is rendered unsigned; sign glyphs between terms are the
    /// aggregate's responsibility. The `/n!` factor is collapsed for exponents
    /// 0 and 1, and a negative effective exponent renders as a literal `0`.
    pub fn render(&self, power_shift: i32) -> String {
        let eff_power = self.kind.base_power() + power_shift;
        let magnitude = self.coefficient.abs();

        if eff_power < 0 {
            "0".to_string()
        } else if eff_power <= 1 {
            format!("{}<x-{}>^{}", magnitude, self.start, eff_power)
        } else {
            format!(
                "{}/{}<x-{}>^{}",
                magnitude,
                factorial(eff_power),
                self.start,
                eff_power
            )
        }
    }
}

/// n! as a float, for the Macaulay normalization.
///
/// Effective exponents never exceed base power 1 plus three integrations.
fn factorial(n: i32) -> f64 {
    (2..=n).map(|k| k as f64).product()
}
