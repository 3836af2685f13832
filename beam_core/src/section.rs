//! # Cross-Section Properties
//!
//! Geometric properties of common beam cross-sections, used to derive the
//! second moment of area consumed by the deflection analysis.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area) about the strong axis
//! - `b` = Width, `h` = Depth, `r` = Radius
//! - `t_f` = Flange thickness, `t_w` = Web thickness
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{BeamError, BeamResult};

/// A beam cross-section.
///
/// All dimensions are in consistent length units; properties come back in
/// the matching squared/fourth-power units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSection {
    /// Solid rectangle, width `b` by depth `h`
    Rectangular { width: f64, height: f64 },

    /// Solid circle of radius `r`
    Circular { radius: f64 },

    /// Symmetric I-section: overall `width` x `height`, with flange and web
    /// thicknesses
    IBeam {
        width: f64,
        height: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
}

impl CrossSection {
    /// Create a rectangular section
    pub fn rectangular(width: f64, height: f64) -> Self {
        CrossSection::Rectangular { width, height }
    }

    /// Create a circular section
    pub fn circular(radius: f64) -> Self {
        CrossSection::Circular { radius }
    }

    /// Create a symmetric I-section
    pub fn i_beam(width: f64, height: f64, flange_thickness: f64, web_thickness: f64) -> Self {
        CrossSection::IBeam {
            width,
            height,
            flange_thickness,
            web_thickness,
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::Circular { .. } => "Circular",
            CrossSection::IBeam { .. } => "I-Beam",
        }
    }

    /// Check all dimensions are physically meaningful
    pub fn validate(&self) -> BeamResult<()> {
        let reject = |field: &str, value: f64, reason: &str| {
            Err(BeamError::invalid_input(field, value.to_string(), reason))
        };

        match *self {
            CrossSection::Rectangular { width, height } => {
                if width <= 0.0 {
                    return reject("width", width, "Section width must be positive");
                }
                if height <= 0.0 {
                    return reject("height", height, "Section height must be positive");
                }
            }
            CrossSection::Circular { radius } => {
                if radius <= 0.0 {
                    return reject("radius", radius, "Section radius must be positive");
                }
            }
            CrossSection::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => {
                if width <= 0.0 {
                    return reject("width", width, "Section width must be positive");
                }
                if height <= 0.0 {
                    return reject("height", height, "Section height must be positive");
                }
                if flange_thickness <= 0.0 || 2.0 * flange_thickness >= height {
                    return reject(
                        "flange_thickness",
                        flange_thickness,
                        "Flanges must be positive and leave room for the web",
                    );
                }
                if web_thickness <= 0.0 || web_thickness > width {
                    return reject(
                        "web_thickness",
                        web_thickness,
                        "Web must be positive and no wider than the section",
                    );
                }
            }
        }
        Ok(())
    }

    /// Cross-sectional area
    ///
    /// # Formulas
    /// - Rectangle: `A = b*h`
    /// - Circle: `A = pi*r^2`
    /// - I-section: two flanges plus the clear web, `2*b*t_f + (h-2*t_f)*t_w`
    pub fn area(&self) -> f64 {
        match *self {
            CrossSection::Rectangular { width, height } => width * height,
            CrossSection::Circular { radius } => PI * radius * radius,
            CrossSection::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => 2.0 * width * flange_thickness + (height - 2.0 * flange_thickness) * web_thickness,
        }
    }

    /// Moment of inertia about the strong (horizontal centroidal) axis
    ///
    /// # Formulas (Roark's Table 3.1)
    /// - Rectangle: `I = b*h^3/12`
    /// - Circle: `I = pi*r^4/4`
    /// - I-section: enclosing rectangle minus the two side voids,
    ///   `(b*h^3 - (b-t_w)*(h-2*t_f)^3)/12`
    pub fn moment_of_inertia(&self) -> f64 {
        match *self {
            CrossSection::Rectangular { width, height } => width * height.powi(3) / 12.0,
            CrossSection::Circular { radius } => PI / 4.0 * radius.powi(4),
            CrossSection::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => {
                let clear_height = height - 2.0 * flange_thickness;
                (width * height.powi(3) - (width - web_thickness) * clear_height.powi(3)) / 12.0
            }
        }
    }
}

impl std::fmt::Display for CrossSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
