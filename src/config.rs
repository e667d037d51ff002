//-------------------------------------------------------------------//
//    plasmainit : initial plasma state generator for 3D PIC codes   //
//           version 1.0, release date: October 19, 2026             //
//-------------------------------------------------------------------//
// Disclaimer: plasmainit is free software: you can redistribute it  //
// and/or modify it under the terms of the GNU General Public License//
// as published by the Free Software Foundation, version 3.          //
// This program is distributed in the hope that it will be useful,   //
// but WITHOUT ANY WARRANTY; without even the implied warranty of    //
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU  //
// General Public License for more details at                        //
// https://www.gnu.org/licenses/gpl-3.0.html.                        //
//-------------------------------------------------------------------//

//! Physical and numerical parameters of the generated plasma, and their
//! coherence checks.

use std::fmt;

use thiserror::Error;

use crate::constants::{MAX_SINUSOIDAL_AMPLITUDE, MIN_TRIPLETS_IN_CELL};
use crate::grid::Axis;
use crate::input::RawParameters;
use crate::species::{PerSpecies, Species};

/// Spatial density law of the particle triplets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionType {
    /// Every cell holds the average number of triplets.
    Uniform,
    /// Triplet count modulated by `1 + B cos(2 pi i / n)` along x.
    Sinusoidal,
}

impl DistributionType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DistributionType::Uniform),
            2 => Some(DistributionType::Sinusoidal),
            _ => None,
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionType::Uniform => f.write_str("uniform"),
            DistributionType::Sinusoidal => f.write_str("sinusoidal"),
        }
    }
}

/// A parameter set rejected by [`Parameters::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoherenceError {
    #[error("domain {0} length is lower or equal to 0.")]
    DomainLengthNotPositive(Axis),

    #[error("domain {0} length is higher or equal to domain x length.")]
    DomainLengthNotBelowX(Axis),

    #[error("domain {0} cells number is lower or equal to 0.")]
    DomainCellsNotPositive(Axis),

    #[error("domain {0} cells number is higher or equal to domain x cells number.")]
    DomainCellsNotBelowX(Axis),

    #[error("subdomain {0} cells number is lower or equal to 0.")]
    SubdomainCellsNotPositive(Axis),

    #[error("subdomain {0} cells number is higher or equal to domain {0} cells number.")]
    SubdomainCellsNotBelowDomain(Axis),

    #[error("subdomain {0} cells number is higher or equal to subdomain x cells number.")]
    SubdomainCellsNotBelowX(Axis),

    #[error("average number of particles triplets in cell is lower or equal to 0.")]
    TripletsNotPositive,

    #[error("average number of particles triplets in cell is strictly lower than {minimum}.")]
    TooFewTriplets { minimum: i64 },

    #[error("sinusoidal density function B value is strictly higher than {maximum}.")]
    AmplitudeTooLarge { maximum: f64 },

    #[error("sinusoidal density function B value is lower or equal to 0.")]
    AmplitudeNotPositive,

    #[error("2*electron_charge + beam_charge + ion_charge is not equal to 0.")]
    ChargeImbalance { sum: f64 },

    #[error("bad electrons distribution type input.")]
    UnknownDistribution(i64),

    #[error("electron mass is lower or equal to 0.")]
    ElectronMassNotPositive,

    #[error("beam x velocity magnitude is higher or equal to 1.")]
    BeamVelocityNotSubluminal,

    #[error("electron temperature is strictly lower than 0.")]
    NegativeTemperature,
}

/// Parameters as read from the configuration file. Integer quantities are
/// truncated toward zero but not yet checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub domain_length: [f64; 3],
    pub domain_cells: [i64; 3],
    pub subdomain_cells: [i64; 3],
    pub triplets_per_cell: i64,
    pub sinusoidal_amplitude: f64,
    pub electron_temperature: f64,
    pub beam_velocity: f64,
    pub charges: [f64; 3],
    pub masses: [f64; 3],
    pub distribution_type: i64,
}

impl From<RawParameters> for Parameters {
    fn from(raw: RawParameters) -> Self {
        let v = raw.values();
        let int = |x: f64| x as i64;
        Parameters {
            domain_length: [v[0], v[1], v[2]],
            domain_cells: [int(v[3]), int(v[4]), int(v[5])],
            subdomain_cells: [int(v[6]), int(v[7]), int(v[8])],
            triplets_per_cell: int(v[9]),
            sinusoidal_amplitude: v[10],
            electron_temperature: v[11],
            beam_velocity: v[12],
            charges: [v[13], v[14], v[15]],
            masses: [v[16], v[17], v[18]],
            distribution_type: int(v[19]),
        }
    }
}

impl Parameters {
    /// Runs the coherence checks in their fixed order and stops at the first
    /// failure: domain sizes, cell numbers, triplet average, B, charge
    /// neutrality, distribution type, then the sampler's own requirements.
    pub fn validate(&self) -> Result<Configuration, CoherenceError> {
        self.check_domain_lengths()?;
        self.check_cell_numbers()?;

        if self.triplets_per_cell < MIN_TRIPLETS_IN_CELL {
            return Err(if self.triplets_per_cell > 0 {
                CoherenceError::TooFewTriplets {
                    minimum: MIN_TRIPLETS_IN_CELL,
                }
            } else {
                CoherenceError::TripletsNotPositive
            });
        }

        if self.sinusoidal_amplitude > MAX_SINUSOIDAL_AMPLITUDE {
            return Err(CoherenceError::AmplitudeTooLarge {
                maximum: MAX_SINUSOIDAL_AMPLITUDE,
            });
        }
        if self.sinusoidal_amplitude <= 0.0 {
            return Err(CoherenceError::AmplitudeNotPositive);
        }

        let [q0, q1, q2] = self.charges;
        let sum = 2.0 * q0 + q1 + q2;
        if sum != 0.0 {
            return Err(CoherenceError::ChargeImbalance { sum });
        }

        let distribution = DistributionType::from_code(self.distribution_type)
            .ok_or(CoherenceError::UnknownDistribution(self.distribution_type))?;

        if self.masses[0] <= 0.0 {
            return Err(CoherenceError::ElectronMassNotPositive);
        }
        if self.beam_velocity.abs() >= 1.0 {
            return Err(CoherenceError::BeamVelocityNotSubluminal);
        }
        if self.electron_temperature < 0.0 {
            return Err(CoherenceError::NegativeTemperature);
        }

        let to_usize = |a: [i64; 3]| [a[0] as usize, a[1] as usize, a[2] as usize];
        Ok(Configuration {
            domain_length: self.domain_length,
            domain_cells: to_usize(self.domain_cells),
            subdomain_cells: to_usize(self.subdomain_cells),
            triplets_per_cell: self.triplets_per_cell as usize,
            sinusoidal_amplitude: self.sinusoidal_amplitude,
            electron_temperature: self.electron_temperature,
            beam_velocity: self.beam_velocity,
            charges: PerSpecies(self.charges),
            masses: PerSpecies(self.masses),
            distribution,
        })
    }

    fn check_domain_lengths(&self) -> Result<(), CoherenceError> {
        let [x, y, z] = self.domain_length;
        if x <= 0.0 {
            return Err(CoherenceError::DomainLengthNotPositive(Axis::X));
        }
        for &(axis, length) in &[(Axis::Y, y), (Axis::Z, z)] {
            if x <= length {
                return Err(CoherenceError::DomainLengthNotBelowX(axis));
            }
            if length <= 0.0 {
                return Err(CoherenceError::DomainLengthNotPositive(axis));
            }
        }
        Ok(())
    }

    fn check_cell_numbers(&self) -> Result<(), CoherenceError> {
        use CoherenceError::*;

        let [xout, yout, zout] = self.domain_cells;
        let [xin, yin, zin] = self.subdomain_cells;

        let checks = [
            (xout <= 0, DomainCellsNotPositive(Axis::X)),
            (yout <= 0, DomainCellsNotPositive(Axis::Y)),
            (xout <= yout, DomainCellsNotBelowX(Axis::Y)),
            (zout <= 0, DomainCellsNotPositive(Axis::Z)),
            (xout <= zout, DomainCellsNotBelowX(Axis::Z)),
            (xin <= 0, SubdomainCellsNotPositive(Axis::X)),
            (xout <= xin, SubdomainCellsNotBelowDomain(Axis::X)),
            (yout <= yin, SubdomainCellsNotBelowDomain(Axis::Y)),
            (yin >= xin, SubdomainCellsNotBelowX(Axis::Y)),
            (yin <= 0, SubdomainCellsNotPositive(Axis::Y)),
            (zout <= zin, SubdomainCellsNotBelowDomain(Axis::Z)),
            (zin >= xin, SubdomainCellsNotBelowX(Axis::Z)),
            (zin <= 0, SubdomainCellsNotPositive(Axis::Z)),
        ];
        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// A validated, immutable parameter set driving one sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub domain_length: [f64; 3],
    pub domain_cells: [usize; 3],
    pub subdomain_cells: [usize; 3],
    pub triplets_per_cell: usize,
    pub sinusoidal_amplitude: f64,
    pub electron_temperature: f64,
    pub beam_velocity: f64,
    pub charges: PerSpecies<f64>,
    pub masses: PerSpecies<f64>,
    pub distribution: DistributionType,
}

impl Configuration {
    pub fn from_raw(raw: RawParameters) -> Result<Self, CoherenceError> {
        Parameters::from(raw).validate()
    }

    pub fn subdomain_cell_count(&self) -> usize {
        self.subdomain_cells.iter().product()
    }

    pub fn charge(&self, s: Species) -> f64 {
        self.charges[s]
    }

    pub fn mass(&self, s: Species) -> f64 {
        self.masses[s]
    }
}

#[cfg(test)]
pub(crate) fn reference_parameters() -> Parameters {
    Parameters {
        domain_length: [10.0, 5.0, 5.0],
        domain_cells: [10, 5, 5],
        subdomain_cells: [4, 2, 2],
        triplets_per_cell: 100,
        sinusoidal_amplitude: 0.05,
        electron_temperature: 0.001,
        beam_velocity: 0.14,
        charges: [-1.0, 1.0, 1.0],
        masses: [1.0, 1.0, 1836.0],
        distribution_type: 1,
    }
}
