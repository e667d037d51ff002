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

//! Initial plasma state generator for 3D particle-in-cell codes.
//!
//! Reads a 20-parameter configuration file, checks it for coherence, samples
//! electron, beam and ion positions and momenta over a sub-domain of the
//! simulation grid, and writes everything as a self-describing dataset.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod display;
pub mod error;
pub mod fields;
pub mod grid;
pub mod input;
pub mod momenta;
pub mod plasma;
pub mod positions;
pub mod species;

pub use config::{CoherenceError, Configuration, DistributionType, Parameters};
pub use dataset::{Dataset, Values, Variable};
pub use error::{PlasmaError, Result};
pub use input::{read_parameter_file, InputError, RawParameters};
pub use plasma::InitialPlasma;
pub use species::Species;
