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

//! Fixed numerical parameters of the generator.

// configuration file

pub const PARAMETERS_NUMBER: usize       = 20;        // number of values expected in the configuration file
pub const COMMENT_DELIMITER: char        = '#';       // separates the value from its comment on each line

// physical defaults and coherence limits

pub const MIN_TRIPLETS_IN_CELL: i64      = 100;       // minimum average number of particle triplets per cell
pub const MAX_SINUSOIDAL_AMPLITUDE: f64  = 0.1;       // upper bound of the density modulation B
pub const DEFAULT_TEMPERATURE: f64       = 0.001;     // electron temperature used after a superluminal draw
pub const DEFAULT_BEAM_VELOCITY: f64     = 0.14;      // beam x velocity used after a superluminal draw
pub const FWHM_FACTOR: f64               = 2.355;     // full width at half maximum / standard deviation of a Gaussian
pub const MAX_MOMENTUM_RESTARTS: usize   = 1000;      // cap on full restarts of the electron momentum pass

// output dataset

pub const EXTRA_NUMBER: i32              = 24;        // marker value expected by the downstream PIC reader
pub const MAX_SPECIES_COUNT: usize       = i32::MAX as usize; // particle counts are stored as 32-bit integers
pub const DATASET_FORMAT: &str           = "plasmainit-dataset";
pub const DATASET_VERSION: u32           = 1;
