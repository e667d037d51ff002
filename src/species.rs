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

//! Particle species and their coordinate arrays.

use std::fmt;
use std::ops::{Index, IndexMut};

/// The three particle populations of the initial state. The discriminant is
/// the species number used in the output dataset ("sort 0", "sort 1", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Electron = 0,
    Beam = 1,
    Ion = 2,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Electron, Species::Beam, Species::Ion];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Electron => "electron",
            Species::Beam => "beam",
            Species::Ion => "ion",
        }
    }

    /// Entries stored for this species per particle triplet of a cell.
    pub fn entries_per_triplet(self) -> usize {
        match self {
            Species::Electron => 2,
            Species::Beam | Species::Ion => 1,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A per-species table of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerSpecies<T>(pub [T; 3]);

impl<T> Index<Species> for PerSpecies<T> {
    type Output = T;

    fn index(&self, s: Species) -> &T {
        &self.0[s.index()]
    }
}

impl<T> IndexMut<Species> for PerSpecies<T> {
    fn index_mut(&mut self, s: Species) -> &mut T {
        &mut self.0[s.index()]
    }
}

/// Positions and momenta of one species, stored as six parallel columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleArrays {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub px: Vec<f64>,
    pub py: Vec<f64>,
    pub pz: Vec<f64>,
}

impl ParticleArrays {
    /// Empty arrays with room for `capacity` particles in every column.
    pub fn with_capacity(capacity: usize) -> Self {
        ParticleArrays {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            px: Vec::with_capacity(capacity),
            py: Vec::with_capacity(capacity),
            pz: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Appends a particle at rest.
    pub fn push_position(&mut self, position: [f64; 3]) {
        self.x.push(position[0]);
        self.y.push(position[1]);
        self.z.push(position[2]);
        self.px.push(0.0);
        self.py.push(0.0);
        self.pz.push(0.0);
    }

    pub fn position(&self, i: usize) -> [f64; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn momentum(&self, i: usize) -> [f64; 3] {
        [self.px[i], self.py[i], self.pz[i]]
    }

    pub fn set_momentum(&mut self, i: usize, p: [f64; 3]) {
        self.px[i] = p[0];
        self.py[i] = p[1];
        self.pz[i] = p[2];
    }

    /// Keeps the first `len` particles and releases the unused capacity.
    pub fn truncate(&mut self, len: usize) {
        for column in self.columns_mut() {
            column.truncate(len);
            column.shrink_to_fit();
        }
    }

    fn columns_mut(&mut self) -> [&mut Vec<f64>; 6] {
        [
            &mut self.x,
            &mut self.y,
            &mut self.z,
            &mut self.px,
            &mut self.py,
            &mut self.pz,
        ]
    }
}

/// The particle arrays of all three species.
pub type Particles = PerSpecies<ParticleArrays>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_numbers_follow_dataset_sorts() {
        let indices: Vec<usize> = Species::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(Species::Electron.entries_per_triplet(), 2);
        assert_eq!(Species::Ion.entries_per_triplet(), 1);
    }

    #[test]
    fn truncate_keeps_columns_aligned() {
        let mut arrays = ParticleArrays::with_capacity(8);
        for i in 0..5 {
            arrays.push_position([i as f64, 2.0 * i as f64, 3.0 * i as f64]);
        }
        arrays.set_momentum(1, [0.1, 0.2, 0.3]);
        arrays.truncate(3);

        assert_eq!(arrays.len(), 3);
        assert_eq!(arrays.pz.len(), 3);
        assert_eq!(arrays.position(2), [2.0, 4.0, 6.0]);
        assert_eq!(arrays.momentum(1), [0.1, 0.2, 0.3]);
        assert_eq!(arrays.momentum(0), [0.0, 0.0, 0.0]);
    }
}
