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

//! Cell geometry of the populated sub-domain and the triplet density law.

use std::f64::consts::PI;
use std::fmt;

use crate::config::{Configuration, DistributionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An axis-aligned cell of the sub-domain grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: [usize; 3],
    pub low: [f64; 3],
    pub high: [f64; 3],
}

/// Per-axis cell size and the offset that centres the sub-domain inside the
/// full domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub cell_size: [f64; 3],
    pub subdomain_start: [f64; 3],
    pub subdomain_cells: [usize; 3],
}

impl Partition {
    pub fn new(config: &Configuration) -> Self {
        let mut cell_size = [0.0; 3];
        let mut subdomain_start = [0.0; 3];
        for a in 0..3 {
            cell_size[a] = config.domain_length[a] / config.domain_cells[a] as f64;
            let margin = (config.domain_cells[a] - config.subdomain_cells[a]) as f64 / 2.0;
            subdomain_start[a] = margin * cell_size[a];
        }
        Partition {
            cell_size,
            subdomain_start,
            subdomain_cells: config.subdomain_cells,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.subdomain_cells.iter().product()
    }

    pub fn cell(&self, index: [usize; 3]) -> Cell {
        let mut low = [0.0; 3];
        let mut high = [0.0; 3];
        for a in 0..3 {
            low[a] = index[a] as f64 * self.cell_size[a] + self.subdomain_start[a];
            high[a] = (index[a] + 1) as f64 * self.cell_size[a] + self.subdomain_start[a];
        }
        Cell { index, low, high }
    }

    /// All sub-domain cells, x outermost and z innermost.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let [nx, ny, nz] = self.subdomain_cells;
        (0..nx).flat_map(move |i| {
            (0..ny).flat_map(move |j| (0..nz).map(move |k| self.cell([i, j, k])))
        })
    }
}

/// Number of particle triplets seeded in each cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityProfile {
    pub distribution: DistributionType,
    pub amplitude: f64,
    pub average: usize,
    pub cells_x: usize,
}

impl DensityProfile {
    pub fn new(config: &Configuration) -> Self {
        DensityProfile {
            distribution: config.distribution,
            amplitude: config.sinusoidal_amplitude,
            average: config.triplets_per_cell,
            cells_x: config.subdomain_cells[0],
        }
    }

    /// Triplets in any cell of the x-slab `i`.
    pub fn triplets(&self, i: usize) -> usize {
        match self.distribution {
            DistributionType::Uniform => self.average,
            DistributionType::Sinusoidal => {
                let phase = 2.0 * PI * i as f64 / self.cells_x as f64;
                ((1.0 + self.amplitude * phase.cos()) * self.average as f64).floor() as usize
            }
        }
    }

    /// Triplets summed over the whole sub-domain.
    pub fn total_triplets(&self, partition: &Partition) -> usize {
        let slab = partition.subdomain_cells[1] * partition.subdomain_cells[2];
        (0..self.cells_x).map(|i| self.triplets(i) * slab).sum()
    }
}
