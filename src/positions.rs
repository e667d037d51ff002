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

//! Spatial sampling of the three species over the sub-domain cells.

use rand::Rng;
use tracing::debug;

use crate::config::{Configuration, DistributionType};
use crate::constants::MAX_SPECIES_COUNT;
use crate::error::{PlasmaError, Result};
use crate::grid::{Cell, DensityProfile, Partition};
use crate::species::{ParticleArrays, Particles, PerSpecies, Species};

/// Worst-case particle count of each species, used to size the buffers
/// before the cell loop. The densest x-slab sets the per-cell bound.
///
/// Fails when a bound does not fit `MAX_SPECIES_COUNT`, the largest
/// count the dataset can record.
pub fn capacity_bounds(config: &Configuration) -> Result<PerSpecies<usize>> {
    let per_cell = DensityProfile::new(config).triplets(0);
    let triplets = config
        .subdomain_cells
        .iter()
        .try_fold(per_cell, |acc, &n| acc.checked_mul(n));
    let beam = match config.distribution {
        DistributionType::Uniform => triplets,
        DistributionType::Sinusoidal => Some(1),
    };
    let bounds = [
        triplets.and_then(|t| t.checked_mul(Species::Electron.entries_per_triplet())),
        beam,
        triplets,
    ];

    let mut checked = [0; 3];
    for s in Species::ALL.iter() {
        checked[s.index()] = match bounds[s.index()] {
            Some(n) if n <= MAX_SPECIES_COUNT => n,
            _ => {
                return Err(PlasmaError::TooManyParticles {
                    species: *s,
                    limit: MAX_SPECIES_COUNT,
                })
            }
        };
    }
    Ok(PerSpecies(checked))
}

fn uniform_in_cell<R: Rng + ?Sized>(cell: &Cell, rng: &mut R) -> [f64; 3] {
    let mut p = [0.0; 3];
    for a in 0..3 {
        p[a] = cell.low[a] + (cell.high[a] - cell.low[a]) * rng.gen::<f64>();
    }
    p
}

/// Draws the positions of all particles, cell by cell, with zero momenta.
///
/// Each triplet adds an electron pair sharing one location, and one ion.
/// In uniform mode the pair, the ion and a beam particle all sit at the same
/// draw. In sinusoidal mode the pair gets its own draw, no beam particle is
/// seeded per cell, and a single beam anchor is copied from the first
/// electron once the loop is done.
pub fn sample_positions<R: Rng + ?Sized>(
    config: &Configuration,
    partition: &Partition,
    rng: &mut R,
) -> Result<Particles> {
    let profile = DensityProfile::new(config);
    let bounds = capacity_bounds(config)?;
    let mut particles = PerSpecies([
        ParticleArrays::with_capacity(bounds[Species::Electron]),
        ParticleArrays::with_capacity(bounds[Species::Beam]),
        ParticleArrays::with_capacity(bounds[Species::Ion]),
    ]);

    for cell in partition.cells() {
        let triplets = profile.triplets(cell.index[0]);
        for _ in 0..triplets {
            let site = uniform_in_cell(&cell, rng);
            let pair_site = match config.distribution {
                DistributionType::Uniform => site,
                DistributionType::Sinusoidal => uniform_in_cell(&cell, rng),
            };

            for _ in 0..Species::Electron.entries_per_triplet() {
                particles[Species::Electron].push_position(pair_site);
            }
            if config.distribution == DistributionType::Uniform {
                particles[Species::Beam].push_position(site);
            }
            particles[Species::Ion].push_position(site);
        }
    }

    if config.distribution == DistributionType::Sinusoidal && !particles[Species::Electron].is_empty() {
        let anchor = particles[Species::Electron].position(0);
        particles[Species::Beam].push_position(anchor);
    }

    for s in Species::ALL.iter() {
        let len = particles[*s].len();
        particles[*s].truncate(len);
        debug!("{} positions: {} of {} reserved", s, len, bounds[*s]);
    }
    Ok(particles)
}
