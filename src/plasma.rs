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

//! One generation pass: validated configuration in, initial plasma out.

use rand::Rng;
use tracing::info;

use crate::config::Configuration;
use crate::error::Result;
use crate::fields::FieldArrays;
use crate::grid::Partition;
use crate::momenta::{sample_momenta, MomentumReport};
use crate::positions::sample_positions;
use crate::species::{Particles, Species};

/// Everything the output dataset is built from.
#[derive(Debug, Clone)]
pub struct InitialPlasma {
    pub config: Configuration,
    pub fields: FieldArrays,
    pub particles: Particles,
    /// Te and Vbx the momenta were finally drawn with.
    pub momentum: MomentumReport,
}

impl InitialPlasma {
    pub fn generate<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> Result<Self> {
        let partition = Partition::new(config);
        info!(
            "sampling {} sub-domain cells ({} density, {} triplets per cell on average)",
            partition.cell_count(),
            config.distribution,
            config.triplets_per_cell
        );

        let mut particles = sample_positions(config, &partition, rng)?;
        let momentum = sample_momenta(config, &mut particles, rng)?;
        info!(
            "momenta drawn with Te = {} and Vbx = {} after {} restarts",
            momentum.temperature, momentum.beam_velocity, momentum.restarts
        );
        for s in Species::ALL.iter() {
            info!("sort {} ({}): {} particles", s.index(), s, particles[*s].len());
        }

        Ok(InitialPlasma {
            config: config.clone(),
            fields: FieldArrays::zeros(config.domain_cells),
            particles,
            momentum,
        })
    }

    pub fn count(&self, s: Species) -> usize {
        self.particles[s].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reference_parameters;
    use crate::constants::{DEFAULT_BEAM_VELOCITY, DEFAULT_TEMPERATURE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_the_input_momentum_parameters() {
        let config = reference_parameters().validate().unwrap();
        let plasma = InitialPlasma::generate(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(plasma.momentum.temperature, config.electron_temperature);
        assert_eq!(plasma.momentum.beam_velocity, config.beam_velocity);
        assert_eq!(plasma.momentum.restarts, 0);
        assert_eq!(plasma.fields.shape(), [10, 5, 5]);
    }

    #[test]
    fn records_the_fallback_parameters() {
        let mut p = reference_parameters();
        p.electron_temperature = 10.0;
        p.beam_velocity = 0.5;
        let config = p.validate().unwrap();
        let plasma = InitialPlasma::generate(&config, &mut StdRng::seed_from_u64(4)).unwrap();
        assert!(plasma.momentum.fallback_used());
        assert_eq!(plasma.momentum.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(plasma.momentum.beam_velocity, DEFAULT_BEAM_VELOCITY);
    }
}
