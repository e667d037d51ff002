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

//! Relativistic momenta of the sampled particles.
//!
//! Velocities are in units of the speed of light. Electrons get a Maxwellian
//! thermal spread around a drift that balances the beam, the beam moves along
//! x at a fixed velocity, and ions start at rest.

use rand::Rng;
use rand_distr::StandardNormal;
use tracing::{debug, warn};

use crate::config::{Configuration, DistributionType};
use crate::constants::{DEFAULT_BEAM_VELOCITY, DEFAULT_TEMPERATURE, FWHM_FACTOR, MAX_MOMENTUM_RESTARTS};
use crate::error::{PlasmaError, Result};
use crate::species::{ParticleArrays, Particles, Species};

/// Parameters the momentum pass actually ended up using.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumReport {
    pub temperature: f64,
    pub beam_velocity: f64,
    pub restarts: usize,
}

impl MomentumReport {
    pub fn fallback_used(&self) -> bool {
        self.restarts > 0
    }
}

/// Momentum `v * gamma` of a particle moving at `v`.
pub fn relativistic_momentum(v: f64) -> f64 {
    v / (1.0 - v * v).sqrt()
}

/// Centred Gaussian velocity spread whose full width at half maximum is the
/// temperature.
#[derive(Debug, Clone, Copy)]
struct Thermal {
    sigma: f64,
}

impl Thermal {
    fn new(temperature: f64) -> Self {
        Thermal {
            sigma: temperature / FWHM_FACTOR,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.sigma * z
    }
}

fn fill_beam(beam: &mut ParticleArrays, velocity: f64) {
    let px = relativistic_momentum(velocity);
    for i in 0..beam.len() {
        beam.set_momentum(i, [px, 0.0, 0.0]);
    }
}

/// Fills the momentum columns of all species.
///
/// One superluminal electron draw throws away the whole electron pass: the
/// temperature (and in uniform mode the beam velocity, with the beam momenta)
/// fall back to their defaults and sampling starts again from the first
/// electron. Fails once `MAX_MOMENTUM_RESTARTS` restarts are spent.
pub fn sample_momenta<R: Rng + ?Sized>(
    config: &Configuration,
    particles: &mut Particles,
    rng: &mut R,
) -> Result<MomentumReport> {
    let uniform = config.distribution == DistributionType::Uniform;
    let mass_ratio = config.mass(Species::Beam) / config.mass(Species::Electron);
    let mut temperature = config.electron_temperature;
    let mut beam_velocity = config.beam_velocity;

    if uniform {
        fill_beam(&mut particles[Species::Beam], beam_velocity);
    }
    for i in 0..particles[Species::Ion].len() {
        particles[Species::Ion].set_momentum(i, [0.0, 0.0, 0.0]);
    }

    let electrons = &mut particles[Species::Electron];
    let mut thermal = Thermal::new(temperature);
    let mut restarts = 0;
    let mut i = 0;

    while i < electrons.len() {
        let v_thermal = thermal.sample(rng);
        let vy = thermal.sample(rng);
        let vz = thermal.sample(rng);

        let drift = if uniform { -mass_ratio * beam_velocity / 2.0 } else { 0.0 };
        let vx = if i % 2 == 0 { drift + v_thermal } else { drift - v_thermal };

        let v2 = vx * vx + vy * vy + vz * vz;
        if v2 >= 1.0 {
            if restarts == MAX_MOMENTUM_RESTARTS {
                return Err(PlasmaError::MomentumRestartLimit { restarts });
            }
            restarts += 1;
            if restarts == 1 {
                if uniform {
                    warn!(
                        "due to input Te and Vbx, at least one electron speed reaches 1; Te and Vbx replaced by defaults Te = {} and Vbx = {}",
                        DEFAULT_TEMPERATURE, DEFAULT_BEAM_VELOCITY
                    );
                } else {
                    warn!(
                        "due to input Te, at least one electron speed reaches 1; Te replaced by default Te = {}",
                        DEFAULT_TEMPERATURE
                    );
                }
            } else {
                debug!("superluminal electron at slot {}, restart {}", i, restarts);
            }

            temperature = DEFAULT_TEMPERATURE;
            if uniform {
                beam_velocity = DEFAULT_BEAM_VELOCITY;
            }
            thermal = Thermal::new(temperature);
            i = 0;
            continue;
        }

        let gamma = 1.0 / (1.0 - v2).sqrt();
        electrons.set_momentum(i, [vx * gamma, vy * gamma, vz * gamma]);
        i += 1;
    }

    // the beam follows the velocity the electron drift was finally built on
    if uniform && restarts > 0 {
        fill_beam(&mut particles[Species::Beam], beam_velocity);
    }

    Ok(MomentumReport {
        temperature,
        beam_velocity,
        restarts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{reference_parameters, Parameters};
    use crate::grid::Partition;
    use crate::positions::sample_positions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(edit: impl FnOnce(&mut Parameters), seed: u64) -> (Particles, Result<MomentumReport>) {
        let mut p = reference_parameters();
        edit(&mut p);
        let config = p.validate().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = sample_positions(&config, &Partition::new(&config), &mut rng).unwrap();
        let report = sample_momenta(&config, &mut particles, &mut rng);
        (particles, report)
    }

    fn momentum_squared(p: [f64; 3]) -> f64 {
        p[0] * p[0] + p[1] * p[1] + p[2] * p[2]
    }

    // v^2 = p^2 / (1 + p^2) for p = v * gamma
    fn speed_squared(p: [f64; 3]) -> f64 {
        let p2 = momentum_squared(p);
        p2 / (1.0 + p2)
    }

    #[test]
    fn electrons_stay_below_light_speed() {
        let (particles, report) = run(|_| {}, 1);
        let report = report.unwrap();
        assert!(!report.fallback_used());
        let electrons = &particles[Species::Electron];
        for i in 0..electrons.len() {
            let p = electrons.momentum(i);
            assert!(p.iter().all(|c| c.is_finite()));
            assert!(speed_squared(p) < 1.0);
        }
    }

    #[test]
    fn uniform_beam_momentum_is_constant() {
        let (particles, report) = run(|_| {}, 2);
        assert_eq!(report.unwrap().beam_velocity, 0.14);
        let expected = 0.14 / (1.0f64 - 0.14 * 0.14).sqrt();
        let beam = &particles[Species::Beam];
        assert_eq!(beam.len(), 1600);
        for i in 0..beam.len() {
            assert_eq!(beam.momentum(i), [expected, 0.0, 0.0]);
        }
    }

    #[test]
    fn ions_start_at_rest() {
        let (particles, _) = run(|p| p.distribution_type = 2, 3);
        let ions = &particles[Species::Ion];
        assert!((0..ions.len()).all(|i| ions.momentum(i) == [0.0, 0.0, 0.0]));
        assert_eq!(particles[Species::Beam].momentum(0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn uniform_electrons_counter_stream_around_the_drift() {
        let (particles, _) = run(|p| p.masses = [1.0, 2.0, 1836.0], 4);
        let electrons = &particles[Species::Electron];
        let n = electrons.len() as f64;
        let drift = -2.0 * 0.14 / 2.0;
        let mean_vx = (0..electrons.len())
            .map(|i| {
                let p = electrons.momentum(i);
                p[0] / (1.0 + momentum_squared(p)).sqrt()
            })
            .sum::<f64>()
            / n;
        assert!((mean_vx - drift).abs() < 1e-4, "mean vx {}", mean_vx);
    }

    #[test]
    fn sinusoidal_electrons_have_no_drift() {
        let (particles, _) = run(|p| p.distribution_type = 2, 5);
        let electrons = &particles[Species::Electron];
        let mean_px = electrons.px.iter().sum::<f64>() / electrons.len() as f64;
        assert!(mean_px.abs() < 1e-4, "mean px {}", mean_px);
    }

    #[test]
    fn hot_electrons_fall_back_to_defaults() {
        let (particles, report) = run(|p| {
            p.electron_temperature = 10.0;
            p.beam_velocity = 0.5;
        }, 6);
        let report = report.unwrap();
        assert!(report.fallback_used());
        assert_eq!(report.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(report.beam_velocity, DEFAULT_BEAM_VELOCITY);

        let expected = relativistic_momentum(DEFAULT_BEAM_VELOCITY);
        assert!(particles[Species::Beam].px.iter().all(|&px| px == expected));
        let electrons = &particles[Species::Electron];
        assert!((0..electrons.len()).all(|i| speed_squared(electrons.momentum(i)) < 1.0));
    }

    #[test]
    fn fallback_redraws_every_electron() {
        // Te = 1 keeps the first few slots before one draw reaches light speed
        let (particles, report) = run(|p| p.electron_temperature = 1.0, 42);
        assert!(report.unwrap().fallback_used());

        let sigma = DEFAULT_TEMPERATURE / FWHM_FACTOR;
        let electrons = &particles[Species::Electron];
        let widest = electrons
            .py
            .iter()
            .chain(electrons.pz.iter())
            .fold(0.0f64, |m, p| m.max(p.abs()));
        assert!(widest < 10.0 * sigma, "momentum {} left over from Te = 1", widest);
    }

    #[test]
    fn thermal_spread_matches_the_fwhm() {
        let thermal = Thermal::new(2.355);
        let mut rng = StdRng::seed_from_u64(9);
        let n = 20_000;
        let var = (0..n).map(|_| thermal.sample(&mut rng).powi(2)).sum::<f64>() / n as f64;
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }

    #[test]
    fn sinusoidal_fallback_keeps_beam_at_rest() {
        let (particles, report) = run(|p| {
            p.distribution_type = 2;
            p.electron_temperature = 10.0;
            p.beam_velocity = 0.3;
        }, 7);
        let report = report.unwrap();
        assert!(report.fallback_used());
        assert_eq!(report.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(report.beam_velocity, 0.3);
        assert_eq!(particles[Species::Beam].momentum(0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn superluminal_drift_hits_the_restart_cap() {
        let (_, report) = run(|p| p.masses = [1.0, 100.0, 1836.0], 8);
        match report {
            Err(PlasmaError::MomentumRestartLimit { restarts }) => {
                assert_eq!(restarts, MAX_MOMENTUM_RESTARTS)
            }
            other => panic!("expected restart limit, got {:?}", other),
        }
    }
}
