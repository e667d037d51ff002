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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::CoherenceError;
use crate::input::InputError;
use crate::species::Species;

#[derive(Error, Debug)]
pub enum PlasmaError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Coherence(#[from] CoherenceError),

    #[error("electron momenta still superluminal after {restarts} restarts with default Te and Vbx; the beam drift (mass_1/mass_0)*Vbx/2 is too large")]
    MomentumRestartLimit { restarts: usize },

    #[error("{species} particle count exceeds the limit of {limit}")]
    TooManyParticles { species: Species, limit: usize },

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl PlasmaError {
    /// The message as printed on a fatal exit, one `FATAL ERROR:` line per
    /// reported problem.
    pub fn fatal_report(&self) -> String {
        self.to_string()
            .lines()
            .map(|line| format!("FATAL ERROR: {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PlasmaError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlasmaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputIssue;

    #[test]
    fn every_input_issue_gets_its_own_fatal_line() {
        let err = PlasmaError::from(InputError {
            issues: vec![
                InputIssue::WrongEntry { line: 3 },
                InputIssue::WrongEntry { line: 7 },
                InputIssue::MissingParameters {
                    expected: 20,
                    found: 19,
                },
            ],
        });
        assert_eq!(
            err.fatal_report(),
            "FATAL ERROR: parameter on line 3 of config file is a wrong input.\n\
             FATAL ERROR: parameter on line 7 of config file is a wrong input.\n\
             FATAL ERROR: 20 lines of parameters expected in config file, but only 19 detected."
        );
    }

    #[test]
    fn single_errors_get_one_fatal_line() {
        let err = PlasmaError::from(CoherenceError::AmplitudeNotPositive);
        assert_eq!(
            err.fatal_report(),
            "FATAL ERROR: sinusoidal density function B value is lower or equal to 0."
        );
    }
}
