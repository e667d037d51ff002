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

//! Reader for the plain-text configuration file.
//!
//! Each parameter line has the shape `<value>#<comment>`. Lines without the
//! delimiter (blank lines included) or with more than one delimiter are not
//! parameter lines and are skipped. The first `PARAMETERS_NUMBER` well-formed
//! values are kept, in file order.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::constants::{COMMENT_DELIMITER, PARAMETERS_NUMBER};
use crate::error::{PlasmaError, Result};

/// One problem found while reading the configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    #[error("parameter on line {line} of config file is a wrong input.")]
    WrongEntry { line: usize },

    #[error("{expected} lines of parameters expected in config file, but only {found} detected.")]
    MissingParameters { expected: usize, found: usize },
}

/// All the problems found in one configuration file. Reading does not stop at
/// the first bad line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub issues: Vec<InputIssue>,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, issue) in self.issues.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for InputError {}

/// The values read from a configuration file, before any interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawParameters {
    values: [f64; PARAMETERS_NUMBER],
}

impl RawParameters {
    pub fn new(values: [f64; PARAMETERS_NUMBER]) -> Self {
        RawParameters { values }
    }

    pub fn values(&self) -> &[f64; PARAMETERS_NUMBER] {
        &self.values
    }

    /// Parses the text of a configuration file.
    pub fn parse(content: &str) -> std::result::Result<Self, InputError> {
        let mut values = [0.0; PARAMETERS_NUMBER];
        let mut accepted = 0;
        let mut parameter_lines = 0;
        let mut issues = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if accepted == PARAMETERS_NUMBER {
                break;
            }
            let mut fields = line.split(COMMENT_DELIMITER);
            let value = match (fields.next(), fields.next(), fields.next()) {
                (Some(value), Some(_), None) => value,
                _ => continue,
            };
            parameter_lines += 1;

            match parse_numeric_entry(value) {
                Some(v) => {
                    values[accepted] = v;
                    accepted += 1;
                }
                None => issues.push(InputIssue::WrongEntry { line: index + 1 }),
            }
        }

        if parameter_lines < PARAMETERS_NUMBER {
            issues.push(InputIssue::MissingParameters {
                expected: PARAMETERS_NUMBER,
                found: parameter_lines,
            });
        }

        if issues.is_empty() {
            Ok(RawParameters { values })
        } else {
            Err(InputError { issues })
        }
    }
}

/// Reads and parses the configuration file at `path`.
pub fn read_parameter_file(path: &Path) -> Result<RawParameters> {
    let content = fs::read_to_string(path).map_err(|e| PlasmaError::io(path, e))?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(RawParameters::parse(&content)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Leading,  // only blanks so far
    Content,  // inside the number
    Trailing, // blanks after the number
}

/// Checks a value field against the accepted numeric grammar.
///
/// Allowed characters are digits, `.`, `-`, space and tab. A single `-` may
/// only open the number, at most one `.` is allowed, nothing but blanks may
/// follow a blank that comes after the number, and at least one digit is
/// required.
pub fn is_numeric_entry(text: &str) -> bool {
    let mut state = EntryState::Leading;
    let mut dots = 0;
    let mut digits = false;

    for c in text.chars() {
        state = match (c, state) {
            (' ', EntryState::Leading) | ('\t', EntryState::Leading) => EntryState::Leading,
            (' ', _) | ('\t', _) => EntryState::Trailing,
            ('-', EntryState::Leading) => EntryState::Content,
            ('-', _) => return false,
            ('.', EntryState::Trailing) => return false,
            ('.', _) => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
                EntryState::Content
            }
            ('0'..='9', EntryState::Trailing) => return false,
            ('0'..='9', _) => {
                digits = true;
                EntryState::Content
            }
            _ => return false,
        };
    }
    digits
}

/// Validates and converts a value field.
pub fn parse_numeric_entry(text: &str) -> Option<f64> {
    if !is_numeric_entry(text) {
        return None;
    }
    text.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_text(values: &[&str]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}# parameter {}\n", v, i))
            .collect()
    }

    #[test]
    fn accepts_plain_numbers() {
        for entry in &["0", "42", "-3", "3.25", ".5", "5.", "-.5", "  7", "\t-1.5 ", "12   "] {
            assert!(is_numeric_entry(entry), "rejected {:?}", entry);
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for entry in &[
            "", ".", "-", " ", "- 5", "5-", "--5", "1.2.3", "1 2", "1 .", "1e3", "+4", "abc", "3,5", "1\r",
        ] {
            assert!(!is_numeric_entry(entry), "accepted {:?}", entry);
        }
    }

    #[test]
    fn parse_numeric_entry_converts_accepted_text() {
        assert_eq!(parse_numeric_entry(" -.5 "), Some(-0.5));
        assert_eq!(parse_numeric_entry("5."), Some(5.0));
        assert_eq!(parse_numeric_entry("1 2"), None);
    }

    #[test]
    fn reads_twenty_values_in_order() {
        let entries: Vec<String> = (0..PARAMETERS_NUMBER).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = entries.iter().map(|s| s.as_str()).collect();
        let raw = RawParameters::parse(&config_text(&refs)).unwrap();
        for (i, v) in raw.values().iter().enumerate() {
            assert_eq!(*v, i as f64);
        }
    }

    #[test]
    fn skips_lines_without_single_delimiter() {
        let mut text = String::from("\nno delimiter here\na#b#c\n");
        text.push_str(&config_text(&["1"; PARAMETERS_NUMBER]));
        assert!(RawParameters::parse(&text).is_ok());
    }

    #[test]
    fn empty_value_is_a_wrong_entry() {
        let mut text = String::from("\n# a comment alone still has an empty value field\n");
        text.push_str(&config_text(&["1"; PARAMETERS_NUMBER]));
        let err = RawParameters::parse(&text).unwrap_err();
        assert_eq!(err.issues, vec![InputIssue::WrongEntry { line: 2 }]);
    }

    #[test]
    fn ignores_lines_after_last_parameter() {
        let mut text = config_text(&["2"; PARAMETERS_NUMBER]);
        text.push_str("garbage#still ignored\n");
        assert!(RawParameters::parse(&text).is_ok());
    }

    #[test]
    fn aggregates_line_errors() {
        let mut entries = vec!["1"; PARAMETERS_NUMBER];
        entries[3] = "x";
        entries[7] = "1.2.3";
        let err = RawParameters::parse(&config_text(&entries)).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                InputIssue::WrongEntry { line: 4 },
                InputIssue::WrongEntry { line: 8 },
            ]
        );
    }

    #[test]
    fn reports_short_files() {
        let err = RawParameters::parse(&config_text(&["1"; 12])).unwrap_err();
        assert_eq!(
            err.issues,
            vec![InputIssue::MissingParameters {
                expected: PARAMETERS_NUMBER,
                found: 12
            }]
        );
        assert_eq!(
            err.to_string(),
            "20 lines of parameters expected in config file, but only 12 detected."
        );
    }
}
