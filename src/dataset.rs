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

//! Self-describing output dataset: named dimensions and named variables,
//! each carrying units and a description, stored with bincode.

use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use ndarray::Array3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{DATASET_FORMAT, DATASET_VERSION, EXTRA_NUMBER};
use crate::error::{PlasmaError, Result};
use crate::grid::Axis;
use crate::plasma::InitialPlasma;
use crate::species::Species;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub len: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Values {
    Int(i32),
    Float(f64),
    Series(Vec<f64>),
    Grid(Array3<f64>),
}

impl Values {
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Values::Int(_) | Values::Float(_) => Vec::new(),
            Values::Series(v) => vec![v.len()],
            Values::Grid(a) => a.shape().to_vec(),
        }
    }

    /// Storage type code, `i4` for 32-bit integers and `f8` for doubles.
    pub fn dtype(&self) -> &'static str {
        match self {
            Values::Int(_) => "i4",
            _ => "f8",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub dimensions: Vec<String>,
    pub units: String,
    pub description: String,
    pub values: Values,
}

impl Variable {
    pub fn new(name: &str, dimensions: &[&str], units: &str, description: &str, values: Values) -> Self {
        Variable {
            name: name.to_string(),
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            units: units.to_string(),
            description: description.to_string(),
            values,
        }
    }

    pub fn scalar(name: &str, units: &str, description: &str, values: Values) -> Self {
        Variable::new(name, &[], units, description, values)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    format: String,
    version: u32,
    dimensions: Vec<Dimension>,
    variables: Vec<Variable>,
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Dataset {
            format: DATASET_FORMAT.to_string(),
            version: DATASET_VERSION,
            dimensions: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn dimension(&self, name: &str) -> Option<usize> {
        self.dimensions.iter().find(|d| d.name == name).map(|d| d.len)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn add_dimension(&mut self, name: &str, len: usize) -> Result<()> {
        if self.dimension(name).is_some() {
            return Err(PlasmaError::Dataset(format!("dimension {} defined twice", name)));
        }
        self.dimensions.push(Dimension {
            name: name.to_string(),
            len,
        });
        Ok(())
    }

    /// Adds a variable whose values must match the lengths of its dimensions.
    pub fn add_variable(&mut self, variable: Variable) -> Result<()> {
        if self.variable(&variable.name).is_some() {
            return Err(PlasmaError::Dataset(format!("variable {} defined twice", variable.name)));
        }
        let mut expected = Vec::with_capacity(variable.dimensions.len());
        for d in &variable.dimensions {
            let len = self.dimension(d).ok_or_else(|| {
                PlasmaError::Dataset(format!("variable {} uses unknown dimension {}", variable.name, d))
            })?;
            expected.push(len);
        }
        let shape = variable.values.shape();
        if shape != expected {
            return Err(PlasmaError::Dataset(format!(
                "variable {} has shape {:?} but its dimensions give {:?}",
                variable.name, shape, expected
            )));
        }
        self.variables.push(variable);
        Ok(())
    }

    /// Lays out the initial plasma the way the PIC reader expects it.
    pub fn from_plasma(plasma: &InitialPlasma) -> Result<Self> {
        let mut dataset = Dataset::new();
        let shape = plasma.fields.shape();
        for axis in Axis::ALL.iter() {
            dataset.add_dimension(axis.name(), shape[axis.index()])?;
        }
        for s in Species::ALL.iter() {
            dataset.add_dimension(&species_dimension(*s), plasma.count(*s))?;
        }

        for (kind, axis, grid) in plasma.fields.iter() {
            let name = kind.variable_name(axis);
            dataset.add_variable(Variable::new(
                &name,
                &["x", "y", "z"],
                kind.units(),
                &format!("{}, {}", kind.description(), name),
                Values::Grid(grid.clone()),
            ))?;
        }

        for s in Species::ALL.iter() {
            add_species(&mut dataset, plasma, *s)?;
        }
        Ok(dataset)
    }

    /// Encodes the whole dataset before touching `path`, so a failed
    /// encoding leaves no file behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        fs::write(path, &bytes).map_err(|e| PlasmaError::io(path, e))?;
        info!("dataset written to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| PlasmaError::io(path, e))?;
        let dataset: Dataset = bincode::deserialize(&bytes)?;
        if dataset.format != DATASET_FORMAT || dataset.version != DATASET_VERSION {
            return Err(PlasmaError::Dataset(format!(
                "{} is a {} v{} file, expected {} v{}",
                path.display(),
                dataset.format,
                dataset.version,
                DATASET_FORMAT,
                DATASET_VERSION
            )));
        }
        Ok(dataset)
    }
}

fn species_dimension(s: Species) -> String {
    format!("{}_DIM", s.index())
}

fn add_species(dataset: &mut Dataset, plasma: &InitialPlasma, s: Species) -> Result<()> {
    let n = s.index();
    let dim = species_dimension(s);
    let arrays = &plasma.particles[s];
    let count = i32::try_from(arrays.len())
        .map_err(|_| PlasmaError::Dataset(format!("{} particles of sort {} overflow i32", arrays.len(), n)))?;

    dataset.add_variable(Variable::scalar(
        &format!("Extra_number_{}", n),
        "no units",
        "extra number placed by Fortran",
        Values::Int(EXTRA_NUMBER),
    ))?;
    dataset.add_variable(Variable::scalar(
        &format!("Nb_particles_{}", n),
        "N^-1",
        &format!("number of particles of sort {}", n),
        Values::Int(count),
    ))?;
    dataset.add_variable(Variable::scalar(
        &format!("Charge_{}", n),
        "C",
        &format!("charge for sort {}", n),
        Values::Float(plasma.config.charge(s)),
    ))?;
    dataset.add_variable(Variable::scalar(
        &format!("Mass_{}", n),
        "",
        &format!("mass for sort {}", n),
        Values::Float(plasma.config.mass(s)),
    ))?;

    let columns = [
        ("Coordinates", "coordinates", "no units", [&arrays.x, &arrays.y, &arrays.z]),
        ("Impulses", "impulses", "N.s", [&arrays.px, &arrays.py, &arrays.pz]),
    ];
    for (prefix, label, units, data) in columns.iter() {
        for axis in Axis::ALL.iter() {
            dataset.add_variable(Variable::new(
                &format!("{}_{}{}", prefix, axis, n),
                &[dim.as_str()],
                units,
                &format!("{} {} for particles of sort {}", axis, label, n),
                Values::Series(data[axis.index()].clone()),
            ))?;
        }
    }
    Ok(())
}
