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

//! Electromagnetic grid quantities handed to the PIC code, all zero at start.

use ndarray::Array3;

use crate::grid::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Electric,
    Magnetic,
    Current,
    HalfStepMagnetic,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Electric,
        FieldKind::Magnetic,
        FieldKind::Current,
        FieldKind::HalfStepMagnetic,
    ];

    fn index(self) -> usize {
        match self {
            FieldKind::Electric => 0,
            FieldKind::Magnetic => 1,
            FieldKind::Current => 2,
            FieldKind::HalfStepMagnetic => 3,
        }
    }

    /// Letter used in the variable names (`Ex`, `Mx`, `Jx`, `Qx`).
    pub fn symbol(self) -> char {
        match self {
            FieldKind::Electric => 'E',
            FieldKind::Magnetic => 'M',
            FieldKind::Current => 'J',
            FieldKind::HalfStepMagnetic => 'Q',
        }
    }

    pub fn units(self) -> &'static str {
        match self {
            FieldKind::Electric => "N.C^-1",
            FieldKind::Magnetic => "T",
            FieldKind::Current | FieldKind::HalfStepMagnetic => "no units",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FieldKind::Electric => "electric field",
            FieldKind::Magnetic => "magnetic field",
            FieldKind::Current => "current",
            FieldKind::HalfStepMagnetic => "magnetic field at halfstep",
        }
    }

    pub fn variable_name(self, axis: Axis) -> String {
        format!("{}{}", self.symbol(), axis)
    }
}

/// Twelve grids (four fields, three components) over the full-domain cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArrays {
    shape: [usize; 3],
    grids: Vec<Array3<f64>>,
}

impl FieldArrays {
    pub fn zeros(shape: [usize; 3]) -> Self {
        let grids = (0..FieldKind::ALL.len() * Axis::ALL.len())
            .map(|_| Array3::zeros((shape[0], shape[1], shape[2])))
            .collect();
        FieldArrays { shape, grids }
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn component(&self, kind: FieldKind, axis: Axis) -> &Array3<f64> {
        &self.grids[kind.index() * 3 + axis.index()]
    }

    /// Every component, in `Ex Ey Ez Mx ... Qz` order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, Axis, &Array3<f64>)> + '_ {
        FieldKind::ALL.iter().flat_map(move |&kind| {
            Axis::ALL
                .iter()
                .map(move |&axis| (kind, axis, self.component(kind, axis)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_zero_grids_in_output_order() {
        let fields = FieldArrays::zeros([10, 5, 4]);
        let names: Vec<String> = fields
            .iter()
            .map(|(kind, axis, _)| kind.variable_name(axis))
            .collect();
        assert_eq!(
            names,
            vec!["Ex", "Ey", "Ez", "Mx", "My", "Mz", "Jx", "Jy", "Jz", "Qx", "Qy", "Qz"]
        );
        for (_, _, grid) in fields.iter() {
            assert_eq!(grid.shape(), &[10, 5, 4]);
            assert!(grid.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn units_follow_the_field_kind() {
        assert_eq!(FieldKind::Electric.units(), "N.C^-1");
        assert_eq!(FieldKind::Magnetic.units(), "T");
        assert_eq!(FieldKind::HalfStepMagnetic.description(), "magnetic field at halfstep");
    }
}
