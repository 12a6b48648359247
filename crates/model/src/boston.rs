//! The built-in model, fitted to the Boston housing dataset.
//!
//! Entries are listed in model order (see [`Variable::ALL`]).
//!
//! [`Variable::ALL`]: crate::Variable::ALL

use crate::{Coefficients, VariableConfig};

pub(crate) const COEFFICIENTS: Coefficients = Coefficients::from_parts(
    36.891_960,
    [
        -0.113_139,  // crim
        0.047_052,   // zn
        0.040_311,   // indus
        -17.366_999, // nox
        3.850_492,   // rm
        0.002_784,   // age
        -1.485_374,  // dis
        0.328_311,   // rad
        -0.013_756,  // tax
        -0.990_958,  // ptratio
        0.009_741,   // black
        -0.534_158,  // lstat
    ],
);

pub(crate) const VARIABLES: [VariableConfig; 12] = [
    VariableConfig::from_parts(0.006_32, 88.976_2, 0.1, 0.256_51, 2),
    VariableConfig::from_parts(0.0, 100.0, 1.0, 0.0, 0),
    VariableConfig::from_parts(0.46, 27.74, 0.1, 9.69, 2),
    VariableConfig::from_parts(0.385, 0.871, 0.01, 0.538, 3),
    VariableConfig::from_parts(3.561, 8.78, 0.1, 6.2085, 2),
    VariableConfig::from_parts(2.9, 100.0, 1.0, 77.5, 1),
    VariableConfig::from_parts(1.1296, 12.1265, 0.1, 3.207_45, 2),
    VariableConfig::from_parts(1.0, 24.0, 1.0, 5.0, 0),
    VariableConfig::from_parts(187.0, 711.0, 10.0, 330.0, 0),
    VariableConfig::from_parts(12.6, 22.0, 0.1, 19.05, 1),
    VariableConfig::from_parts(0.32, 396.9, 1.0, 391.44, 2),
    VariableConfig::from_parts(1.73, 37.97, 0.1, 11.36, 2),
];
