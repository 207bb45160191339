//! Parameter grid — named dimensions and their Cartesian enumeration.
//!
//! Dimension order is declared, not alphabetical, and it is part of the
//! observable contract: combinations enumerate with the last dimension
//! varying fastest, and the search's tie-break keeps the first-enumerated
//! maximum.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use siglab_core::{ParamSet, ParamValue, StrategySpec};

/// Grid validation errors. All of these are fatal at search setup.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("parameter space for '{name}' is empty")]
    EmptyDimension { name: String },

    #[error("grid is missing required parameter '{name}'")]
    MissingParameter { name: String },

    #[error("grid binds '{name}', which the strategy does not declare")]
    UnknownParameter { name: String },

    #[error("grid declares '{name}' twice")]
    DuplicateParameter { name: String },
}

/// One grid dimension: a parameter name and its candidate values, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDimension {
    pub name: String,
    pub values: Vec<ParamValue>,
}

/// Ordered set of dimensions spanning a strategy's parameter space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    dimensions: Vec<GridDimension>,
}

impl ParamGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dimension. Declaration order is enumeration order.
    pub fn dimension(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = ParamValue>,
    ) -> Self {
        self.dimensions.push(GridDimension {
            name: name.into(),
            values: values.into_iter().collect(),
        });
        self
    }

    pub fn from_dimensions(dimensions: Vec<GridDimension>) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> &[GridDimension] {
        &self.dimensions
    }

    /// Total number of combinations: the product of the dimension sizes.
    pub fn size(&self) -> usize {
        self.dimensions.iter().map(|d| d.values.len()).product()
    }

    /// A grid usable with `spec`: every required name bound exactly once,
    /// no stray names, no empty value list.
    pub fn validate(&self, spec: &StrategySpec) -> Result<(), GridError> {
        for (i, dim) in self.dimensions.iter().enumerate() {
            if dim.values.is_empty() {
                return Err(GridError::EmptyDimension {
                    name: dim.name.clone(),
                });
            }
            if !spec.has_param(&dim.name) {
                return Err(GridError::UnknownParameter {
                    name: dim.name.clone(),
                });
            }
            if self.dimensions[..i].iter().any(|d| d.name == dim.name) {
                return Err(GridError::DuplicateParameter {
                    name: dim.name.clone(),
                });
            }
        }
        for name in spec.param_names() {
            if !self.dimensions.iter().any(|d| d.name == name) {
                return Err(GridError::MissingParameter {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Enumerate every combination in declared order, last dimension varying
    /// fastest. Yields nothing if any dimension is empty.
    pub fn combinations(&self) -> Combinations<'_> {
        let empty = self.dimensions.iter().any(|d| d.values.is_empty());
        Combinations {
            grid: self,
            cursor: vec![0; self.dimensions.len()],
            done: empty,
        }
    }
}

/// Odometer-style iterator over a grid's combinations.
pub struct Combinations<'a> {
    grid: &'a ParamGrid,
    cursor: Vec<usize>,
    done: bool,
}

impl Iterator for Combinations<'_> {
    type Item = ParamSet;

    fn next(&mut self) -> Option<ParamSet> {
        if self.done {
            return None;
        }

        let assignment: ParamSet = self
            .grid
            .dimensions
            .iter()
            .zip(&self.cursor)
            .map(|(dim, &idx)| (dim.name.clone(), dim.values[idx]))
            .collect();

        // Advance the rightmost digit; carry leftward.
        self.done = true;
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.grid.dimensions[pos].values.len() {
                self.done = false;
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(assignment)
    }
}
