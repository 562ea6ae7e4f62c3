use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::matrix::DistanceMatrix;

/// Human-readable city names for traces. Falls back to `C0`, `C1`, ... when
/// no names are supplied or the supplied list does not cover every city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityLabels {
    names: Vec<String>,
}

impl CityLabels {
    pub fn new(names: Option<Vec<String>>, n: usize) -> Self {
        match names {
            Some(names) if names.len() == n => Self { names },
            _ => Self::synthetic(n),
        }
    }

    pub fn synthetic(n: usize) -> Self {
        Self { names: (0..n).map(|i| format!("C{i}")).collect() }
    }

    /// Name of `city`, or its index when out of range.
    pub fn get(&self, city: usize) -> String {
        self.names.get(city).cloned().unwrap_or_else(|| city.to_string())
    }
}

/// A coordinate list with optional names, as handed over by an I/O layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl Instance {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, names: None }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.points.len() {
            return Err(Error::invalid_input(format!(
                "{} names supplied for {} cities",
                names.len(),
                self.points.len()
            )));
        }
        self.names = Some(names);
        Ok(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let instance: Self = serde_json::from_str(json)?;
        if instance.points.is_empty() {
            return Err(Error::invalid_input("instance has no cities"));
        }
        if instance.names.as_ref().is_some_and(|names| names.len() != instance.points.len()) {
            return Err(Error::invalid_input("names and points differ in length"));
        }
        Ok(instance)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> CityLabels {
        CityLabels::new(self.names.clone(), self.points.len())
    }

    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_points(&self.points)
    }
}
