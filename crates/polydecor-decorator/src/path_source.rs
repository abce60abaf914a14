//! Path inputs accepted by the decorator and their flattening into
//! plain coordinate lists.

use polydecor_core::LatLng;
use serde::{Deserialize, Serialize};

/// One decorated input.
///
/// Polygon rings are closed when flattened so the pattern also runs along
/// the closing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathInput {
    Polyline { coords: Vec<LatLng> },
    Polygon { rings: Vec<Vec<LatLng>> },
    Multi { paths: Vec<PathInput> },
}

impl PathInput {
    pub fn polyline(coords: Vec<LatLng>) -> Self {
        PathInput::Polyline { coords }
    }

    /// Single-ring polygon
    pub fn polygon(ring: Vec<LatLng>) -> Self {
        PathInput::Polygon { rings: vec![ring] }
    }

    /// Every coordinate of this input, in order, rings not closed
    pub fn coords(&self) -> Box<dyn Iterator<Item = &LatLng> + '_> {
        match self {
            PathInput::Polyline { coords } => Box::new(coords.iter()),
            PathInput::Polygon { rings } => Box::new(rings.iter().flatten()),
            PathInput::Multi { paths } => Box::new(paths.iter().flat_map(|p| p.coords())),
        }
    }
}

impl From<Vec<LatLng>> for PathInput {
    fn from(coords: Vec<LatLng>) -> Self {
        PathInput::Polyline { coords }
    }
}

/// Flatten heterogeneous inputs into one coordinate list per path.
///
/// Each polygon ring gets its first point appended, even when the ring is
/// already closed. The resulting zero-length edge is skipped later when
/// segments are built.
pub fn flatten_paths(inputs: &[PathInput]) -> Vec<Vec<LatLng>> {
    let mut out = Vec::new();
    for input in inputs {
        flatten_into(input, &mut out);
    }
    out
}

fn flatten_into(input: &PathInput, out: &mut Vec<Vec<LatLng>>) {
    match input {
        PathInput::Polyline { coords } => out.push(coords.clone()),
        PathInput::Polygon { rings } => {
            for ring in rings {
                let mut closed = ring.clone();
                if let Some(first) = ring.first() {
                    closed.push(*first);
                }
                out.push(closed);
            }
        }
        PathInput::Multi { paths } => {
            for path in paths {
                flatten_into(path, out);
            }
        }
    }
}
