//! Map event definitions.

use serde::{Deserialize, Serialize};

/// Events published by a map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The view finished moving (pan or zoom); projections have changed
    MoveEnd {
        /// Zoom level after the move.
        zoom: f64,
    },
    /// The zoom level changed
    ZoomEnd {
        /// New zoom level.
        zoom: f64,
    },
    /// The viewport was resized
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

impl MapEvent {
    /// Get the kind of this event
    pub fn kind(&self) -> MapEventKind {
        match self {
            MapEvent::MoveEnd { .. } => MapEventKind::MoveEnd,
            MapEvent::ZoomEnd { .. } => MapEventKind::ZoomEnd,
            MapEvent::Resize { .. } => MapEventKind::Resize,
        }
    }

    /// Short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            MapEvent::MoveEnd { zoom } => format!("move end at zoom {}", zoom),
            MapEvent::ZoomEnd { zoom } => format!("zoom end at {}", zoom),
            MapEvent::Resize { width, height } => format!("resized to {}x{}", width, height),
        }
    }
}

/// Event kind for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEventKind {
    MoveEnd,
    ZoomEnd,
    Resize,
}

impl std::fmt::Display for MapEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveEnd => write!(f, "moveend"),
            Self::ZoomEnd => write!(f, "zoomend"),
            Self::Resize => write!(f, "resize"),
        }
    }
}
