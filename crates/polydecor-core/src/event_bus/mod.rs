//! # Map Event Module
//!
//! Publish/subscribe hub through which a map view notifies decorators of
//! viewport changes.
//!
//! ## Overview
//!
//! - The map owns a [`MapEventHub`] and publishes [`MapEvent`]s after its
//!   view changes
//! - Decorators register a handler when attached and unsubscribe with the
//!   returned [`SubscriptionId`] when detached
//! - Handlers run synchronously on the publishing thread
//!
//! ## Usage
//!
//! ```rust
//! use polydecor_core::event_bus::{EventFilter, MapEvent, MapEventHub, MapEventKind};
//!
//! let hub = MapEventHub::new();
//! let id = hub.subscribe(EventFilter::Kinds(vec![MapEventKind::MoveEnd]), |event| {
//!     println!("map moved: {}", event.description());
//! });
//!
//! hub.publish(MapEvent::MoveEnd { zoom: 12.0 });
//! assert!(hub.unsubscribe(id));
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
