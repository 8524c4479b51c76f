//! Browser bindings: sensor listeners, interval timer, canvas measurement.
//!
//! Everything here only pushes into an [`EventChannel`](crate::simulation::EventChannel);
//! the world applies the events on its next dispatch.

mod browser;

pub use browser::{canvas_client_size, IntervalTimer, SensorKind, SensorSubscription};
