//! Per-tick samples for plotting
//!
//! For a body at time `t` the sampler derives
//! - `radius = |position|`
//! - `speed  = |velocity|`
//!
//! and forwards `(t, radius)`, `(t, speed)` and `(radius, speed)` to a
//! [`PlotSurface`], one point per panel.

use crate::configuration::config::IoConfig;
use crate::persistence::record::BodyRecord;
use crate::telemetry::plot::{Axis, PlotSurface, PointStyle};

/// Derived scalars for one body at one time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub radius: f64, // distance from origin
    pub speed: f64,
}

impl Sample {
    pub fn of(record: &BodyRecord, time: f64) -> Self {
        Self {
            time,
            radius: record.position.norm(),
            speed: record.velocity.norm(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleCollector {
    pub style: PointStyle,
}

impl SampleCollector {
    pub fn new(style: PointStyle) -> Self {
        Self { style }
    }

    pub fn from_config(cfg: &IoConfig) -> Self {
        Self::new(cfg.plot.clone())
    }

    pub fn sample<P: PlotSurface + ?Sized>(&self, record: &BodyRecord, time: f64, surface: &mut P) {
        let s = Sample::of(record, time);
        surface.scatter(Axis::TimeRadius, s.time, s.radius, &self.style);
        surface.scatter(Axis::TimeSpeed, s.time, s.speed, &self.style);
        surface.scatter(Axis::RadiusSpeed, s.radius, s.speed, &self.style);
    }
}
