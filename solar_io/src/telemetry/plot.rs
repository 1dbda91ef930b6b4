//! Plotting surface interface and an in-memory scatter implementation

use serde::Deserialize;

/// The three scatter panels fed by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    TimeRadius,  // (t, |r|)
    TimeSpeed,   // (t, |v|)
    RadiusSpeed, // (|r|, |v|)
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::TimeRadius, Axis::TimeSpeed, Axis::RadiusSpeed];
}

/// Marker style for a scatter point
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PointStyle {
    pub color: String, // marker color name
    pub size: f64,     // marker size
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: "red".to_string(),
            size: 1.0,
        }
    }
}

/// Anything that accumulates scatter points on the three panels
pub trait PlotSurface {
    fn scatter(&mut self, axis: Axis, x: f64, y: f64, style: &PointStyle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub style: PointStyle,
}

/// Keeps every point per panel, in arrival order
#[derive(Debug, Default, Clone)]
pub struct ScatterPlot {
    time_radius: Vec<ScatterPoint>,
    time_speed: Vec<ScatterPoint>,
    radius_speed: Vec<ScatterPoint>,
}

impl ScatterPlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, axis: Axis) -> &[ScatterPoint] {
        match axis {
            Axis::TimeRadius => &self.time_radius,
            Axis::TimeSpeed => &self.time_speed,
            Axis::RadiusSpeed => &self.radius_speed,
        }
    }

    pub fn len(&self) -> usize {
        Axis::ALL.iter().map(|&a| self.points(a).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.time_radius.clear();
        self.time_speed.clear();
        self.radius_speed.clear();
    }
}

impl PlotSurface for ScatterPlot {
    fn scatter(&mut self, axis: Axis, x: f64, y: f64, style: &PointStyle) {
        let point = ScatterPoint {
            x,
            y,
            style: style.clone(),
        };
        match axis {
            Axis::TimeRadius => self.time_radius.push(point),
            Axis::TimeSpeed => self.time_speed.push(point),
            Axis::RadiusSpeed => self.radius_speed.push(point),
        }
    }
}
