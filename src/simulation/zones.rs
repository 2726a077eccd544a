//! Comfort, Stretch and Growth zones and the confidence-gated bounds that
//! decide how much of the world the agent may walk.

use std::fmt;

use crate::simulation::params::{
    COMFORT_LOCK_THRESHOLD, GROWTH_UNLOCK_THRESHOLD, MIN_BOUND_LERP_SCALE, PANEL_WIDTH,
    RIGHT_BUFFER, WORLD_WIDTH, ZONE_COUNT,
};

/// One of the three vertical bands of the world, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Comfort,
    Stretch,
    Growth,
}

impl Zone {
    #[must_use]
    pub const fn all() -> [Zone; ZONE_COUNT] {
        [Zone::Comfort, Zone::Stretch, Zone::Growth]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Comfort => 0,
            Self::Stretch => 1,
            Self::Growth => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comfort => "Comfort Zone",
            Self::Stretch => "Stretch Zone",
            Self::Growth => "Growth Zone",
        }
    }

    /// Label without the "Zone" suffix, for narrow columns.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Comfort => "Comfort",
            Self::Stretch => "Stretch",
            Self::Growth => "Growth",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// Which threshold rule overrode the interpolated bounds, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lockout {
    /// Bounds are the plain confidence interpolation.
    Open,
    /// Confidence above 0.5: the Comfort zone is closed.
    ComfortLocked,
    /// Confidence above 0.7: Comfort closed and Growth fully open.
    GrowthUnlocked,
}

/// Horizontal interval the agent may occupy this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub lockout: Lockout,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }

    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min_x, self.max_x)
    }
}

/// Zone edges in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLayout {
    pub zone_width: f64,
    pub comfort_min: f64,
    pub comfort_max: f64,
    pub stretch_min: f64,
    pub stretch_max: f64,
    pub growth_min: f64,
    /// Right-most reachable x, inset from the world edge.
    pub growth_max: f64,
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self::new(PANEL_WIDTH, WORLD_WIDTH)
    }
}

/// Unclamped linear interpolation.
#[inline]
fn lerp(start: f64, stop: f64, t: f64) -> f64 {
    start + (stop - start) * t
}

impl ZoneLayout {
    /// Splits `[left, left + width)` into three equal zones.
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        let zone_width = width / ZONE_COUNT as f64;
        let comfort_max = left + zone_width;
        let stretch_max = left + zone_width * 2.0;
        Self {
            zone_width,
            comfort_min: left,
            comfort_max,
            stretch_min: comfort_max,
            stretch_max,
            growth_min: stretch_max,
            growth_max: left + width - RIGHT_BUFFER,
        }
    }

    /// Left edge of the world.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.comfort_min
    }

    /// Right edge of the world, ignoring the walking buffer.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.comfort_min + self.zone_width * ZONE_COUNT as f64
    }

    /// Zone containing `x`; positions outside the world snap to the nearest zone.
    #[must_use]
    pub fn zone_at(&self, x: f64) -> Zone {
        if x < self.comfort_max {
            Zone::Comfort
        } else if x < self.stretch_max {
            Zone::Stretch
        } else {
            Zone::Growth
        }
    }

    /// Centre x of a zone, used to place its label.
    #[must_use]
    pub fn center_of(&self, zone: Zone) -> f64 {
        self.comfort_min + self.zone_width * (zone.index() as f64 + 0.5)
    }

    /// Allowed horizontal bounds for the given confidence.
    ///
    /// The walkable interval slides right as confidence rises. Above 0.5 the
    /// Comfort zone is excluded and above 0.7 the Growth zone is fully
    /// reachable. Bounds depend only on the instantaneous confidence.
    ///
    /// The minimum edge interpolates 1.2x faster than the maximum edge. The
    /// asymmetry is kept as-is; it may not have been intended.
    #[must_use]
    pub fn allowed_bounds(&self, confidence: f64) -> Bounds {
        let t = confidence;

        let mut min_x = lerp(self.comfort_min, self.stretch_min, t * MIN_BOUND_LERP_SCALE);
        let mut max_x = lerp(self.comfort_max, self.growth_max, t);
        let mut lockout = Lockout::Open;

        if confidence > COMFORT_LOCK_THRESHOLD {
            min_x = self.stretch_min;
            lockout = Lockout::ComfortLocked;
        }
        if confidence > GROWTH_UNLOCK_THRESHOLD {
            min_x = self.stretch_min;
            max_x = self.growth_max;
            lockout = Lockout::GrowthUnlocked;
        }

        // f64::clamp panics on an inverted interval
        if min_x > max_x {
            std::mem::swap(&mut min_x, &mut max_x);
        }

        Bounds {
            min_x,
            max_x,
            lockout,
        }
    }
}
