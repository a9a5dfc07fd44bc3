use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

pub const TEMPERATURE_RANGE: Range<f64> = 20.0..35.0;

pub const HUMIDITY_RANGE: Range<f64> = 60.0..80.0;

pub const TEMPERATURE_ALERT_THRESHOLD: f64 = 30.0;

/// One synthetic measurement. Field order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: f64,

    pub humidity: f64,
}

impl Reading {
    pub fn temperature_alert(&self) -> bool {
        self.temperature > TEMPERATURE_ALERT_THRESHOLD
    }

    pub fn to_json(&self) -> String {
        // Two finite f64 fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct ReadingGenerator<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> ReadingGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> Reading {
        Reading {
            temperature: self.rng.gen_range(TEMPERATURE_RANGE),
            humidity: self.rng.gen_range(HUMIDITY_RANGE),
        }
    }
}

impl ReadingGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}
