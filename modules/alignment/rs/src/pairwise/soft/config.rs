use derive_getters::Getters;
use eyre::Result;

use super::{FillOrder, SmoothMax};
use crate::pairwise::Boundary;
use crate::pairwise::scoring::Score;

pub const DEFAULT_TEMPERATURE: f64 = 0.01;

/// Parameters of the soft alignment engine.
#[derive(Clone, Copy, PartialEq, Debug, Getters)]
pub struct Config<S: Score> {
    temperature: S,
    boundary: Boundary,
    order: FillOrder,
}

impl<S: Score> Default for Config<S> {
    fn default() -> Self {
        Self {
            temperature: num::cast(DEFAULT_TEMPERATURE).unwrap_or_else(S::epsilon),
            boundary: Boundary::default(),
            order: FillOrder::default(),
        }
    }
}

impl<S: Score> Config<S> {
    pub fn new(temperature: S) -> Result<Self> {
        let mut config = Self::default();
        config.set_temperature(temperature)?;
        Ok(config)
    }

    pub fn set_temperature(&mut self, temperature: S) -> Result<&mut Self> {
        SmoothMax::new(temperature)?;
        self.temperature = temperature;
        Ok(self)
    }

    pub fn set_boundary(&mut self, boundary: Boundary) -> &mut Self {
        self.boundary = boundary;
        self
    }

    pub fn set_order(&mut self, order: FillOrder) -> &mut Self {
        self.order = order;
        self
    }
}
