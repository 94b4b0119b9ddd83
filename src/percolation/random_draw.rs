use super::RandomNumberGenerator;
use crate::element::ElementId;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Draws element ids with probability proportional to their density.
#[derive(Debug, Clone)]
pub struct RandomDraw {
    densities: BTreeMap<ElementId, f64>,
    sum: f64,
    rng: RandomNumberGenerator,
}

impl RandomDraw {
    /// See [RandomNumberGenerator::new] for the meaning of `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            densities: BTreeMap::new(),
            sum: 0.0,
            rng: RandomNumberGenerator::new(seed),
        }
    }

    /// Negative densities count as 0.
    pub fn set_probability_density(&mut self, id: ElementId, density: f64) {
        self.densities.insert(id, density.max(0.0));
        self.update_sum();
    }

    pub fn probability_density_sum(&self) -> f64 {
        self.sum
    }

    /// Normalized probability of drawing `id`, 0 if all densities are 0.
    pub fn probability(&self, id: ElementId) -> Result<f64> {
        let density = self.densities.get(&id).ok_or(Error::UnknownItem(id))?;
        if self.sum == 0.0 {
            Ok(0.0)
        } else {
            Ok(density / self.sum)
        }
    }

    pub fn remove_item(&mut self, id: ElementId) -> Result<()> {
        self.densities.remove(&id).ok_or(Error::UnknownItem(id))?;
        self.update_sum();
        Ok(())
    }

    pub fn draw_item(&mut self) -> Result<ElementId> {
        if self.densities.is_empty() {
            return Err(Error::EmptyPool);
        }
        if self.sum == 0.0 {
            return Err(Error::ZeroMass);
        }
        let x = self.rng.uniform_positive() * self.sum;
        let mut acc = 0.0;
        let mut last = None;
        for (id, density) in self.densities.iter() {
            if *density > 0.0 {
                last = Some(*id);
            }
            acc += density;
            if x <= acc {
                return Ok(*id);
            }
        }
        // rounding left x just above the accumulated sum
        last.ok_or(Error::ZeroMass)
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }

    fn update_sum(&mut self) {
        self.sum = self.densities.values().sum();
    }
}
