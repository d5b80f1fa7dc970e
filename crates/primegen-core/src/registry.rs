//! Generator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::generator::{Generator, PrimeError, PrimeGenerator};
use crate::primality::{TrialDivision, WheelDivision};

/// Factory trait for creating generators.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create a generator by strategy name.
    fn get(&self, name: &str) -> Result<Arc<dyn Generator>, PrimeError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Generator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_generator(name: &str) -> Result<Arc<dyn Generator>, PrimeError> {
        match name {
            "trial" => Ok(Arc::new(PrimeGenerator::new(Arc::new(TrialDivision::new())))),
            "wheel" => Ok(Arc::new(PrimeGenerator::new(Arc::new(WheelDivision::new())))),
            _ => Err(PrimeError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Generator>, PrimeError> {
        if let Some(gen) = self.cache.read().get(name) {
            return Ok(Arc::clone(gen));
        }

        let gen = Self::create_generator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&gen));
        Ok(gen)
    }

    fn available(&self) -> Vec<&str> {
        vec!["trial", "wheel"]
    }
}
