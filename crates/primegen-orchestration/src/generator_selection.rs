//! Generator selection logic.

use std::sync::Arc;

use primegen_core::generator::{Generator, PrimeError};
use primegen_core::registry::GeneratorFactory;

/// Get generators to run based on strategy selection.
///
/// `"all"` selects every strategy the factory knows, in its listed order.
pub fn get_generators_to_run(
    strategy: &str,
    factory: &dyn GeneratorFactory,
) -> Result<Vec<Arc<dyn Generator>>, PrimeError> {
    match strategy {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
