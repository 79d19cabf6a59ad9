//! Table validation.
//!
//! A set of tables describes a true field only if the multiplicative group
//! they encode is cyclic of order `size - 1`, i.e. the generator walk reached
//! every discrete-log index exactly once.

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::FieldDescriptor;
use crate::error::{Error, Result};

/// Verifies that `log_table` visits every log index in `[0, size - 2]`.
///
/// # Arguments
///
/// * `descriptor` - Shape of the field the table was generated for
/// * `log_table` - Discrete log of each element, indexed by element value
///
/// # Errors
///
/// Returns [`Error::MalformedField`] listing every unvisited index when the
/// polynomial is not primitive for its degree.
pub fn validate_tables(descriptor: &FieldDescriptor, log_table: &[Option<u64>]) -> Result<()> {
    let unvisited = unvisited_indices(descriptor, log_table);
    if unvisited.is_empty() {
        return Ok(());
    }

    warn!(
        "{} log indices not visited for {}, first is {}",
        unvisited.len(),
        descriptor,
        unvisited[0]
    );
    for index in &unvisited {
        debug!("{} not visited", index);
    }

    Err(Error::MalformedField {
        polynomial: descriptor.primitive_poly(),
        unvisited,
    })
}

/// Returns the log indices in `[0, size - 2]` that no element maps to.
fn unvisited_indices(descriptor: &FieldDescriptor, log_table: &[Option<u64>]) -> Vec<u64> {
    let order = descriptor.element_count() as usize;
    let mut visited = bitvec![0; descriptor.size() as usize];

    for &log in log_table.iter().flatten() {
        if let Some(mut slot) = visited.get_mut(log as usize) {
            *slot = true;
        }
    }

    visited[..order].iter_zeros().map(|i| i as u64).collect()
}
