//! Batch root search across lists of candidate polynomials.
//!
//! Every source polynomial is searched for roots in every target field.
//! Candidates that do not define a field are recorded and skipped so that a
//! single run can test a whole catalog.

use serde::Serialize;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::roots::{RootReport, RootSearch};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::galois::{Field, FieldDescriptor, GaloisArithmetic};

/// A candidate polynomial that was skipped, with the reason.
#[derive(Debug)]
pub struct RejectedPolynomial {
    /// The candidate
    pub polynomial: u64,
    /// Why no field could be built from it
    pub error: Error,
}

/// Result of a batch root search.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    /// One report per (target, source) pair, target-major in input order
    pub reports: Vec<RootReport>,
    /// Candidates that did not define a field
    pub rejected: Vec<RejectedPolynomial>,
}

impl SweepOutcome {
    /// Iterates over the reports that found at least one root.
    pub fn with_roots(&self) -> impl Iterator<Item = &RootReport> {
        self.reports.iter().filter(|report| report.has_root())
    }
}

/// Serializable summary of a sweep, rejections reduced to their messages.
#[derive(Debug, Serialize)]
pub struct SweepSummary<'a> {
    /// Every report
    pub reports: &'a [RootReport],
    /// Rejected candidates and the reason
    pub rejected: Vec<(u64, String)>,
}

impl<'a> From<&'a SweepOutcome> for SweepSummary<'a> {
    fn from(outcome: &'a SweepOutcome) -> Self {
        Self {
            reports: &outcome.reports,
            rejected: outcome
                .rejected
                .iter()
                .map(|r| (r.polynomial, r.error.to_string()))
                .collect(),
        }
    }
}

/// Searches every target field for roots of every source polynomial.
///
/// # Arguments
///
/// * `sources` - Polynomials to evaluate
/// * `targets` - Defining polynomials of the fields to scan
/// * `config` - Representation selection and progress settings
///
/// # Errors
///
/// Returns an error only if the configuration is invalid; bad candidates end
/// up in [`SweepOutcome::rejected`].
pub fn sweep(sources: &[u64], targets: &[u64], config: &Config) -> Result<SweepOutcome> {
    config.validate()?;

    let search = RootSearch::new(config);
    let mut outcome = SweepOutcome::default();

    let mut source_fields: Vec<FieldDescriptor> = Vec::with_capacity(sources.len());
    for &polynomial in sources {
        // Tables are built only to prove the source is a field, then dropped.
        match Field::new(polynomial, config) {
            Ok(field) => source_fields.push(*field.descriptor()),
            Err(error) => reject(&mut outcome, polynomial, error),
        }
    }

    let scan_target = |&polynomial: &u64| -> std::result::Result<Vec<RootReport>, RejectedPolynomial> {
        let field = Field::new(polynomial, config)
            .map_err(|error| RejectedPolynomial { polynomial, error })?;
        debug!("Scanning {} against {} sources", field, source_fields.len());
        Ok(source_fields
            .iter()
            .map(|source| search.run(source, &field))
            .collect())
    };

    #[cfg(feature = "parallel")]
    let scanned: Vec<_> = targets.par_iter().map(scan_target).collect();
    #[cfg(not(feature = "parallel"))]
    let scanned: Vec<_> = targets.iter().map(scan_target).collect();

    for result in scanned {
        match result {
            Ok(reports) => outcome.reports.extend(reports),
            Err(rejected) => reject(&mut outcome, rejected.polynomial, rejected.error),
        }
    }

    Ok(outcome)
}

fn reject(outcome: &mut SweepOutcome, polynomial: u64, error: Error) {
    warn!("Skipping {:#x}: {}", polynomial, error);
    outcome.rejected.push(RejectedPolynomial { polynomial, error });
}
