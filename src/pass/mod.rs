//! Password generation: pools, requests, single draws and unique batches.

pub mod batch;
pub mod charset;
mod generate;
pub mod request;

use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

pub use batch::{BatchBuilder, DEFAULT_MAX_ATTEMPTS, PasswordBatch};
pub use charset::StrengthTier;
pub use generate::generate;
pub use request::GenerationRequest;

use crate::editor::{self, Placement, TextTarget};
use crate::error::Error;

/// Separator placed between passwords in the output text.
pub const SEPARATOR: &str = "\n";

/// Generate a request's batch and join it with [`SEPARATOR`].
pub fn generate_text<R: RngCore + ?Sized>(
    request: &GenerationRequest,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Zeroizing<String>, crate::error::GenerateError> {
    let batch = BatchBuilder::from(request)
        .max_attempts(max_attempts)
        .build(request.count, rng)?;
    Ok(batch.join(SEPARATOR))
}

/// Parse `raw`, generate the batch and place it into `target`.
///
/// Any parse or generation failure returns before the target is touched.
pub fn insert<R: RngCore + ?Sized>(
    tier: StrengthTier,
    raw: &str,
    max_attempts: usize,
    rng: &mut R,
    target: Option<&mut dyn TextTarget>,
) -> Result<(GenerationRequest, Placement), Error> {
    // Callers report the error; logging it louder would print it twice.
    let request = GenerationRequest::parse(tier, raw).inspect_err(|e| {
        debug!(error = %e, "Rejected request");
    })?;
    debug!(
        tier = %request.tier,
        length = request.length,
        count = request.count,
        "Parsed request"
    );

    let text = generate_text(&request, max_attempts, rng)?;
    let placement = editor::place_text(target, &text)?;
    Ok((request, placement))
}
