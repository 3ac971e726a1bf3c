use std::time::Duration;

use super::errors::BulkActionError;
use super::model::BulkAction;

/// Placeholder backend call for a bulk status change.
///
/// Waits `delay` to mimic a round trip and acknowledges every id. The
/// records themselves are left untouched.
pub(crate) async fn apply_bulk_action(
    action: BulkAction,
    ids: Vec<String>,
    delay: Duration,
) -> Result<usize, BulkActionError> {
    tokio::time::sleep(delay).await;
    if ids.is_empty() {
        return Err(BulkActionError::NothingSelected);
    }
    log::info!("{} acknowledged for {} orders", action.label(), ids.len());
    Ok(ids.len())
}
