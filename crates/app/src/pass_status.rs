use crate::api::StatusApi;
use shared_types::{ImagesConfig, PassIndicator};

/// Fetch the public pass status once and resolve it to what the widget shows.
/// Never touches the session.
pub async fn poll_pass_status<A>(api: &A, images: &ImagesConfig) -> PassIndicator
where
    A: StatusApi + ?Sized,
{
    match api.pass_status().await {
        Ok(response) => PassIndicator::from_response(&response, images),
        Err(err) => {
            if err.is_transport() {
                tracing::error!(error = %err, "failed to fetch pass status");
            } else {
                tracing::warn!(error = %err, "pass status unavailable");
            }
            PassIndicator::from_error(&err)
        }
    }
}
