use crate::action::ActionOutcome;
use crate::{Client, Result};
use tracing::debug;

/// Prompt shown before a delete goes out (same wording as the original UI).
pub const DELETE_PROMPT: &str = "Do you want to delete this item?";

impl Client {
	/// Confirm-gated delete of the resource behind `url`.
	///
	/// Sends exactly one `DELETE` with a JSON content type and no body.
	/// Absolute URLs go out as given; relative paths are joined onto the
	/// configured endpoint.
	pub async fn delete_item(&self, url: &str) -> Result<ActionOutcome> {
		if !self.confirmer().confirm(DELETE_PROMPT) {
			return Ok(ActionOutcome::Declined);
		}

		let url = self.resolve_url(url);
		let res = self.web_client().do_delete(&url).await?;

		if res.is_success() {
			self.reload_hook().run().await;
			Ok(ActionOutcome::Applied)
		} else {
			debug!(%url, status = %res.status, "delete rejected by backend");
			Ok(ActionOutcome::Rejected(res.status.as_u16()))
		}
	}
}
