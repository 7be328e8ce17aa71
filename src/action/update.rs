use crate::action::ActionOutcome;
use crate::page::FormSet;
use crate::{Client, Error, Result};
use tracing::debug;

/// Prompt shown before an update goes out (same wording as the original UI).
pub const UPDATE_PROMPT: &str = "Do you want to update this item?";

impl Client {
	/// Confirm-gated update of the resource behind `url`.
	///
	/// The first run of digits in `url` names the form whose fields become the
	/// JSON body of a single `PUT`. A URL without digits or a form id absent
	/// from `forms` is an error before anything is sent.
	pub async fn update_item(&self, url: &str, forms: &FormSet) -> Result<ActionOutcome> {
		let form_id = extract_numeric_id(url).ok_or_else(|| Error::MissingResourceId { url: url.to_string() })?;
		let form = forms.get(&form_id).ok_or(Error::FormNotFound { form_id })?;

		if !self.confirmer().confirm(UPDATE_PROMPT) {
			return Ok(ActionOutcome::Declined);
		}

		let payload = form.to_json();
		debug!(payload = %payload, url, "sending update payload");

		let url = self.resolve_url(url);
		let res = self.web_client().do_put(&url, payload).await?;

		if res.is_success() {
			self.reload_hook().run().await;
			Ok(ActionOutcome::Applied)
		} else {
			debug!(%url, status = %res.status, "update rejected by backend");
			Ok(ActionOutcome::Rejected(res.status.as_u16()))
		}
	}
}

/// First maximal run of ASCII digits, kept as a string (it names a form id).
fn extract_numeric_id(url: &str) -> Option<String> {
	let start = url.find(|c: char| c.is_ascii_digit())?;
	let rest = &url[start..];
	let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
	Some(rest[..end].to_string())
}

// region:    --- Tests


// endregion: --- Tests
