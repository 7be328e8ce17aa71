use crate::page::FormData;
use std::collections::HashMap;

/// The forms of the currently displayed page, keyed by element id.
///
/// Stand-in for `document.getElementById` in the original UI. Ids stay
/// strings; the numeric substring of an update URL is matched against them
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct FormSet {
	forms: HashMap<String, FormData>,
}

impl FormSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, form_id: impl Into<String>, form: FormData) {
		self.forms.insert(form_id.into(), form);
	}

	#[must_use]
	pub fn with(mut self, form_id: impl Into<String>, form: FormData) -> Self {
		self.insert(form_id, form);
		self
	}

	#[must_use]
	pub fn get(&self, form_id: &str) -> Option<&FormData> {
		self.forms.get(form_id)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.forms.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.forms.len()
	}
}
