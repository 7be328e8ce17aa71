use serde_json::{Map, Value};

/// Snapshot of a form's named fields at the moment of submission.
///
/// Field order is kept, and a duplicate name overwrites the earlier value
/// (last write wins), matching `Object.fromEntries` over a browser `FormData`.
#[derive(Debug, Clone, Default)]
pub struct FormData {
	entries: Vec<(String, String)>,
}

/// Constructors
impl FormData {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_entries<N, V>(entries: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		Self {
			entries: entries.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
		}
	}

	#[must_use]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(name, value);
		self
	}
}

impl FormData {
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries.push((name.into(), value.into()));
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Flatten to the JSON object sent as the update body.
	#[must_use]
	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		for (name, value) in &self.entries {
			obj.insert(name.clone(), Value::String(value.clone()));
		}
		Value::Object(obj)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_form_data_to_json_ok() {
		let form = FormData::from_entries([("name", "a"), ("value", "1")]);
		assert_eq!(form.to_json().to_string(), r#"{"name":"a","value":"1"}"#);
	}

	#[test]
	fn test_form_data_duplicate_name_last_wins_ok() {
		let form = FormData::from_entries([("name", "a"), ("name", "b")]);
		assert_eq!(form.to_json().to_string(), r#"{"name":"b"}"#);
	}

	#[test]
	fn test_form_data_empty_ok() {
		let form = FormData::new();
		assert!(form.is_empty());
		assert_eq!(form.to_json().to_string(), "{}");
	}
}

// endregion: --- Tests
