//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod server;

pub use server::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

use estore_client::resolver::{Confirmer, ReloadHook};
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

static INIT_TRACING: Once = Once::new();

/// Initialize tracing for tests (controlled via `RUST_LOG`).
pub fn init_tracing() {
	INIT_TRACING.call_once(|| {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.init();
	});
}

/// Confirmer that always answers `answer` and counts how often it was asked.
pub fn counting_confirmer(answer: bool) -> (Confirmer, Arc<AtomicUsize>) {
	let count = Arc::new(AtomicUsize::new(0));
	let count_inner = count.clone();
	let confirmer = Confirmer::from_fn(move |_prompt| {
		count_inner.fetch_add(1, Ordering::SeqCst);
		answer
	});
	(confirmer, count)
}

/// Reload hook that counts its runs.
pub fn counting_reload_hook() -> (ReloadHook, Arc<AtomicUsize>) {
	let count = Arc::new(AtomicUsize::new(0));
	let count_inner = count.clone();
	let hook = ReloadHook::from_fn(move || {
		let count = count_inner.clone();
		async move {
			count.fetch_add(1, Ordering::SeqCst);
		}
	});
	(hook, count)
}
