//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] used as the
//! opaque value type handed back by backing caches.
//!
//! Aggregation only needs to move values around and compare them for equality, so the
//! wrapper stays deliberately small: constructors from the common byte and string
//! types, slice/string accessors, and value equality.
//!
//! # Examples
//!
//! ```rust
//! use joincache_core::Blob;
//!
//! let blob = Blob::from("apple");
//! assert_eq!(blob.as_str(), "apple");
//! assert_eq!(blob.len(), 5);
//! assert_eq!(blob, Blob::from("apple".as_bytes()));
//! ```

use std::fmt::{Debug, Display};

/// An opaque cache value: a thin wrapper around [`Vec<u8>`] with value equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the underlying bytes as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	/// Returns the underlying bytes as a `Vec<u8>`, consuming the `Blob`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the content interpreted as UTF-8, replacing invalid sequences.
	#[must_use]
	pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Returns the length in bytes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the `Blob` contains no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl From<String> for Blob {
	fn from(value: String) -> Self {
		Blob(value.into_bytes())
	}
}

impl From<&str> for Blob {
	fn from(value: &str) -> Self {
		Blob(value.as_bytes().to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Blob").field(&self.as_str()).finish()
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.as_str())
	}
}
