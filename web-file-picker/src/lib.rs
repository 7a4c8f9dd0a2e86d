#![deny(missing_docs)]
//! Desktop-style file dialog filters for the web File System Access picker.
//!
//! Translates filter specs written in the classic desktop convention
//! (`"Images (*.png *.jpg)"` or a bare `"*.txt"`) into the options objects
//! accepted by the browser's `showOpenFilePicker` and `showSaveFilePicker`.
//!
//! The translation degrades gracefully rather than failing: a filter the web
//! picker cannot express (wildcards, bare file names) is dropped, and a
//! dialog whose filters are all dropped falls back to accepting every file.
//! Within one filter the policy is the opposite: a single bad token
//! invalidates that whole filter. Both policies are deliberate.
//!
//! On `wasm32` the option structs convert to JS objects and the
//! [`FilePicker`] builder can invoke the picker directly; on other targets
//! the same builder exists for testing and [`FilePicker::show`] returns
//! [`PickerError::Unsupported`].

mod filter;
mod options;
mod picker;
#[cfg(target_arch = "wasm32")]
mod web;

pub use filter::{AcceptRule, Extension, FileType, FilterParseError, PLACEHOLDER_MIME};
pub use options::{OpenFilePickerOptions, SaveFilePickerOptions};
pub use picker::{FilePicker, PickerError, PickerMode};
