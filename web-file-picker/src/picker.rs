use thiserror::Error;

use crate::options::{OpenFilePickerOptions, SaveFilePickerOptions};

/// Picker mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerMode {
    /// Pick a single file
    OpenFile,
    /// Pick multiple files
    OpenFiles,
    /// Save file
    SaveFile,
}

/// Errors returned when showing a picker
#[derive(Error, Debug)]
pub enum PickerError {
    /// User dismissed the picker
    #[error("cancelled")]
    Cancelled,
    /// No picker API available on this target
    #[error("file picker unsupported on this platform")]
    Unsupported,
    /// Error reported by the browser
    #[error("browser error: {0}")]
    Browser(String),
}

/// Builder for launching a browser file picker.
///
/// Filters use the desktop convention and untranslatable ones are dropped,
/// so a dialog opened with only wildcard filters simply accepts all files.
///
/// Examples
/// ```
/// use web_file_picker::{FilePicker, PickerMode};
/// let opts = FilePicker::new(PickerMode::OpenFiles)
///     .filter("Images (*.png *.jpg)")
///     .filter("*.txt")
///     .open_options();
/// assert!(opts.multiple);
/// ```
#[derive(Clone, Debug)]
pub struct FilePicker {
    pub(crate) mode: PickerMode,
    pub(crate) filter_specs: Vec<String>,
    pub(crate) suggested_name: Option<String>,
}

impl FilePicker {
    /// Create a new builder with the given mode
    pub fn new(mode: PickerMode) -> Self {
        Self {
            mode,
            filter_specs: Vec::new(),
            suggested_name: None,
        }
    }

    /// Add one desktop-style filter spec (e.g. `"Images (*.png *.jpg)"`).
    pub fn filter(mut self, filter_spec: impl Into<String>) -> Self {
        self.filter_specs.push(filter_spec.into());
        self
    }

    /// Add multiple filter specs, appended after any already added.
    pub fn filters<I, S>(mut self, filter_specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_specs
            .extend(filter_specs.into_iter().map(Into::into));
        self
    }

    /// Set the file name preselected by save dialogs.
    pub fn suggested_name(mut self, name: impl Into<String>) -> Self {
        self.suggested_name = Some(name.into());
        self
    }

    /// Options for `showOpenFilePicker`, per the current builder state.
    pub fn open_options(&self) -> OpenFilePickerOptions {
        OpenFilePickerOptions::new(&self.filter_specs, self.mode == PickerMode::OpenFiles)
    }

    /// Options for `showSaveFilePicker`, per the current builder state.
    pub fn save_options(&self) -> SaveFilePickerOptions {
        SaveFilePickerOptions::new(
            &self.filter_specs,
            self.suggested_name.clone().unwrap_or_default(),
        )
    }
}

// Stub outside the browser; the picker API only exists on wasm32.
#[cfg(not(target_arch = "wasm32"))]
impl FilePicker {
    /// Show the picker and return the picked file names. Unsupported outside
    /// wasm32.
    pub async fn show(self) -> Result<Vec<String>, PickerError> {
        Err(PickerError::Unsupported)
    }
}
