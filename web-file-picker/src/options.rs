//! Option objects for `showOpenFilePicker` / `showSaveFilePicker`.

use crate::filter::FileType;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Options accepted by the browser's `showOpenFilePicker`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct OpenFilePickerOptions {
    /// Selectable file types. Omitted entirely when no filter survived
    /// translation; the picker then falls back to accepting all files.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub types: Option<Vec<FileType>>,
    /// `true` whenever `types` is present, absent otherwise.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub exclude_accept_all_option: Option<bool>,
    /// Whether more than one file may be picked.
    pub multiple: bool,
}

impl OpenFilePickerOptions {
    /// Builds open-dialog options from desktop-style filter specs.
    ///
    /// Untranslatable specs are dropped individually; one bad filter never
    /// fails the dialog.
    pub fn new<S: AsRef<str>>(filter_specs: &[S], accept_multiple: bool) -> Self {
        let types = translate_filters(filter_specs);
        Self {
            exclude_accept_all_option: types.is_some().then_some(true),
            types,
            multiple: accept_multiple,
        }
    }
}

/// Options accepted by the browser's `showSaveFilePicker`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct SaveFilePickerOptions {
    /// File name preselected in the dialog; omitted when empty.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub suggested_name: Option<String>,
    /// Selectable file types; omitted when no filter survived translation.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub types: Option<Vec<FileType>>,
}

impl SaveFilePickerOptions {
    /// Builds save-dialog options from filter specs and a suggested name.
    pub fn new<S: AsRef<str>>(filter_specs: &[S], suggested_name: impl Into<String>) -> Self {
        Self {
            suggested_name: Some(suggested_name.into()).filter(|n| !n.is_empty()),
            types: translate_filters(filter_specs),
        }
    }
}

/// Translates a filter-spec list, dropping specs that cannot be mapped.
///
/// `None` when nothing survives, so callers can omit the `types` key.
pub(crate) fn translate_filters<S: AsRef<str>>(filter_specs: &[S]) -> Option<Vec<FileType>> {
    let types: Vec<FileType> = filter_specs
        .iter()
        .filter_map(|spec| match FileType::parse(spec.as_ref()) {
            Ok(ty) => Some(ty),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                debug!(filter = spec.as_ref(), error = %_err, "dropping untranslatable filter");
                None
            }
        })
        .collect();
    if types.is_empty() { None } else { Some(types) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Extension;

    fn ext_strs(ty: &FileType) -> Vec<&str> {
        ty.accept.extensions().iter().map(Extension::as_str).collect()
    }

    #[test]
    fn open_keeps_only_translatable_filters() {
        let opts = OpenFilePickerOptions::new(&["*.png", "*"], false);
        let types = opts.types.as_ref().unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(ext_strs(&types[0]), [".png"]);
        assert_eq!(opts.exclude_accept_all_option, Some(true));
        assert!(!opts.multiple);
    }

    #[test]
    fn open_with_no_filters_accepts_everything() {
        let opts = OpenFilePickerOptions::new::<&str>(&[], true);
        assert_eq!(opts.types, None);
        assert_eq!(opts.exclude_accept_all_option, None);
        assert!(opts.multiple);
    }

    #[test]
    fn open_with_only_bad_filters_accepts_everything() {
        let opts = OpenFilePickerOptions::new(&["*", "no extension"], false);
        assert_eq!(opts.types, None);
        assert_eq!(opts.exclude_accept_all_option, None);
    }

    #[test]
    fn open_preserves_order_and_duplicates() {
        let opts = OpenFilePickerOptions::new(&["*.png", "Docs (*.pdf)", "*.png"], false);
        let types = opts.types.unwrap();
        assert_eq!(types.len(), 3);
        assert_eq!(ext_strs(&types[0]), [".png"]);
        assert_eq!(types[1].description.as_deref(), Some("Docs"));
        assert_eq!(ext_strs(&types[2]), [".png"]);
    }

    #[test]
    fn save_omits_empty_suggested_name() {
        let opts = SaveFilePickerOptions::new(&["*.pdf"], "");
        assert_eq!(opts.suggested_name, None);
        assert!(opts.types.is_some());
    }

    #[test]
    fn save_carries_suggested_name() {
        let opts = SaveFilePickerOptions::new(&[] as &[&str], "report.pdf");
        assert_eq!(opts.suggested_name.as_deref(), Some("report.pdf"));
        assert_eq!(opts.types, None);
    }

    #[test]
    fn translation_is_idempotent() {
        let specs = ["Images (*.png *.jpg)", "*", "*.txt"];
        assert_eq!(
            OpenFilePickerOptions::new(&specs, true),
            OpenFilePickerOptions::new(&specs, true)
        );
        assert_eq!(
            SaveFilePickerOptions::new(&specs, "a.txt"),
            SaveFilePickerOptions::new(&specs, "a.txt")
        );
    }
}
