//! Browser glue: option structs to JS objects, and the actual picker calls.
//!
//! `showOpenFilePicker` / `showSaveFilePicker` are looked up dynamically on
//! `window` instead of going through typed `web-sys` bindings; the File
//! System Access API is still behind the unstable-APIs flag there.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::filter::{AcceptRule, FileType, PLACEHOLDER_MIME};
use crate::options::{OpenFilePickerOptions, SaveFilePickerOptions};
use crate::picker::{FilePicker, PickerError, PickerMode};

// Reflect::set cannot fail on a plain object.
fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).ok()
}

impl AcceptRule {
    /// JS `accept` object: `{ "application/octet-stream": [".ext", ...] }`.
    pub fn to_js(&self) -> Object {
        let exts = Array::new();
        for ext in self.extensions() {
            exts.push(&JsValue::from_str(ext.as_str()));
        }
        let accept = Object::new();
        set(&accept, PLACEHOLDER_MIME, &exts);
        accept
    }
}

impl FileType {
    /// JS `types` entry with `description` (when present) and `accept`.
    pub fn to_js(&self) -> Object {
        let ty = Object::new();
        if let Some(description) = &self.description {
            set(&ty, "description", &JsValue::from_str(description));
        }
        set(&ty, "accept", &self.accept.to_js());
        ty
    }
}

fn types_array(types: &[FileType]) -> Array {
    let arr = Array::new();
    for ty in types {
        arr.push(&ty.to_js());
    }
    arr
}

impl OpenFilePickerOptions {
    /// JS options object for `showOpenFilePicker`.
    pub fn to_js(&self) -> Object {
        let options = Object::new();
        if let Some(types) = &self.types {
            set(&options, "types", &types_array(types));
        }
        if let Some(exclude) = self.exclude_accept_all_option {
            set(&options, "excludeAcceptAllOption", &JsValue::from_bool(exclude));
        }
        set(&options, "multiple", &JsValue::from_bool(self.multiple));
        options
    }
}

impl SaveFilePickerOptions {
    /// JS options object for `showSaveFilePicker`.
    pub fn to_js(&self) -> Object {
        let options = Object::new();
        if let Some(name) = &self.suggested_name {
            set(&options, "suggestedName", &JsValue::from_str(name));
        }
        if let Some(types) = &self.types {
            set(&options, "types", &types_array(types));
        }
        options
    }
}

impl FilePicker {
    /// Show the picker and return the picked file names.
    ///
    /// A dismissed dialog surfaces as [`PickerError::Cancelled`]; a browser
    /// without the File System Access API as [`PickerError::Unsupported`].
    pub async fn show(self) -> Result<Vec<String>, PickerError> {
        let window = web_sys::window()
            .ok_or_else(|| PickerError::Browser("no window object".to_owned()))?;
        let (method, options) = match self.mode {
            PickerMode::SaveFile => ("showSaveFilePicker", self.save_options().to_js()),
            PickerMode::OpenFile | PickerMode::OpenFiles => {
                ("showOpenFilePicker", self.open_options().to_js())
            }
        };
        let picker: Function = get(&window, method)
            .and_then(|f| f.dyn_into().ok())
            .ok_or(PickerError::Unsupported)?;
        let promise = picker
            .call1(&window, &options)
            .map_err(into_picker_error)?
            .unchecked_into::<Promise>();
        let result = JsFuture::from(promise).await.map_err(into_picker_error)?;
        Ok(handle_names(&result))
    }
}

// showOpenFilePicker resolves to an array of handles, showSaveFilePicker to
// a single handle.
fn handle_names(result: &JsValue) -> Vec<String> {
    let handles = if Array::is_array(result) {
        Array::from(result)
    } else {
        Array::of1(result)
    };
    handles
        .iter()
        .filter_map(|handle| get(&handle, "name"))
        .filter_map(|name| name.as_string())
        .collect()
}

fn into_picker_error(err: JsValue) -> PickerError {
    let name = get(&err, "name").and_then(|n| n.as_string());
    if name.as_deref() == Some("AbortError") {
        return PickerError::Cancelled;
    }
    let message = get(&err, "message")
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "unknown".to_owned());
    PickerError::Browser(message)
}
