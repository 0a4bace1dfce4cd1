//! WASM bindings for the project dashboard.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::error::BoardError;
use crate::project::board::ProjectBoard;
use crate::project::model::{AdFormat, ProjectStatus};

/// Serialize a value to JsValue with maps as plain JS objects.
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: BoardError| JsValue::from_str(&e.to_string()))
    };
}

/// JavaScript-friendly wrapper around the dashboard's ProjectBoard.
///
/// # Example (JavaScript)
/// ```js
/// const board = JsProjectBoard.withSampleProjects();
/// const hits = board.search('campaign');
/// ```
#[wasm_bindgen]
pub struct JsProjectBoard {
    inner: ProjectBoard,
}

#[wasm_bindgen]
impl JsProjectBoard {
    /// Creates an empty dashboard.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsProjectBoard {
        JsProjectBoard {
            inner: ProjectBoard::new(),
        }
    }

    /// Creates a dashboard seeded with the sample catalog.
    #[wasm_bindgen(js_name = withSampleProjects)]
    pub fn with_sample_projects() -> JsProjectBoard {
        JsProjectBoard {
            inner: ProjectBoard::with_sample_projects(),
        }
    }

    /// All projects in display order.
    #[wasm_bindgen]
    pub fn projects(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.projects())?)
    }

    /// Creates a draft project ("16:9" | "9:16" | "1:1" format) and
    /// returns its identifier.
    #[wasm_bindgen]
    pub fn create(&mut self, title: &str, format: JsValue) -> Result<String, JsValue> {
        let format: AdFormat = from_value(format)?;
        Ok(self.inner.create(title, format))
    }

    /// Duplicates a project and returns the new identifier.
    #[wasm_bindgen]
    pub fn duplicate(&mut self, id: &str) -> Result<String, JsValue> {
        js_result!(self.inner.duplicate(id))
    }

    /// Deletes a project.
    #[wasm_bindgen]
    pub fn delete(&mut self, id: &str) -> Result<(), JsValue> {
        js_result!(self.inner.delete(id))
    }

    /// Renames a project.
    #[wasm_bindgen]
    pub fn rename(&mut self, id: &str, title: &str) -> Result<(), JsValue> {
        js_result!(self.inner.rename(id, title))
    }

    /// Moves a project to a new lifecycle stage
    /// ("draft" | "in-progress" | "completed" | "review").
    #[wasm_bindgen(js_name = setStatus)]
    pub fn set_status(&mut self, id: &str, status: JsValue) -> Result<(), JsValue> {
        let status: ProjectStatus = from_value(status)?;
        js_result!(self.inner.set_status(id, status))
    }

    /// Case-insensitive title search.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.search(query))?)
    }
}

impl Default for JsProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}
