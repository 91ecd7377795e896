//! Model sources: where the materializer gets its snapshot from.

use super::Model;
use crate::error::ModelError;

/// A synchronous accessor for a model snapshot.
///
/// `viewpoint_hint` is the id of the viewpoint about to be applied. A source
/// may use it for coarse pre-filtering; the materializer re-applies the full
/// viewpoint afterwards, so returning a superset is always correct.
pub trait ModelSource {
    fn load(&self, viewpoint_hint: Option<&str>) -> Result<Model, ModelError>;
}

impl ModelSource for Model {
    fn load(&self, _viewpoint_hint: Option<&str>) -> Result<Model, ModelError> {
        Ok(self.clone())
    }
}

/// A model source backed by a JSON document in the store's export shape.
#[derive(Clone, Debug)]
pub struct JsonModelSource {
    text: String,
}

impl JsonModelSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ModelSource for JsonModelSource {
    fn load(&self, _viewpoint_hint: Option<&str>) -> Result<Model, ModelError> {
        let model = Model::from_json(&self.text)?;
        model.validate()?;
        Ok(model)
    }
}
