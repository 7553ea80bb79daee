use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::cadence::{parse_fps, Cadence, CadenceSource};

/// Frame rate taken live from an `<input>` on the page.
///
/// The element is looked up on every cycle, so it may be added, replaced or
/// removed while the loop runs; a missing element or an unusable value skips
/// the cycle.
pub struct FpsInput {
    document: Document,
    id: String,
}

impl FpsInput {
    pub fn new(document: Document, id: impl Into<String>) -> Self {
        Self {
            document,
            id: id.into(),
        }
    }

    pub fn fps(&self) -> Option<f64> {
        let input = self
            .document
            .get_element_by_id(&self.id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        parse_fps(&input.value())
    }
}

impl CadenceSource for FpsInput {
    fn cadence(&mut self) -> Option<Cadence> {
        self.fps().and_then(Cadence::from_fps)
    }
}
