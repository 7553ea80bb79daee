use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL};

use crate::error::StartError;
use crate::surface::{Size, Surface};

/// A canvas with its WebGL2 context; resizing keeps the viewport in step.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    gl: GL,
}

impl CanvasSurface {
    /// Acquires an antialiased WebGL2 context and turns on source-over alpha
    /// blending.
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, StartError> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::from_bool(true))?;

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)
            .ok()
            .flatten()
            .ok_or(StartError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| StartError::ContextUnavailable)?;

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        Ok(Self { canvas, gl })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: Size) {
        // CSS size and backing store have to agree or the browser rescales.
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", size.width)).ok();
        style.set_property("height", &format!("{}px", size.height)).ok();
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);

        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
    }
}
