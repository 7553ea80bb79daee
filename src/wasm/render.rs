use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::cadence::CadenceSource;
use crate::client::Client;
use crate::error::StartError;
use crate::scheduler::{Cycle, FrameScheduler, StopHandle};
use crate::surface::{Size, Surface};

use super::CanvasSurface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running frame loop.
#[wasm_bindgen]
pub struct LoopHandle {
    stop: StopHandle,
}

#[wasm_bindgen]
impl LoopHandle {
    /// Ends the loop. The callback already queued for the next frame still
    /// runs once, sees the flag and releases itself without ticking.
    pub fn stop(&self) {
        if !self.stop.is_stopped() {
            log::info!("frame loop stopping");
        }
        self.stop.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

/// Milliseconds from `performance.now()`, or `Date.now()` without it.
pub fn now(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn window_size(window: &Window) -> Option<Size> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Size::from_css(w, h))
}

fn request_frame(window: &Window, f: &FrameCallback) -> Result<i32, JsValue> {
    let callback = f.borrow();
    let callback = callback.as_ref().ok_or("frame callback released")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Enters the animation-frame chain. Every frame requests its successor
/// before running one scheduler cycle.
pub fn start<S, C>(
    window: &Window,
    mut scheduler: FrameScheduler<S>,
    mut surface: CanvasSurface,
    mut client: C,
) -> Result<LoopHandle, StartError>
where
    S: CadenceSource + 'static,
    C: Client + 'static,
{
    let stop = scheduler.stop_handle();

    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself, and to drop it once the loop is stopped.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if scheduler.is_stopped() {
            let _ = f.borrow_mut().take();
            return;
        }

        // schedule next
        if let Err(err) = request_frame(&frame_window, &f) {
            log::error!("requestAnimationFrame failed, frame loop ends: {err:?}");
            scheduler.stop_handle().stop();
            let _ = f.borrow_mut().take();
            return;
        }

        let now = now(&frame_window);
        let viewport = window_size(&frame_window).unwrap_or_else(|| surface.size());
        if let Cycle::Ticked(tick) = scheduler.cycle(now, viewport, &mut surface, &mut client) {
            if tick.resized {
                log::debug!("surface resized to {}x{}", tick.size.width, tick.size.height);
            }
        }
    }) as Box<dyn FnMut()>));

    request_frame(window, &g)?;
    Ok(LoopHandle { stop })
}
