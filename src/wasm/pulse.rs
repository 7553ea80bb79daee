use web_sys::WebGl2RenderingContext as GL;

use crate::client::Client;
use crate::schedule::ElapsedPolicy;

/// Demo client: clear colour pulsing with time.
pub struct Pulse {
    gl: GL,
    policy: ElapsedPolicy,
    /// Session time in milliseconds.
    clock: f64,
    aspect: f32,
}

impl Pulse {
    pub fn new(gl: GL, policy: ElapsedPolicy) -> Self {
        gl.enable(GL::DEPTH_TEST);
        Self {
            gl,
            policy,
            clock: 0.0,
            aspect: 1.0,
        }
    }
}

impl Client for Pulse {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) {
        self.clock = self.policy.advance(self.clock, elapsed_ms);
        self.aspect = width as f32 / height.max(1) as f32;
    }

    fn render(&mut self) {
        let t = (self.clock / 1000.0) as f32;
        let r = t.sin() * 0.5 + 0.5;
        // wide windows lean blue, tall ones green
        let b = (self.aspect / (1.0 + self.aspect)).clamp(0.0, 1.0);
        self.gl.clear_color(r, 1.0 - b, b, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }
}
