//! How long the scheduler waits between ticks, and where that number comes from.

/// Frame rate used when nothing else is configured.
pub const DEFAULT_FPS: f64 = 30.0;

/// Minimum interval between two ticks, in milliseconds.
///
/// Always finite and strictly positive; the constructors refuse anything else,
/// so a zero or negative frame rate can never reach the tick test.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cadence(f64);

impl Cadence {
    pub fn from_millis(ms: f64) -> Option<Self> {
        (ms.is_finite() && ms > 0.0).then_some(Self(ms))
    }

    /// `1000 / fps`. `None` for zero, negative, NaN or infinite rates.
    pub fn from_fps(fps: f64) -> Option<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return None;
        }
        Self::from_millis(1000.0 / fps)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    pub fn fps(self) -> f64 {
        1000.0 / self.0
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self(1000.0 / DEFAULT_FPS)
    }
}

/// Yields the cadence for the current cycle.
///
/// Returning `None` tells the scheduler to skip the cycle without touching
/// its timing state.
pub trait CadenceSource {
    fn cadence(&mut self) -> Option<Cadence>;
}

/// A fixed cadence, computed once.
impl CadenceSource for Cadence {
    fn cadence(&mut self) -> Option<Cadence> {
        Some(*self)
    }
}

impl<S: CadenceSource + ?Sized> CadenceSource for Box<S> {
    fn cadence(&mut self) -> Option<Cadence> {
        (**self).cadence()
    }
}

/// Frame rate re-read on every cycle, so it can be changed while running.
pub struct LiveFps<F> {
    read: F,
}

impl<F> LiveFps<F>
where
    F: FnMut() -> Option<f64>,
{
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F> CadenceSource for LiveFps<F>
where
    F: FnMut() -> Option<f64>,
{
    fn cadence(&mut self) -> Option<Cadence> {
        (self.read)().and_then(Cadence::from_fps)
    }
}

/// Parses the text of a frame-rate control. Validation is left to
/// [`Cadence::from_fps`].
pub fn parse_fps(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_converts_to_millis() {
        let c = Cadence::from_fps(50.0).unwrap();
        assert_eq!(c.as_millis(), 20.0);
        assert_eq!(c.fps(), 50.0);
        assert!((Cadence::default().as_millis() - 1000.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_unusable_rates() {
        for fps in [0.0, -0.0, -12.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Cadence::from_fps(fps), None, "fps={fps}");
        }
        // underflows to an infinite interval
        assert_eq!(Cadence::from_fps(f64::MIN_POSITIVE / 1e10), None);
        assert_eq!(Cadence::from_millis(0.0), None);
        assert_eq!(Cadence::from_millis(-5.0), None);
    }

    #[test]
    fn live_source_follows_reader() {
        let mut values = vec![Some(10.0), None, Some(0.0), Some(25.0)].into_iter();
        let mut live = LiveFps::new(move || values.next().flatten());
        assert_eq!(live.cadence().map(Cadence::as_millis), Some(100.0));
        assert_eq!(live.cadence(), None);
        assert_eq!(live.cadence(), None);
        assert_eq!(live.cadence().map(Cadence::as_millis), Some(40.0));
    }

    #[test]
    fn boxed_sources_delegate() {
        let mut boxed: Box<dyn CadenceSource> = Box::new(Cadence::from_millis(16.0).unwrap());
        assert_eq!(boxed.cadence().map(Cadence::as_millis), Some(16.0));
    }

    #[test]
    fn parses_control_text() {
        assert_eq!(parse_fps(" 60 "), Some(60.0));
        assert_eq!(parse_fps("12.5"), Some(12.5));
        assert_eq!(parse_fps(""), None);
        assert_eq!(parse_fps("fast"), None);
        assert_eq!(parse_fps("0").and_then(Cadence::from_fps), None);
    }
}
