//! Drawing surface dimensions and window synchronisation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Converts CSS pixel dimensions (as reported by `innerWidth` and
    /// friends) to whole pixels. Negative and NaN values become 0.
    pub fn from_css(width: f64, height: f64) -> Self {
        Self::new(width as u32, height as u32)
    }
}

/// Something with a pixel backing store that can be resized, e.g. a canvas
/// plus its GL viewport.
pub trait Surface {
    fn size(&self) -> Size;

    /// Resize the backing store and any dependent viewport state.
    fn resize(&mut self, size: Size);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }
}

/// Resizes `surface` to `window` if they differ. Returns whether it did.
pub fn sync_to_window<S: Surface + ?Sized>(surface: &mut S, window: Size) -> bool {
    if surface.size() == window {
        return false;
    }
    surface.resize(window);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Backing {
        size: Size,
        resizes: usize,
    }

    impl Surface for Backing {
        fn size(&self) -> Size {
            self.size
        }

        fn resize(&mut self, size: Size) {
            self.size = size;
            self.resizes += 1;
        }
    }

    #[test]
    fn css_pixels_saturate() {
        assert_eq!(Size::from_css(1280.7, 720.2), Size::new(1280, 720));
        assert_eq!(Size::from_css(-3.0, f64::NAN), Size::new(0, 0));
    }

    #[test]
    fn sync_only_when_different() {
        let mut b = Backing { size: Size::new(300, 150), resizes: 0 };
        assert!(!sync_to_window(&mut b, Size::new(300, 150)));
        assert_eq!(b.resizes, 0);

        assert!(sync_to_window(&mut b, Size::new(300, 200)));
        assert_eq!(b.size, Size::new(300, 200));
        assert_eq!(b.resizes, 1);
    }
}
