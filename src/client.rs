/// The component the scheduler drives. It sees nothing but these two calls.
pub trait Client {
    /// `elapsed_ms` follows the scheduler's [`ElapsedPolicy`](crate::schedule::ElapsedPolicy).
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32);

    fn render(&mut self);
}

impl<C: Client + ?Sized> Client for &mut C {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) {
        (**self).update(elapsed_ms, height, width)
    }

    fn render(&mut self) {
        (**self).render()
    }
}

impl<C: Client + ?Sized> Client for Box<C> {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) {
        (**self).update(elapsed_ms, height, width)
    }

    fn render(&mut self) {
        (**self).render()
    }
}
