/// Time and step size of the step currently being taken.
#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub dt: f64,
    pub t: f64,
}

/// A system of `N` coupled first-order ODEs, `dx/dt = f(t, x)`.
pub trait OdeSystem<const N: usize> {
    fn derivatives(&self, t: f64, state: &[f64; N]) -> [f64; N];
}
