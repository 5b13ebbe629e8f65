use crate::{OdeSystem, SimContext};

/// A fixed-step integration strategy.
pub trait Integrator {
    /// Advances `state` from `ctx.t` to `ctx.t + ctx.dt`.
    fn step<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        ctx: SimContext,
        state: &[f64; N],
    ) -> [f64; N];
}

/// Forward (explicit) Euler.
/// First-order accurate; derivatives are evaluated once, at the start of the step.
/// Unstable once `dt` exceeds roughly twice the fastest time constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        ctx: SimContext,
        state: &[f64; N],
    ) -> [f64; N] {
        let d = system.derivatives(ctx.t, state);
        std::array::from_fn(|i| state[i] + ctx.dt * d[i])
    }
}

/// Classic fourth-order Runge-Kutta.
/// Evaluates the system at `t`, twice at `t + dt/2` and at `t + dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn step<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        ctx: SimContext,
        state: &[f64; N],
    ) -> [f64; N] {
        let SimContext { dt, t } = ctx;
        let offset = |k: &[f64; N], h: f64| -> [f64; N] { std::array::from_fn(|i| state[i] + h * k[i]) };

        let k1 = system.derivatives(t, state);
        let k2 = system.derivatives(t + 0.5 * dt, &offset(&k1, 0.5 * dt));
        let k3 = system.derivatives(t + 0.5 * dt, &offset(&k2, 0.5 * dt));
        let k4 = system.derivatives(t + dt, &offset(&k3, dt));

        std::array::from_fn(|i| state[i] + dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
    }
}
