pub mod mass_spring_damper;

pub use mass_spring_damper::{DampingClass, MassSpringDamper};
