//! Jornada (robot work session) domain module.

mod model;

pub use model::{Jornada, JornadaDraft, JornadaPatch, JornadaStatus};
