pub use config::{Config, DEFAULT_TEMPERATURE};
pub use engine::Engine;
pub use gradient::Gradient;
pub use order::FillOrder;
pub use smoothmax::{SmoothMax, Smoothed};
pub use trace::Trace;

mod config;
mod engine;
mod gradient;
mod order;
mod smoothmax;
mod trace;
