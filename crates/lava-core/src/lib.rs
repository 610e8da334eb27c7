//! Platform-free core of the lava lamp effect: deterministic blob parameters,
//! the per-frame simulation, the shader contract and the render-loop driver.

pub mod blobs;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod hash;
pub mod shader;
pub mod sim;

pub use blobs::{generate, BlobParams};
pub use config::{EffectConfig, Rgb};
pub use constants::*;
pub use driver::{Backend, DriverState, FrameHandle, FrameScheduler, LavaDriver, RenderSurface};
pub use error::LavaError;
pub use hash::{hash31, hash33};
pub use shader::LavaUniforms;
pub use sim::{PointerSignal, Simulation};

// Shader bundled as a string constant
pub static LAVA_WGSL: &str = include_str!("../shaders/lava.wgsl");
