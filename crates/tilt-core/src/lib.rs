pub mod config;
pub mod constants;
pub mod controller;
pub mod mapping;
pub mod permission;
pub mod sample;
pub mod smoother;
pub mod surface;
pub mod transform;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use mapping::*;
pub use permission::*;
pub use sample::*;
pub use smoother::*;
pub use surface::*;
pub use transform::*;
