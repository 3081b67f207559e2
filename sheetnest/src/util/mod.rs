/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

pub(crate) mod cancel;
mod config;
mod fpa;

#[doc(inline)]
pub use cancel::CancelToken;
#[doc(inline)]
pub use config::{DegeneratePolicy, NestConfig, PackConfig, RotationConfig};
#[doc(inline)]
pub use fpa::FPA;
