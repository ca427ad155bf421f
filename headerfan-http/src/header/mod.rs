mod map;
pub use map::*;
mod normalize;
pub use normalize::*;
mod variant;
pub use variant::*;
#[cfg(feature = "serde")]
mod serde_impl;

/// Lowercase name of the header most often repeated within one response.
pub const SET_COOKIE: &str = "set-cookie";
