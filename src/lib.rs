mod config;
pub use self::config::*;
mod codec;
pub use self::codec::*;
mod scalar;
pub use self::scalar::*;

#[cfg(feature = "juniper")]
pub mod juniper;
