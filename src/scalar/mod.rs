mod error;
pub use self::error::*;
mod literal;
pub use self::literal::*;
mod hashid_scalar;
pub use self::hashid_scalar::*;
