mod hashid;
pub use self::hashid::*;
