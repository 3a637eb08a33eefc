pub mod macros;
pub mod sequence;
pub mod structure;
pub mod time;

pub use sequence::*;
pub use structure::*;
pub use time::*;
