pub mod angle;
pub mod lines;
pub mod pair;

pub use angle::*;
pub use lines::*;
pub use pair::*;
