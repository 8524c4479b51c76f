#[macro_use]
pub mod logging;
pub mod random;

pub use random::XorShift32;
