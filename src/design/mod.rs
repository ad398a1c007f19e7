pub mod measure;
pub use measure::*;
pub mod search;
pub use search::*;

#[cfg(feature = "plots")]
pub mod plot;
#[cfg(feature = "plots")]
pub use plot::*;
