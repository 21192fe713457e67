pub mod combinatorics;
pub mod fdr;
pub mod hypergeom;

pub use combinatorics::LogFactorials;
pub use hypergeom::{HypergeomError, TailParams, upper_tail};
