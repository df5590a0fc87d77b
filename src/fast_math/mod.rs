pub mod inv_sqrt;

pub use inv_sqrt::{fast_inv_sqrt32, fast_inv_sqrt64, FastInvSqrtError};
