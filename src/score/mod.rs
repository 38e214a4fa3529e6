pub mod adjust;
pub mod aggregate;
pub mod context;
pub mod grouping;
pub mod normalize;
pub mod rank;
pub mod reconcile;
pub mod status;

pub use adjust::*;
pub use aggregate::*;
pub use context::*;
pub use grouping::*;
pub use normalize::*;
pub use rank::*;
pub use reconcile::*;
pub use status::*;

use crate::model::Warning;

/// A pass result plus the warnings collected on the way.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}
