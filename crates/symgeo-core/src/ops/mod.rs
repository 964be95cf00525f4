//! Concept traits and generic transforms.
//!
//! The three concepts form a strict hierarchy: every [`LieGroup`] is a
//! [`Group`], and every [`Group`] is [`Storage`]. Generic algorithms bound
//! by the weakest concept they need work uniformly over every concrete
//! geometric type.

mod batch;
mod group;
mod lie_group;
mod storage;

pub use batch::{evalf_slice, simplify_slice};
pub use group::Group;
pub use lie_group::LieGroup;
pub use storage::{evalf, map_storage, simplify, Storage};
