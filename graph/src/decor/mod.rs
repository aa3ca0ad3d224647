pub mod refs;

pub use refs::{Ref, RefIndex};
