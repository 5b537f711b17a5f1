pub mod path_index;

pub use path_index::PathIndex;
