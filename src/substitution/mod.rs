pub mod marker;
pub mod substitutor;

pub use marker::{gap_length_inches, Marker};
pub use substitutor::{Substitution, TermSubstitutor};
