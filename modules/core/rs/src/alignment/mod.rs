pub use alignable::{Alignable, Reversed};

mod alignable;
