pub use boundary::Boundary;
pub use table::Table;

mod boundary;
pub mod hard;
pub mod scoring;
pub mod soft;
mod table;
