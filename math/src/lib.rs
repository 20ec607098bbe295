pub mod combinations;
pub mod error;
pub mod macros;
pub mod poly;
pub mod prelude;

pub use combinations::Combinations;
pub use poly::Polynomial;
