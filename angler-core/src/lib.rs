pub mod identifier;
pub mod math;
pub mod random;
pub mod text;

pub use identifier::Identifier;
