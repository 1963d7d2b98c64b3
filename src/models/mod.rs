pub mod token;
pub mod transcript;

pub use token::*;
pub use transcript::*;
