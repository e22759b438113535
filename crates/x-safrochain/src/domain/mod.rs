pub mod errors;
pub mod genesis;
pub mod keys;
pub mod params;

pub use errors::*;
pub use genesis::*;
pub use keys::*;
pub use params::*;
