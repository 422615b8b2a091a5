pub use event::Event;
pub use function::Function;
pub use options::AbiOptions;
pub use params::{DecodedParams, Param};
pub use registry::Abi;
pub use signature::{method_id, normalize};

mod event;
mod function;
mod options;
mod params;
mod registry;
mod signature;
