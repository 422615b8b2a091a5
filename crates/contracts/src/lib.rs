//! Function registry and call encoding on top of the `wordabi` codec.
//!
//! An encoded call is the parameter region followed by one word holding the
//! method id of the called function.

extern crate log;
extern crate serde;
extern crate tiny_keccak;
#[macro_use]
extern crate thiserror;
extern crate wordabi;

pub use abi::{Abi, AbiOptions, DecodedParams, Event, Function, Param};
pub use error::Error;
pub use wordabi::{FixedWord256, Type, Value};

pub mod abi;
mod error;
