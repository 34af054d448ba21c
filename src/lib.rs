#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
mod param_tree;
mod params_ext;
mod params_parser;
mod params_serializer;
mod percent_encode;
mod policy;
mod url;

// Public API
pub use error::ParseError;
pub use param_tree::{ParamTree, Value};
pub use params_ext::ParamsExt;
pub use params_parser::ParamsParser;
pub use params_serializer::{IndexStyle, ParamsSerializer};
pub use policy::CollisionPolicy;
pub use url::{QueryCarrier, Url};

pub type Result<T> = core::result::Result<T, ParseError>;
