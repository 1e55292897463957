//! # Local Resources
//!
//! Path resolution and loading for non-linguistic symbol lists.

mod path_resolver;
mod symbol_list;

#[doc(inline)]
pub use path_resolver::*;
#[doc(inline)]
pub use symbol_list::*;
