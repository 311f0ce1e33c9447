//! Skiff Navigation
//!
//! Address bar input resolution:
//! 1. Blank input → empty address
//! 2. Web address → navigate (with `http://` added when no scheme is given)
//! 3. `file://` reference → navigate unchanged
//! 4. Anything else → search

mod input;

pub use input::{resolve_address, AddressResolver, InputResolution, QueryEncoding};

/// Search endpoint used when no other engine is configured (`%s` is the query)
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";
