//! Style table: values, selectors, per-kind property bindings, and the
//! section/key/value loader.

pub mod parser;
pub mod properties;
pub mod selector;
pub mod table;
pub mod tokenizer;
pub mod value;

pub use parser::ParseError;
pub use properties::{PropertyBinding, StyleProperty};
pub use selector::{Selector, StyleState};
pub use table::{StyleError, StyleRule, StyleTable};
pub use value::Value;
