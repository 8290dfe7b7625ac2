//! Form field definitions.

mod text;

pub use text::{digits_field, letters_field};
