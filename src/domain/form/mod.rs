//! Form domain - the captured values, their validation, and output naming.

mod entity;
pub mod file_name;
mod input;
mod option;

pub use entity::{FormDataEntity, GeneratedPdf};
pub use input::{only_digits, only_letters_and_numbers, FormSubmission};
pub use option::FormOption;
