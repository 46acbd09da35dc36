/// Validation-only command.
pub mod check;
/// Decode-and-print command.
pub mod decode;
/// JSON rendering of decoded values.
pub mod json;
