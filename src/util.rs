/// Numeric conversion helpers.
///
/// Safe conversions between the language's 64-bit integers and the host's
/// index and character types. Every conversion that can fail returns an
/// `Option` instead of truncating or wrapping.
pub mod num;
