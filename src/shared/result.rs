/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation in the crate returns this so errors can carry context chains.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
