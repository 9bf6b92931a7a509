/// Alias for `Result<T, PrankError>`.
pub type PrankResult<T> = Result<T, PrankError>;

/// Errors raised by the strict parsing paths.
///
/// Prank generation itself never fails; unknown roles only become errors
/// when a caller asks for strict parsing via [`std::str::FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrankError {
    /// The role label is not one of the known roles.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
