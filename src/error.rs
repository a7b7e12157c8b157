/// The single abnormal condition: the host requested cancellation while a
/// classification was in flight. The call produces no verdict and caches
/// nothing; the host may simply reissue it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}
