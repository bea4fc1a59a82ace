/// Failure of a lookup that requires the key to be present.
///
/// Returned by [`BiMap::at_left`](crate::BiMap::at_left) and
/// [`BiMap::at_right`](crate::BiMap::at_right). Misses on the other lookups are reported
/// through `Option`, `bool` or an end position instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum BiMapError {
    /// No pair has a left value equivalent to the requested one.
    #[error("no such left key in bimap")]
    LeftKeyNotFound,
    /// No pair has a right value equivalent to the requested one.
    #[error("no such right key in bimap")]
    RightKeyNotFound,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_side() {
        assert_eq!(BiMapError::LeftKeyNotFound.to_string(), "no such left key in bimap");
        assert_eq!(BiMapError::RightKeyNotFound.to_string(), "no such right key in bimap");
    }

    #[test]
    fn is_a_core_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&BiMapError::LeftKeyNotFound);
    }
}
