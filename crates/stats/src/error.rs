//! Error types for the rainstat-stats crate.

/// Error type for all fallible operations in the rainstat-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when an accumulated sum or count leaves the 64-bit range.
    #[error("integer overflow while accumulating {context}")]
    Overflow {
        /// What was being accumulated (usually a group key).
        context: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_overflow() {
        let e = StatsError::Overflow {
            context: "1990".to_string(),
        };
        assert_eq!(e.to_string(), "integer overflow while accumulating 1990");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StatsError>();
    }
}
