//! Deadline token for discovery.
//!
//! Discovery walks an arbitrary directory tree synchronously. A token is
//! threaded through the walk so a pathological tree cannot block the process
//! forever: once the deadline passes, the next check fails.

use std::time::{Duration, Instant};

/// A token that expires after an optional overall timeout.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use uvs_core::cancel::CancellationToken;
///
/// let token = CancellationToken::with_timeout(Duration::from_secs(30));
/// assert!(token.check().is_ok());
///
/// let expired = CancellationToken::with_timeout(Duration::ZERO);
/// assert!(expired.is_cancelled());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CancellationToken {
    deadline: Option<(Instant, Duration)>,
}

impl CancellationToken {
    /// Create a token that never expires.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that expires once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some((Instant::now() + timeout, timeout)),
        }
    }

    /// Check if the deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.deadline
            .map(|(deadline, _)| Instant::now() >= deadline)
            .unwrap_or(false)
    }

    /// The timeout this token was created with, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.deadline.map(|(_, timeout)| timeout)
    }

    /// Return an error once the deadline has passed.
    pub fn check(&self) -> Result<(), CancelledError> {
        match self.deadline {
            Some((deadline, timeout)) if Instant::now() >= deadline => {
                Err(CancelledError { timeout })
            }
            _ => Ok(()),
        }
    }
}

/// Error returned when the deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelledError {
    timeout: Duration,
}

impl std::fmt::Display for CancelledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operation timed out after {:?}", self.timeout)
    }
}

impl std::error::Error for CancelledError {}

impl From<CancelledError> for crate::error::SelectorError {
    fn from(err: CancelledError) -> Self {
        crate::error::SelectorError::ScanTimedOut(err.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectorError;

    #[test]
    fn test_new_token_never_expires() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
        assert!(token.timeout().is_none());
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let token = CancellationToken::with_timeout(Duration::ZERO);
        assert!(token.is_cancelled());
        assert_eq!(
            token.check(),
            Err(CancelledError {
                timeout: Duration::ZERO
            })
        );
    }

    #[test]
    fn test_generous_timeout_not_expired() {
        let token = CancellationToken::with_timeout(Duration::from_secs(3600));
        assert!(token.check().is_ok());
        assert_eq!(token.timeout(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_expiry_maps_to_scan_timeout() {
        let err = CancelledError {
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "Operation timed out after 5s");
        assert!(matches!(
            SelectorError::from(err),
            SelectorError::ScanTimedOut(timeout) if timeout == Duration::from_secs(5)
        ));
    }
}
