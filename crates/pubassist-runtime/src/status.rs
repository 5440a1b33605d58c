use serde::{Deserialize, Serialize};

/// In-flight and failure flags of one request kind.
///
/// Failures are not classified: network errors, 4xx and 5xx all set
/// the same flag, which is cleared when the next attempt starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
    pub pending: bool,
    pub error: bool,
}

impl RequestStatus {
    pub fn begin(&mut self) {
        self.pending = true;
        self.error = false;
    }

    pub fn succeed(&mut self) {
        self.pending = false;
    }

    pub fn fail(&mut self) {
        self.pending = false;
        self.error = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lifecycle() {
        let mut status = RequestStatus::default();
        status.begin();
        assert!(status.pending && !status.error);

        status.fail();
        assert!(!status.pending && status.error);

        status.begin();
        assert!(status.pending && !status.error);

        status.succeed();
        assert_eq!(status, RequestStatus::default());
    }
}
