use std::fmt;

/// Opaque identifier of a submitted task.
///
/// Handles are issued in submission order starting at `0` and are never
/// reused. A rejected submission yields [`TaskHandle::INVALID`], which every
/// query on the pool reports as out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(usize);

impl TaskHandle {
    /// Sentinel returned when a submission is rejected.
    pub const INVALID: TaskHandle = TaskHandle(usize::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        TaskHandle(index)
    }

    /// Position of the task in submission order, or `None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        self.is_valid().then_some(self.0)
    }

    /// Returns `false` only for [`TaskHandle::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Signed form of the handle, `-1` for the sentinel.
    pub fn as_i64(self) -> i64 {
        match self.index() {
            Some(index) => index as i64,
            None => -1,
        }
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_minus_one() {
        assert!(!TaskHandle::INVALID.is_valid());
        assert_eq!(TaskHandle::INVALID.index(), None);
        assert_eq!(TaskHandle::INVALID.as_i64(), -1);
    }

    #[test]
    fn test_handles_order_by_submission() {
        let first = TaskHandle::from_index(0);
        let second = TaskHandle::from_index(1);

        assert!(first < second);
        assert_eq!(second.index(), Some(1));
        assert_eq!(second.to_string(), "1");
    }
}
