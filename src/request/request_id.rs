use std::fmt;
use uuid::Uuid;

/// Identifies one outbound call. Generated once when a [`RequestDescriptor`](crate::RequestDescriptor)
/// is built and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(Uuid);

impl RequestId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let ids = (0..1_000)
            .map(|_| RequestId::generate())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 1_000);
    }
}
