/// One field of a partial update.
///
/// JSON can say three different things about a field, and a merge has to tell them apart:
///
/// | JSON | `Patch` |
/// |---|---|
/// | key missing | `Absent` (leave the stored value alone) |
/// | `"key": null` | `Null` (clear it) |
/// | `"key": value` | `Value(value)` (overwrite it) |
///
/// Built by [`BodyFields`](super::BodyFields) from a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Merges into a nullable field: `Null` clears it, `Absent` keeps it.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Absent => {}
            Self::Null => *target = None,
            Self::Value(value) => *target = Some(value),
        }
    }
}
