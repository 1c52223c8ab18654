//! Base trait for view-state trees plus the generic substate cell.

/// Marker trait for view-state trees.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a subscriber needs to render its slice)
/// - Comparable (PartialEq for change detection)
///
/// `Default` is the `init` value a screen session starts from.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// One independently reducible slice of a view-state tree.
///
/// A slice cycles `Initial → Loading → (Success | Error) → Loading → …`
/// with no terminal variant; the owning session ends externally. Error
/// payloads are already display-ready text, formatted before they reach
/// the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SliceState<T> {
    /// Nothing has been fetched for this slice yet.
    #[default]
    Initial,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed with a display-ready payload.
    Success(T),
    /// The fetch failed.
    Error(String),
}

impl<T> SliceState<T> {
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Payload of a completed fetch, if this slice holds one.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Display message of a failed fetch, if this slice holds one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial() {
        let slice: SliceState<u32> = SliceState::default();
        assert!(slice.is_initial());
    }

    #[test]
    fn predicates_match_variants() {
        assert!(SliceState::<u32>::Loading.is_loading());
        assert!(SliceState::Success(7).is_success());
        assert!(SliceState::<u32>::Error("boom".to_string()).is_error());
        assert!(!SliceState::<u32>::Loading.is_success());
    }

    #[test]
    fn success_accessor_returns_payload() {
        assert_eq!(SliceState::Success(7).success(), Some(&7));
        assert_eq!(SliceState::<u32>::Loading.success(), None);
    }

    #[test]
    fn error_accessor_returns_message() {
        let slice: SliceState<u32> = SliceState::Error("boom".to_string());
        assert_eq!(slice.error_message(), Some("boom"));
        assert_eq!(SliceState::<u32>::Initial.error_message(), None);
    }
}
