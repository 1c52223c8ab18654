//! Fetch-failure to display-message mapping.

use crate::domain::FetchError;

/// Turns classified fetch failures into user-facing text.
///
/// Injected into reducers so display wording stays out of reduction
/// logic and can be swapped wholesale (tests, localization).
pub trait ErrorMessageMapper: Send + Sync {
    fn message(&self, error: &FetchError) -> String;
}

/// Default messages: one fixed string per taxonomy case.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayErrorMessages;

impl ErrorMessageMapper for DisplayErrorMessages {
    fn message(&self, error: &FetchError) -> String {
        match error {
            FetchError::Network { .. } => {
                "Connection failed. Check your network and try again".to_string()
            }
            FetchError::NotFound { resource } => {
                format!("Nothing found for '{}'", resource)
            }
            FetchError::Unknown => "Something went wrong. Please try again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_message_is_fixed() {
        let mapper = DisplayErrorMessages;
        let a = mapper.message(&FetchError::Network {
            reason: "timeout".to_string(),
        });
        let b = mapper.message(&FetchError::Network {
            reason: "dns".to_string(),
        });
        // Display copy does not leak transport detail.
        assert_eq!(a, b);
        assert_eq!(a, "Connection failed. Check your network and try again");
    }

    #[test]
    fn not_found_message_names_the_resource() {
        let mapper = DisplayErrorMessages;
        let message = mapper.message(&FetchError::NotFound {
            resource: "Jabba".to_string(),
        });
        assert_eq!(message, "Nothing found for 'Jabba'");
    }

    #[test]
    fn unknown_message_is_generic() {
        let mapper = DisplayErrorMessages;
        assert_eq!(
            mapper.message(&FetchError::Unknown),
            "Something went wrong. Please try again"
        );
    }
}
