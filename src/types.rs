/// Shared domain types for the card registry.
///
/// `NfcCard` crosses the HTTP/JSON boundary in both directions: it is the
/// POST body for authorization and the element shape of the card listing.
/// Instances are built once — from parsed parameters or from a decoded
/// response — and never mutated afterwards; a change is a new value.
use serde::{Deserialize, Serialize};

/// A card known to the remote registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfcCard {
    /// Registry-assigned numeric id (0 until the registry assigns one).
    pub id: i64,
    /// Card UUID as read from the tag.
    pub uuid: String,
    /// Human-readable owner name.
    pub name: String,
}
