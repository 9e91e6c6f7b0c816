//! Links

use serde::{Deserialize, Serialize};

/// Paging links attached to every list response.
///
/// The client never follows them; they are passed through as returned.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    /// URI of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URI of resource.
    #[serde(rename = "self")]
    pub self_: String,
    /// URI of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

impl Links {
    /// Returns instance of Links
    pub fn new(self_: String) -> Self {
        Self {
            self_,
            ..Default::default()
        }
    }

    /// Whether the server reported no further page.
    pub fn is_last_page(&self) -> bool {
        self.next.is_none()
    }
}
