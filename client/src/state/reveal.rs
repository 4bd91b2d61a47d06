//! Two-party profile reveal handshake.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Reveal progress for one chat. `Revealed` is terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Idle,
    Pending {
        /// The local user already sent `request_reveal`.
        requested_by_me: bool,
        /// Display name of a peer who asked to reveal.
        peer_name: Option<String>,
    },
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn from_page(revealed: bool, requested: bool) -> Self {
        if revealed {
            Self::Revealed
        } else if requested {
            Self::Pending { requested_by_me: true, peer_name: None }
        } else {
            Self::Idle
        }
    }

    /// Record a local reveal click. Returns `true` exactly once per chat,
    /// when the `request_reveal` event should be emitted.
    pub fn request(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Pending { requested_by_me: true, peer_name: None };
                true
            }
            Self::Pending { requested_by_me, .. } if !*requested_by_me => {
                *requested_by_me = true;
                true
            }
            _ => false,
        }
    }

    /// Record a `reveal_requested` notice from the peer.
    pub fn peer_requested(&mut self, name: &str) {
        match self {
            Self::Idle => {
                *self = Self::Pending { requested_by_me: false, peer_name: Some(name.to_owned()) };
            }
            Self::Pending { peer_name, .. } => *peer_name = Some(name.to_owned()),
            Self::Revealed => {}
        }
    }

    /// Apply `reveal_profiles`. Returns `true` on the first transition only.
    pub fn reveal(&mut self) -> bool {
        if *self == Self::Revealed {
            return false;
        }
        *self = Self::Revealed;
        true
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        *self == Self::Revealed
    }

    #[must_use]
    pub fn button_visible(&self) -> bool {
        !self.is_revealed()
    }

    #[must_use]
    pub fn button_disabled(&self) -> bool {
        matches!(self, Self::Pending { requested_by_me: true, .. } | Self::Revealed)
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.button_disabled() { "Request Sent" } else { "Reveal Profile" }
    }

    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Pending { peer_name: None, .. } => None,
            Self::Pending { peer_name: Some(name), .. } => Some(format!("{name} is ready to reveal!")),
            Self::Revealed => Some("Profiles Revealed!".to_owned()),
        }
    }
}
