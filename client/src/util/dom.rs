//! Small imperative touches on the host page outside the mounted views.

#[cfg(feature = "csr")]
const PROFILE_SELECTOR: &str = ".profile-info";
#[cfg(feature = "csr")]
const BLURRED_CLASS: &str = "blurred";

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {}", crate::error::describe_js(&err));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("alert: {message}");
    }
}

/// Send the browser to `path` on the current origin.
pub fn navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::warn!("navigation to {path} failed: {}", crate::error::describe_js(&err));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Add or remove the blur on the server-rendered profile card.
pub fn set_profile_blurred(blurred: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(card) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(PROFILE_SELECTOR).ok().flatten())
        else {
            log::debug!("no profile card on this page");
            return;
        };
        if let Err(err) = card.class_list().toggle_with_force(BLURRED_CLASS, blurred) {
            log::warn!("could not update profile blur: {}", crate::error::describe_js(&err));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = blurred;
    }
}
