//! Emergency contacts and phone dialing
//!
//! Ships a fixed contact list and hands numbers to the platform's URL
//! opener as `tel:` links. The host decides what actually handles the
//! call; we only report whether the handoff worked.

use crate::error::{HealthMateError, Result};
use url::Url;

/// Message shown when the platform cannot place a call
pub const DIAL_FAILURE: &str = "Unable to make a phone call";

/// A named emergency phone contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Display name
    pub name: &'static str,
    /// Phone number as dialed
    pub phone: &'static str,
}

/// Built-in emergency contacts, in presentation order
pub const CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Emergency Services (Police / Fire / Ambulance)",
        phone: "911",
    },
    EmergencyContact {
        name: "Poison Control",
        phone: "1-800-222-1222",
    },
    EmergencyContact {
        name: "Suicide & Crisis Lifeline",
        phone: "988",
    },
    EmergencyContact {
        name: "Non-Emergency Medical Advice",
        phone: "811",
    },
];

/// Build a `tel:` URL for a phone number
///
/// Whitespace is stripped; an empty number is rejected.
///
/// # Examples
///
/// ```
/// use healthmate::emergency::tel_url;
///
/// let url = tel_url("1-800-222-1222").unwrap();
/// assert_eq!(url.as_str(), "tel:1-800-222-1222");
/// ```
///
/// # Errors
///
/// Returns error if the number is empty or does not form a valid URL
pub fn tel_url(phone: &str) -> Result<Url> {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(HealthMateError::Dial("Phone number is empty".to_string()).into());
    }

    Url::parse(&format!("tel:{}", digits))
        .map_err(|e| HealthMateError::Dial(format!("Invalid phone number {}: {}", phone, e)).into())
}

/// Hand a phone number to the platform URL opener
///
/// # Errors
///
/// Returns [`DIAL_FAILURE`] if the opener cannot be spawned or exits
/// unsuccessfully
pub fn dial(phone: &str) -> Result<()> {
    let url = tel_url(phone)?;
    tracing::info!("Dialing {}", url);

    let status = open_url(url.as_str());
    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            tracing::warn!("URL opener exited with {}", status);
            Err(HealthMateError::Dial(DIAL_FAILURE.to_string()).into())
        }
        Err(e) => {
            tracing::warn!("Failed to spawn URL opener: {}", e);
            Err(HealthMateError::Dial(DIAL_FAILURE.to_string()).into())
        }
    }
}

#[cfg(target_os = "macos")]
fn open_url(url: &str) -> std::io::Result<std::process::ExitStatus> {
    std::process::Command::new("open").arg(url).status()
}

#[cfg(target_os = "windows")]
fn open_url(url: &str) -> std::io::Result<std::process::ExitStatus> {
    std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .status()
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_url(url: &str) -> std::io::Result<std::process::ExitStatus> {
    std::process::Command::new("xdg-open").arg(url).status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_url_simple_number() {
        let url = tel_url("911").unwrap();
        assert_eq!(url.as_str(), "tel:911");
        assert_eq!(url.scheme(), "tel");
    }

    #[test]
    fn test_tel_url_strips_whitespace() {
        let url = tel_url(" 1 800 222 1222 ").unwrap();
        assert_eq!(url.as_str(), "tel:18002221222");
    }

    #[test]
    fn test_tel_url_keeps_separators() {
        let url = tel_url("1-800-222-1222").unwrap();
        assert_eq!(url.as_str(), "tel:1-800-222-1222");
    }

    #[test]
    fn test_tel_url_rejects_empty() {
        assert!(tel_url("").is_err());
        assert!(tel_url("   ").is_err());
    }

    #[test]
    fn test_contacts_have_dialable_numbers() {
        for contact in CONTACTS {
            assert!(tel_url(contact.phone).is_ok(), "bad number for {}", contact.name);
        }
    }
}
