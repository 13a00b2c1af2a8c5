//! Phone-number normalisation into the WhatsApp addressing convention.

use crate::transport::DeliveryError;

/// Shortest accepted local number.
const LOCAL_DIGITS: usize = 10;

/// Turn a stored phone number into a `whatsapp:+<digits>` address.
///
/// Formatting characters are discarded. Digits that already start with
/// `country_code` are used as-is, whatever their length. Otherwise a bare
/// 10-digit number is prefixed with `country_code`, and anything longer
/// is assumed to carry its own country code.
pub fn format_for_transport(raw: &str, country_code: &str) -> Result<String, DeliveryError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() < LOCAL_DIGITS {
        return Err(DeliveryError::InvalidPhoneFormat {
            digits: digits.len(),
        });
    }

    if !country_code.is_empty() && digits.starts_with(country_code) {
        return Ok(format!("whatsapp:+{digits}"));
    }

    match digits.len() {
        LOCAL_DIGITS => Ok(format!("whatsapp:+{country_code}{digits}")),
        _ => Ok(format!("whatsapp:+{digits}")),
    }
}

/// Mask all but the last four digits, for logging.
pub fn mask(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let keep = digits.len().min(4);
    let tail: String = digits[digits.len() - keep..].iter().collect();
    format!("***{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_local_number_gets_country_code() {
        assert_eq!(
            format_for_transport("9876543210", "91").unwrap(),
            "whatsapp:+919876543210"
        );
        assert_eq!(
            format_for_transport("98765 43210", "91").unwrap(),
            "whatsapp:+919876543210"
        );
    }

    #[test]
    fn test_country_prefix_checked_before_length() {
        assert_eq!(
            format_for_transport("9123456780", "91").unwrap(),
            "whatsapp:+9123456780"
        );
        assert_eq!(
            format_for_transport("8123456780", "91").unwrap(),
            "whatsapp:+918123456780"
        );
    }

    #[test]
    fn test_number_with_country_code_kept() {
        assert_eq!(
            format_for_transport("919876543210", "91").unwrap(),
            "whatsapp:+919876543210"
        );
        assert_eq!(
            format_for_transport("+44 7700 900123", "91").unwrap(),
            "whatsapp:+447700900123"
        );
    }

    #[test]
    fn test_short_number_rejected() {
        let err = format_for_transport("12345", "91").unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidPhoneFormat { digits: 5 }));
        assert!(format_for_transport("", "91").is_err());
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("+91 98765 43210"), "***3210");
        assert_eq!(mask("12"), "***12");
    }
}
