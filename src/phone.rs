/// Turns the digits of a phone number into a canonical string.
pub trait PhoneFormat {
    /// `digits` is non-empty and ASCII digits only. Returns `None` if the
    /// number can't be formatted.
    fn format(&self, digits: &str) -> Option<String>;
}

// E.164 numbers are at most 15 digits, country code included
const MAX_E164_DIGITS: usize = 15;

/// International numeric format, "+" followed by country code and number.
/// Numbers of exactly the national length get the default country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct E164 {
    pub country_code: &'static str,
    pub national_len: usize,
}

impl Default for E164 {
    fn default() -> Self {
        E164 {
            country_code: "1",
            national_len: 10,
        }
    }
}

impl PhoneFormat for E164 {
    fn format(&self, digits: &str) -> Option<String> {
        if digits.len() == self.national_len {
            Some(format!("+{}{}", self.country_code, digits))
        } else if digits.len() <= MAX_E164_DIGITS {
            Some(format!("+{}", digits))
        } else {
            None
        }
    }
}

/// Format a phone number as E.164, defaulting to the North American country
/// code. `None` if there's no number at all.
pub fn phone(s: Option<&str>) -> Option<String> {
    phone_with(s, &E164::default())
}

/// Like [`phone`], with a caller-supplied format.
pub fn phone_with<F: PhoneFormat + ?Sized>(s: Option<&str>, formatter: &F) -> Option<String> {
    let digits: String = s?.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        formatter.format(&digits)
    }
}
