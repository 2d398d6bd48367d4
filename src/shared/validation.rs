use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating materia codes
    /// Uppercase letters followed by digits with an optional hyphenated section
    /// - Valid: "MAT101", "FIS-202", "INF3500"
    /// - Invalid: "mat101", "101MAT", "MAT 101"
    pub static ref MATERIA_CODE_REGEX: Regex =
        Regex::new(r"^[A-Z]{2,6}-?[0-9]{1,4}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materia_code_regex_valid() {
        assert!(MATERIA_CODE_REGEX.is_match("MAT101"));
        assert!(MATERIA_CODE_REGEX.is_match("FIS-202"));
        assert!(MATERIA_CODE_REGEX.is_match("INF3500"));
        assert!(MATERIA_CODE_REGEX.is_match("QUI1"));
    }

    #[test]
    fn test_materia_code_regex_invalid() {
        assert!(!MATERIA_CODE_REGEX.is_match("mat101")); // lowercase
        assert!(!MATERIA_CODE_REGEX.is_match("101MAT")); // digits first
        assert!(!MATERIA_CODE_REGEX.is_match("MAT 101")); // space
        assert!(!MATERIA_CODE_REGEX.is_match("M")); // too short
        assert!(!MATERIA_CODE_REGEX.is_match("")); // empty
    }
}
