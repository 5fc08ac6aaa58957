/// Consent status label for a granted consent.
pub const OPT_IN: &str = "Opt_in";

/// Consent status label for a withheld or unknown consent.
pub const OPT_OUT: &str = "Opt_out";

/// The exact sentinel the feed uses for a granted consent.
const CONSENT_GIVEN: &str = "True";

/// Maps the raw consent flag to its binary status label.
///
/// Only the exact sentinel `"True"` counts as granted; any other value,
/// including `"true"`, `"False"` and the empty string used for an absent
/// flag, maps to [`OPT_OUT`]. There is deliberately no third state.
pub fn consent_label(raw: &str) -> &'static str {
    if raw == CONSENT_GIVEN { OPT_IN } else { OPT_OUT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sentinel_is_opt_in() {
        assert_eq!(consent_label("True"), "Opt_in");
    }

    #[test]
    fn everything_else_is_opt_out() {
        assert_eq!(consent_label("False"), "Opt_out");
        assert_eq!(consent_label("true"), "Opt_out");
        assert_eq!(consent_label("TRUE"), "Opt_out");
        assert_eq!(consent_label(""), "Opt_out");
        assert_eq!(consent_label("yes"), "Opt_out");
    }
}
