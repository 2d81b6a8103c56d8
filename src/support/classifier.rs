// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use std::sync::LazyLock;

// Spelled out rather than using (?i) so Unicode case folding (e.g. the Kelvin sign) can't match.
static TICKET_NUMBER_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[Tt][Kk][Tt][A-Za-z0-9]{8}$").expect("ticket number pattern is valid"));

/// Checks whether the user's input is a ticket number (`TKT` followed by eight letters or digits, in any case)
/// rather than a free-text question. Surrounding whitespace is ignored.
pub fn is_ticket_number(text: &str) -> bool {
	TICKET_NUMBER_PATTERN.is_match(text.trim())
}

#[cfg(test)]
mod tests {
	use super::is_ticket_number;

	#[test]
	fn accepts_ticket_numbers_in_any_case() {
		assert!(is_ticket_number("TKT1A2B3C4D"));
		assert!(is_ticket_number("tkt12345678"));
		assert!(is_ticket_number("TkTabcdEFGH"));
	}

	#[test]
	fn ignores_surrounding_whitespace() {
		assert!(is_ticket_number("  TKT00000001\n"));
	}

	#[test]
	fn rejects_wrong_lengths() {
		assert!(!is_ticket_number("TKTAB12cd34"));
		assert!(!is_ticket_number("TKT1234567"));
		assert!(!is_ticket_number("TKT"));
		assert!(!is_ticket_number(""));
	}

	#[test]
	fn requires_whole_input_to_match() {
		assert!(!is_ticket_number("my ticket is TKT12345678"));
		assert!(!is_ticket_number("TKT12345678 please"));
		assert!(!is_ticket_number("TKT1234 5678"));
		assert!(!is_ticket_number("XTKT12345678"));
	}

	#[test]
	fn rejects_non_alphanumeric_characters() {
		assert!(!is_ticket_number("TKT1234-678"));
		assert!(!is_ticket_number("TKT1234567é"));
		assert!(!is_ticket_number("T\u{212A}T12345678"));
	}
}
