// ============================================================================
// Number Grammar
// Lexer for `sign? digit+ ([.,] digit+)?`
// ============================================================================

use crate::domain::{ParsedNumber, Sign};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Source of the number grammar.
///
/// Groups: 1 = sign token, 2 = integer digits, 3 = fractional digits.
/// Digits are spelled `[0-9]` so that Unicode decimal digits from other
/// scripts are not accepted, and the pattern is anchored with `\A`/`\z`
/// so a trailing newline does not match.
pub const NUMBER_PATTERN_SOURCE: &str = r"\A([+-]?)([0-9]+)(?:[.,]([0-9]+))?\z";

/// Compiled number grammar, shared by every validator.
///
/// Case-insensitive matching is enabled; no letter belongs to the grammar,
/// so it does not change which values match.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(NUMBER_PATTERN_SOURCE)
        .case_insensitive(true)
        .build()
        .expect("fail to create a regex for decimal numbers")
});

/// Force compilation of the grammar.
///
/// Called by validator constructors so the first check does not pay for it.
#[inline]
pub(crate) fn warm_up() {
    LazyLock::force(&NUMBER_PATTERN);
}

/// Split `value` into sign, integer and fractional digits.
///
/// Returns `None` when the value does not follow the grammar: empty input,
/// repeated signs or separators, a separator without digits after it,
/// whitespace, or any other character.
pub fn parse_number(value: &str) -> Option<ParsedNumber<'_>> {
    let captures = NUMBER_PATTERN.captures(value)?;
    let sign = captures
        .get(1)
        .map_or(Sign::None, |m| Sign::from_token(m.as_str()));
    let integer_digits = captures.get(2)?.as_str();
    let fractional_digits = captures.get(3).map_or("", |m| m.as_str());
    Some(ParsedNumber::new(sign, integer_digits, fractional_digits))
}
