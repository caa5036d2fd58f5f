// Digit masks

use crate::only_digits;

/// Placeholder that consumes one input digit.
pub const MASK_SLOT: char = '#';

/// Format the digits of `input` through `pattern`.
///
/// Every `#` in the pattern takes the next digit of `input`; any other
/// character is copied as is. Once the digits run out the remaining slots
/// produce nothing, and digits beyond the last slot are dropped.
///
/// ```
/// use swiss_text::mask;
///
/// assert_eq!(mask("12345678910", "###.###.###-##"), "123.456.789-10");
/// assert_eq!(mask("11987654321", "(##) #####-####"), "(11) 98765-4321");
/// ```
pub fn mask(input: &str, pattern: &str) -> String {
    let digits = only_digits(input);
    let mut digits = digits.chars();
    let mut masked = String::with_capacity(pattern.len());

    for c in pattern.chars() {
        if c == MASK_SLOT {
            if let Some(d) = digits.next() {
                masked.push(d);
            }
        } else {
            masked.push(c);
        }
    }

    masked
}
