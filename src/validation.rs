use crate::errors::AppError;
use regex::Regex;

/// An address is valid only when it is already in bare `local@domain` form.
/// Anything a mail parser would have to normalise (display names, angle
/// brackets, surrounding whitespace) is rejected.
pub fn is_valid_email(email: &str) -> Result<bool, AppError> {
    // Local part: dot-atom or quoted string
    // Domain: dot-separated labels or an address literal
    // Non-ASCII letters are accepted in both halves
    let re = Regex::new(
        r#"^(?:[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*|"(?:[^"\\\r\n]|\\.)*")@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)*|\[[^\[\]\\\s]+\])$"#,
    )?;
    Ok(re.is_match(email))
}

/// Every character must be a decimal digit. The empty string passes.
pub fn is_valid_phone_number(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^\p{Nd}*$")?;
    Ok(re.is_match(phone))
}
