use anyhow::{Result, anyhow};

pub fn validate_phone_number(number: &str) -> Result<()> {
    let trimmed = number.trim();

    if trimmed.is_empty() {
        return Err(anyhow!("Phone number cannot be empty"));
    }

    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();

    if digits < 7 {
        return Err(anyhow!("Phone number too short (minimum 7 digits)"));
    }

    if digits > 15 {
        return Err(anyhow!("Phone number too long (maximum 15 digits)"));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-' || c == '(' || c == ')');

    if !valid_chars {
        return Err(anyhow!("Phone number contains invalid characters"));
    }

    Ok(())
}
