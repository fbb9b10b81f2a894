use crate::utils::error::{MailError, PasswordError, Result as MailResult};
use crate::utils::validation::{validate_range, Validate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARACTERS: &str = "~=+%^*/()[]{}/!@#$?|";

pub const DEFAULT_LENGTH: usize = 15;
pub const MAX_LENGTH: usize = 1024;

/// Length and per-class minimums for a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub length: usize,
    pub min_digits: usize,
    pub min_special: usize,
    pub min_uppercase: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            min_digits: 1,
            min_special: 1,
            min_uppercase: 1,
        }
    }
}

impl PasswordPolicy {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Sum of the per-class minimums, saturating at `usize::MAX`.
    pub fn required(&self) -> usize {
        self.min_digits
            .saturating_add(self.min_special)
            .saturating_add(self.min_uppercase)
    }

    pub fn check(&self) -> Result<(), PasswordError> {
        if self.length == 0 {
            return Err(PasswordError::EmptyLength);
        }
        if self.length > MAX_LENGTH {
            return Err(PasswordError::TooLong {
                length: self.length,
                max: MAX_LENGTH,
            });
        }
        let required = self.required();
        if required > self.length {
            return Err(PasswordError::Unsatisfiable {
                length: self.length,
                required,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<String, PasswordError> {
        self.generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<String, PasswordError> {
        self.check()?;

        let digits: Vec<char> = DIGITS.chars().collect();
        let specials: Vec<char> = SPECIAL_CHARACTERS.chars().collect();
        let uppercase: Vec<char> = UPPERCASE.chars().collect();
        let all: Vec<char> = LOWERCASE
            .chars()
            .chain(UPPERCASE.chars())
            .chain(DIGITS.chars())
            .chain(SPECIAL_CHARACTERS.chars())
            .collect();

        let mut password = Vec::with_capacity(self.length);
        push_random(&mut password, &digits, self.min_digits, rng);
        push_random(&mut password, &specials, self.min_special, rng);
        push_random(&mut password, &uppercase, self.min_uppercase, rng);
        let remaining = self.length - password.len();
        push_random(&mut password, &all, remaining, rng);

        password.shuffle(rng);
        Ok(password.into_iter().collect())
    }
}

impl Validate for PasswordPolicy {
    fn validate(&self) -> MailResult<()> {
        validate_range("password.length", self.length, 1, MAX_LENGTH)?;

        let required = self.required();
        if required > self.length {
            return Err(MailError::InvalidConfigValueError {
                field: "password".to_string(),
                value: required.to_string(),
                reason: format!(
                    "Required characters exceed password length {}",
                    self.length
                ),
            });
        }

        Ok(())
    }
}

fn push_random<R: Rng>(out: &mut Vec<char>, pool: &[char], count: usize, rng: &mut R) {
    for _ in 0..count {
        out.push(pool[rng.random_range(0..pool.len())]);
    }
}

/// Generates a password of `length` characters with at least one digit, one
/// special character and one uppercase letter.
pub fn generate_password(length: usize) -> Result<String, PasswordError> {
    PasswordPolicy::with_length(length).generate()
}
