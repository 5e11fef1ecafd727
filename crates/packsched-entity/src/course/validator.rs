//! Finite-state validator for course names.
//!
//! A course name is one to four letters, exactly three digits, and an
//! optional single-letter suffix: `CSC216`, `E115`, `HESF101A`. Letters and
//! digits are ASCII only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use packsched_core::error::{AppError, ErrorKind};

/// Maximum number of letters in the prefix.
pub const MAX_PREFIX_LETTERS: u8 = 4;

/// Exact number of digits in the course number.
pub const COURSE_NUMBER_LENGTH: u8 = 3;

/// Reason the state machine rejected a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum TransitionError {
    #[error("Course name must start with a letter.")]
    MustStartWithLetter,
    #[error("Course name can only contain letters and digits.")]
    InvalidChar,
    #[error("Course name cannot start with more than 4 letters.")]
    TooManyPrefixLetters,
    #[error("Course name must have 3 digits.")]
    MustHaveThreeDigits,
    #[error("Course name can only have 3 digits.")]
    TooManyDigits,
    #[error("Course name can only have a 1 letter suffix.")]
    SuffixAlreadyConsumed,
    #[error("Course name cannot contain digits after the suffix.")]
    DigitsAfterSuffix,
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        AppError::with_source(ErrorKind::InvalidTransition, err.to_string(), err)
    }
}

/// State of the course-name machine, carrying its running counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorState {
    Initial,
    Letter { letters: u8 },
    Number { digits: u8 },
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Letter
        } else if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

impl ValidatorState {
    /// Number of course-number digits consumed so far.
    pub fn digits(&self) -> u8 {
        match self {
            Self::Initial | Self::Letter { .. } => 0,
            Self::Number { digits } => *digits,
            Self::Suffix => COURSE_NUMBER_LENGTH,
        }
    }

    /// Whether input may end in this state.
    pub fn is_accepting(&self) -> bool {
        self.digits() == COURSE_NUMBER_LENGTH
    }

    fn step(self, class: CharClass) -> Result<Self, TransitionError> {
        use CharClass::{Digit, Letter, Other};

        match (self, class) {
            (_, Other) => Err(TransitionError::InvalidChar),

            (Self::Initial, Letter) => Ok(Self::Letter { letters: 1 }),
            (Self::Initial, Digit) => Err(TransitionError::MustStartWithLetter),

            (Self::Letter { letters }, Letter) if letters == MAX_PREFIX_LETTERS => {
                Err(TransitionError::TooManyPrefixLetters)
            }
            (Self::Letter { letters }, Letter) => Ok(Self::Letter {
                letters: letters + 1,
            }),
            (Self::Letter { .. }, Digit) => Ok(Self::Number { digits: 1 }),

            (Self::Number { digits }, Letter) if digits == COURSE_NUMBER_LENGTH => {
                Ok(Self::Suffix)
            }
            (Self::Number { .. }, Letter) => Err(TransitionError::MustHaveThreeDigits),
            (Self::Number { digits }, Digit) if digits == COURSE_NUMBER_LENGTH => {
                Err(TransitionError::TooManyDigits)
            }
            (Self::Number { digits }, Digit) => Ok(Self::Number { digits: digits + 1 }),

            (Self::Suffix, Letter) => Err(TransitionError::SuffixAlreadyConsumed),
            (Self::Suffix, Digit) => Err(TransitionError::DigitsAfterSuffix),
        }
    }
}

/// Apply one character to the machine.
pub fn transition(state: ValidatorState, c: char) -> Result<ValidatorState, TransitionError> {
    state.step(CharClass::of(c))
}

/// Stateless course-name checker. Every call runs a fresh machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseNameValidator;

impl CourseNameValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the machine over `name`.
    ///
    /// Returns `Err` when a character is rejected mid-string and `Ok(false)`
    /// when the input ends without exactly three digits (including empty
    /// input). Both outcomes mean the name is invalid.
    pub fn check(&self, name: &str) -> Result<bool, TransitionError> {
        let end = name
            .chars()
            .try_fold(ValidatorState::Initial, transition)?;
        Ok(end.is_accepting())
    }

    /// Returns `true` only for a valid course name.
    pub fn is_valid(&self, name: &str) -> bool {
        matches!(self.check(name), Ok(true))
    }

    /// Validate `name`, reporting the rejection reason as an [`AppError`].
    pub fn validate(&self, name: &str) -> Result<(), AppError> {
        match self.check(name)? {
            true => Ok(()),
            false => Err(TransitionError::MustHaveThreeDigits.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 10] = [
        "L000", "L000S", "LL000", "LL000S", "LLL000", "LLL000S", "LLLL000", "LLLL000S", "AZ059A",
        "AZ059Z",
    ];

    const INVALID: [&str; 17] = [
        "", "L00", "L0000", "L0S", "L00S", "L0000S", "000", "LLLLL000", "L000SS", "L000S0",
        "L000S!", "@000S", "[000S", "L0/0S", "L0:0S", "L0:0@", "L0:0[",
    ];

    #[test]
    fn test_valid_names() {
        let validator = CourseNameValidator::new();
        for name in VALID {
            assert!(validator.is_valid(name), "{name} should be valid");
            assert_eq!(validator.check(name), Ok(true));
        }
        assert!(validator.is_valid("CSC216"));
    }

    #[test]
    fn test_invalid_names() {
        let validator = CourseNameValidator::new();
        for name in INVALID {
            assert!(!validator.is_valid(name), "{name} should be invalid");
            assert!(validator.validate(name).is_err());
        }
    }

    #[test]
    fn test_rejection_reasons() {
        let validator = CourseNameValidator::new();
        assert_eq!(validator.check("CSC21"), Ok(false));
        assert_eq!(validator.check("CSC2165"), Err(TransitionError::TooManyDigits));
        assert_eq!(validator.check("216CSC"), Err(TransitionError::MustStartWithLetter));
        assert_eq!(validator.check("CSC216AB"), Err(TransitionError::SuffixAlreadyConsumed));
        assert_eq!(validator.check("CSC216A1"), Err(TransitionError::DigitsAfterSuffix));
        assert_eq!(validator.check("CSCDE216"), Err(TransitionError::TooManyPrefixLetters));
        assert_eq!(validator.check("CS2A16"), Err(TransitionError::MustHaveThreeDigits));
        assert_eq!(validator.check("CS-216"), Err(TransitionError::InvalidChar));
    }

    #[test]
    fn test_non_ascii_letters_and_digits_rejected() {
        let validator = CourseNameValidator::new();
        for name in ["CSC\u{662}\u{661}\u{666}", "\u{c9}SC216", "CSC216\u{c9}"] {
            assert_eq!(validator.check(name), Err(TransitionError::InvalidChar), "{name}");
            assert!(!validator.is_valid(name));
        }
    }

    #[test]
    fn test_transition_table() {
        let mut state = ValidatorState::Initial;
        for c in "CSC216".chars() {
            state = transition(state, c).unwrap();
        }
        assert_eq!(state, ValidatorState::Number { digits: 3 });
        assert_eq!(transition(state, 'A'), Ok(ValidatorState::Suffix));
        assert!(ValidatorState::Suffix.is_accepting());
        assert!(!ValidatorState::Initial.is_accepting());
    }

    #[test]
    fn test_validate_maps_to_invalid_transition() {
        let validator = CourseNameValidator::new();
        let err = validator.validate("CSC21").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);
        let err = validator.validate("216CSC").unwrap_err();
        assert_eq!(err.message, "Course name must start with a letter.");
    }
}
