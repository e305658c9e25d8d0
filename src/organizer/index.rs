use std::fmt;

/// Why a signed index does not address a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    Negative(isize),
    TooLarge(isize),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(i) => write!(f, "Index cannot be negative: {i}"),
            Self::TooLarge(i) => write!(f, "Index is too large: {i}"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Map `index` onto `0..len`.
pub(super) fn check_index(index: isize, len: usize) -> Result<usize, IndexError> {
    let i = usize::try_from(index).map_err(|_| IndexError::Negative(index))?;
    if i < len {
        Ok(i)
    } else {
        Err(IndexError::TooLarge(index))
    }
}

pub(super) const EMPTY_MESSAGE: &str = "Track list is empty";

/// Message naming the valid range for a collection of `len` tracks.
pub(super) fn range_message(len: usize) -> String {
    match len {
        0 => EMPTY_MESSAGE.to_string(),
        n => format!("Valid range must be between 0 and {}", n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_accepts_exactly_zero_to_len_minus_one() {
        for i in 0..3 {
            assert_eq!(check_index(i, 3), Ok(i as usize));
        }
        assert_eq!(check_index(3, 3), Err(IndexError::TooLarge(3)));
        assert_eq!(check_index(-1, 3), Err(IndexError::Negative(-1)));
        assert_eq!(check_index(0, 0), Err(IndexError::TooLarge(0)));
        assert_eq!(check_index(isize::MIN, 0), Err(IndexError::Negative(isize::MIN)));
    }

    #[test]
    fn index_error_messages_distinguish_negative_from_too_large() {
        assert_eq!(IndexError::Negative(-4).to_string(), "Index cannot be negative: -4");
        assert_eq!(IndexError::TooLarge(9).to_string(), "Index is too large: 9");
    }

    #[test]
    fn range_message_names_last_index_or_empty() {
        assert_eq!(range_message(3), "Valid range must be between 0 and 2");
        assert_eq!(range_message(1), "Valid range must be between 0 and 0");
        assert_eq!(range_message(0), "Track list is empty");
    }
}
