use core::fmt;

/// Errors raised while describing the hardware to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A GPIO bank has 16 pins; the index was outside `0..16`.
    InvalidPin(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPin(index) => write!(f, "pin index {index} out of range (0..16)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_index() {
        assert_eq!(
            Error::InvalidPin(16).to_string(),
            "pin index 16 out of range (0..16)"
        );
    }
}
