//! Diagnostics for the strict DMS validator.

/// Why a DMS entry was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("character not allowed in a DMS value")]
    InvalidCharacter,
    #[error("no digits before the direction letter")]
    Empty,
    #[error("a direction letter must end the value")]
    MissingDirection,
    #[error("direction letter does not match the axis")]
    WrongAxisDirection,
    #[error("wrong number of degree, minute and second digits")]
    DigitCount,
    #[error("non-numeric characters between the digits")]
    NonNumeric,
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
    #[error("nothing may follow the pole or antimeridian")]
    BeyondAxisLimit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", .kind, context_suffix(.context))]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(" ({context})")
    }
}

pub type DmsResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_context_only_when_present() {
        let err = Error::new(ErrorKind::OutOfRange("minutes"), "60");
        assert_eq!(err.to_string(), "value out of range for minutes (60)");

        let err = Error::new(ErrorKind::MissingDirection, "");
        assert_eq!(err.to_string(), "a direction letter must end the value");
    }
}
