/// Client-side rejection reasons for a contact submission.
///
/// Every variant is recoverable: the form keeps its input and the user may
/// correct and resubmit. Transport failures are carried separately as the
/// backend's error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    SpamDetected,
    MissingFields(Vec<&'static str>),
    InvalidEmail,
    MessageTooShort,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SpamDetected => {
                write!(f, "Spam detected!")
            }
            FormError::MissingFields(fields) => {
                write!(f, "Please fill in all required fields: {}.", fields.join(", "))
            }
            FormError::InvalidEmail => {
                write!(f, "Please enter a valid email address.")
            }
            FormError::MessageTooShort => {
                write!(f, "Message must be at least 10 characters.")
            }
        }
    }
}

impl std::error::Error for FormError {}

pub type FormResult<T> = Result<T, FormError>;
