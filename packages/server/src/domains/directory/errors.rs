use thiserror::Error;

/// Failures reported by directory operations.
///
/// Display strings are the messages shown to API clients.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("User not found")]
    UserNotFound,

    #[error("Change not found")]
    ChangeNotFound,

    #[error("Message not found")]
    MessageNotFound,

    #[error("Announcement not found")]
    AnnouncementNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::Validation(message.into())
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
