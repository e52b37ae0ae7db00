use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    EmptyDescription,
    InvalidIndex(usize),
    InvalidPriority(String),
    AlreadyCompleted(usize),
    InvalidInput(String),
    InvalidData(String),
    Serialization(String),
    Io(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn serialization<M: Into<String>>(message: M) -> Self {
        Self::Serialization(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "empty_description",
            Self::InvalidIndex(_) => "invalid_index",
            Self::InvalidPriority(_) => "invalid_priority",
            Self::AlreadyCompleted(_) => "already_completed",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
            Self::Serialization(_) => "serialization_error",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::EmptyDescription => "task description cannot be empty".to_string(),
            Self::InvalidIndex(index) => format!("invalid index {index}"),
            Self::InvalidPriority(value) => {
                format!("invalid priority '{value}'. Use Low, Medium, or High")
            }
            Self::AlreadyCompleted(index) => format!("task {index} is already completed"),
            Self::InvalidInput(message) => message.clone(),
            Self::InvalidData(message) => message.clone(),
            Self::Serialization(message) => message.clone(),
            Self::Io(message) => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
