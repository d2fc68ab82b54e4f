use crate::domain::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    ItemIndexOutOfRange { index: usize, len: usize },
    UnknownItem(ItemId),
    ClearNotRequested,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::ItemIndexOutOfRange { index, len } => {
                write!(f, "Item index {} out of range for list of {}", index, len)
            }
            DomainError::UnknownItem(id) => {
                write!(f, "No item with id {}", id)
            }
            DomainError::ClearNotRequested => {
                write!(f, "Clear was not requested")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
