// src/application/error.rs
use crate::domain::errors::DomainError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Reserved key for errors that concern the whole operation rather than a
/// single input field.
pub const FORM_FIELD: &str = "_form";

/// Field-keyed validation errors, render-ready for form UIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(name, message);
        errors
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self::field(FORM_FIELD, message)
    }

    pub fn push(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(message.into());
    }

    /// Records a value-object rejection under `name`; non-validation domain
    /// errors are not field errors and pass through untouched.
    pub fn absorb(&mut self, name: &str, err: DomainError) -> Result<(), DomainError> {
        match err {
            DomainError::Validation(msg) => {
                self.push(name, msg);
                Ok(())
            }
            other => Err(other),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Fails with `ApplicationError::Validation` if anything accumulated.
    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}

impl ApplicationError {
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    /// Maps a value-object rejection to a single-field validation error.
    pub fn invalid_field(field: impl Into<String>, err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(FieldErrors::field(field, msg)),
            other => Self::Domain(other),
        }
    }
}
