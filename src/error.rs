use thiserror::Error;

#[derive(Debug, Error)]
pub enum SluglineError {
    #[error("no usable screenplay structure in input")]
    NoScreenplay,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SluglineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SluglineError::NoScreenplay.to_string(),
            "no usable screenplay structure in input"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SluglineError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
