use thiserror::Error;

/// Fatal failures while bringing the platform up. Both carry the
/// platform's last error string.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("video subsystem initialization failed: {0}")]
    VideoInit(String),

    #[error("window/renderer creation failed: {0}")]
    WindowCreation(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_platform_text() {
        let e = PlatformError::VideoInit("No available video device".to_string());
        assert_eq!(
            e.to_string(),
            "video subsystem initialization failed: No available video device"
        );
    }

    #[test]
    fn message_is_never_empty() {
        let e = PlatformError::WindowCreation(String::new());
        assert!(!e.to_string().is_empty());
    }
}
