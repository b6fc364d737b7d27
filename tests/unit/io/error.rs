//! Tests for error formatting and conversions

#[cfg(test)]
mod tests {
    use plankfloor::FloorError;
    use plankfloor::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests parameter errors name the parameter, value and reason
    // Verified by dropping the value from the message
    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("width", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
        assert!(error.source().is_none());
    }

    // Tests color errors quote the rejected input
    // Verified by printing only the reason
    #[test]
    fn test_invalid_color_message() {
        let error = FloorError::InvalidColor {
            value: "#12".to_string(),
            reason: "expected 6 hex digits".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color '#12': expected 6 hex digits"
        );
    }

    // Tests I/O failures keep their source error
    // Verified by discarding the source in the conversion
    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = FloorError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: io,
        };

        assert!(error.to_string().contains("create directory"));
        assert!(error.to_string().contains("out"));
        assert!(error.source().is_some());
    }

    // Tests bare I/O errors convert with an unknown path
    // Verified by panicking on conversion
    #[test]
    fn test_from_io_error() {
        let error: FloorError = std::io::Error::other("boom").into();
        assert!(matches!(
            error,
            FloorError::FileSystem { ref path, .. } if path == &PathBuf::from("<unknown>")
        ));
    }

    // Tests the empty mosaic error has a readable message
    // Verified by deriving the message from Debug
    #[test]
    fn test_empty_mosaic_message() {
        assert_eq!(
            FloorError::EmptyMosaic.to_string(),
            "Cannot build a preview without tiles"
        );
    }
}
