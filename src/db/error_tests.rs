//! Unit tests for database error types

#[cfg(test)]
mod tests {
    use crate::db::error::DbError;
    use std::error::Error;

    #[test]
    fn test_serialize_error() {
        let error = DbError::SerializeError("Invalid key length 3".to_string());
        assert_eq!(error.to_string(), "Error during serialization: Invalid key length 3");
    }

    #[test]
    fn test_error_debug() {
        let error = DbError::SerializeError("test error".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("SerializeError"));
        assert!(debug.contains("test error"));
    }

    #[test]
    fn test_error_source() {
        let error = DbError::SerializeError("bad".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_sled_error_conversion() {
        let sled_error = sled::Error::Unsupported("nope".to_string());
        let error: DbError = sled_error.into();
        assert!(matches!(error, DbError::SledError(_)));
        assert!(error.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let result: Result<(String, usize), _> =
            bincode::decode_from_slice(&[0xFF], bincode::config::standard());
        let error: DbError = result.unwrap_err().into();
        assert!(matches!(error, DbError::DecodeError(_)));
    }
}
