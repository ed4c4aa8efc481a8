//! Unit tests for index identifier and key types

#[cfg(test)]
mod tests {
    use crate::db::error::DbError;
    use crate::db::types::{PhotoId, SeqKey};

    #[test]
    fn test_photo_id_display() {
        assert_eq!(PhotoId(3).to_string(), "#3");
        assert_eq!(PhotoId(3).index(), 3);
    }

    #[test]
    fn test_photo_id_ordering() {
        assert!(PhotoId(1) < PhotoId(2));
    }

    #[test]
    fn test_seq_key_bytes_sort_like_numbers() {
        let small: [u8; 8] = SeqKey(2).into();
        let large: [u8; 8] = SeqKey(256).into();
        assert!(small < large);
    }

    #[test]
    fn test_seq_key_from_bytes() {
        let bytes: [u8; 8] = SeqKey(42).into();
        let key = SeqKey::try_from(&bytes[..]).unwrap();
        assert_eq!(key, SeqKey(42));
    }

    #[test]
    fn test_seq_key_rejects_wrong_length() {
        let result = SeqKey::try_from(&[1u8, 2, 3][..]);
        match result {
            Err(DbError::SerializeError(msg)) => assert!(msg.contains("3")),
            other => panic!("Expected SerializeError, got {other:?}"),
        }
    }

    #[test]
    fn test_seq_key_from_position() {
        assert_eq!(SeqKey::from(5usize), SeqKey(5));
    }
}
