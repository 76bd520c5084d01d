use crate::data::Record;
use crate::error::Result;

/// Decode a response body holding a top-level JSON array of records.
///
/// Any malformed input fails the whole document: an empty body, a
/// non-array top level, a non-object element or a field of the wrong type.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_slice(body)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn decodes_array() {
        let records =
            decode_records(br#"[{"listId":1,"name":"Item 1","id":1},{"listId":2,"id":2}]"#)
                .unwrap();
        assert_eq!(
            records,
            vec![Record::new(1, Some("Item 1"), 1), Record::new(2, None, 2)]
        );
    }

    #[test]
    fn empty_array_is_success() {
        assert_eq!(decode_records(b"[]").unwrap(), Vec::<Record>::new());
    }

    #[test]
    fn ignores_unknown_fields() {
        let records = decode_records(br#"[{"listId":1,"name":"Item 1","id":1,"extra":true}]"#)
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_body_is_decode_error() {
        assert!(matches!(decode_records(b""), Err(Error::Decode(_))));
    }

    #[test]
    fn object_top_level_is_decode_error() {
        assert!(matches!(
            decode_records(br#"{"listId":1,"name":"Item 1","id":1}"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn null_element_is_decode_error() {
        assert!(matches!(
            decode_records(br#"[{"listId":1,"name":"Item 1","id":1},null]"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn truncated_json_is_decode_error() {
        assert!(matches!(
            decode_records(br#"[{"listId":1,"name":"#),
            Err(Error::Decode(_))
        ));
    }
}
