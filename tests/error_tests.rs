mod common;

use common::{BrokenReader, FailingWriter, Person};
use embedded_io::ErrorKind;
use growvec::{CodecError, GrowVec};

fn stream(elements: &[&[u8]]) -> Vec<u8> {
    let mut bytes = (elements.len() as u64).to_le_bytes().to_vec();
    for element in elements {
        bytes.extend_from_slice(&(element.len() as u64).to_le_bytes());
        bytes.extend_from_slice(element);
    }
    bytes
}

#[test]
fn test_error_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.bin");

    let mut vec: GrowVec<i32> = GrowVec::from([1]);
    let result = vec.deserialize(&path);
    assert_eq!(
        result.unwrap_err(),
        CodecError::Open {
            kind: ErrorKind::NotFound
        }
    );
    assert_eq!(vec.as_slice(), &[1]);
}

#[test]
fn test_error_create_in_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.bin");

    let result = GrowVec::from([1, 2]).serialize(&path);
    assert!(matches!(result, Err(CodecError::Open { .. })));
}

#[test]
fn test_error_empty_input() {
    let result = GrowVec::<i32>::decode_from(&mut &b""[..]);
    assert_eq!(result.unwrap_err(), CodecError::UnexpectedEof { position: 0 });
}

#[test]
fn test_error_truncated_count() {
    let result = GrowVec::<i32>::decode_from(&mut &[1u8, 0, 0][..]);
    assert_eq!(result.unwrap_err(), CodecError::UnexpectedEof { position: 0 });
}

#[test]
fn test_error_missing_element() {
    let mut bytes = stream(&[b"1"]);
    bytes[0] = 2; // claims two elements, holds one

    let result = GrowVec::<i32>::decode_from(&mut bytes.as_slice());
    assert_eq!(result.unwrap_err(), CodecError::UnexpectedEof { position: 17 });
}

#[test]
fn test_error_truncated_element_body() {
    let mut bytes = stream(&[b"12", b"345"]);
    bytes.truncate(bytes.len() - 1);

    let result = GrowVec::<i32>::decode_from(&mut bytes.as_slice());
    assert_eq!(result.unwrap_err(), CodecError::UnexpectedEof { position: 26 });
}

#[test]
fn test_error_invalid_utf8() {
    let bytes = stream(&[b"ok", &[0xff, 0xfe]]);

    let result = GrowVec::<String>::decode_from(&mut bytes.as_slice());
    assert_eq!(
        result.unwrap_err(),
        CodecError::InvalidUtf8 {
            index: 1,
            position: 26
        }
    );
}

#[test]
fn test_error_parse_failure() {
    let bytes = stream(&[b"7", b"seven"]);

    let result = GrowVec::<i32>::decode_from(&mut bytes.as_slice());
    assert_eq!(
        result.unwrap_err(),
        CodecError::Parse {
            index: 1,
            position: 25
        }
    );
}

#[test]
fn test_error_parse_failure_structured() {
    let bytes = stream(&[b"Name: Ann Age: seven"]);

    let result = GrowVec::<Person>::decode_from(&mut bytes.as_slice());
    assert_eq!(
        result.unwrap_err(),
        CodecError::Parse {
            index: 0,
            position: 16
        }
    );
}

#[test]
fn test_error_leaves_vector_unchanged() {
    let bytes = stream(&[b"4", b"5", b"x"]);

    let mut vec = GrowVec::from([1, 2, 3]);
    assert!(vec.deserialize_from(&mut bytes.as_slice()).is_err());
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_error_reader_failure() {
    let result = GrowVec::<i32>::decode_from(&mut BrokenReader);
    assert_eq!(
        result.unwrap_err(),
        CodecError::Io {
            kind: ErrorKind::Other,
            position: 0
        }
    );
}

#[test]
fn test_error_writer_failure() {
    let vec = GrowVec::from([1, 2, 3]);
    let mut writer = FailingWriter::new(12);

    let result = vec.serialize_to(&mut writer);
    assert_eq!(
        result.unwrap_err(),
        CodecError::Io {
            kind: ErrorKind::BrokenPipe,
            position: 8
        }
    );
    assert_eq!(writer.written.len(), 12);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn test_error_length_overflow() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&u64::MAX.to_le_bytes());

    let result = GrowVec::<i32>::decode_from(&mut bytes.as_slice());
    assert_eq!(
        result.unwrap_err(),
        CodecError::LengthOverflow { value: u64::MAX }
    );
}

#[test]
fn test_error_display_messages() {
    assert_eq!(
        CodecError::UnexpectedEof { position: 17 }.to_string(),
        "Unexpected end of input at byte 17"
    );
    assert_eq!(
        CodecError::Parse {
            index: 1,
            position: 25
        }
        .to_string(),
        "Element 1 at byte 25 cannot be parsed"
    );
    assert_eq!(
        CodecError::Open {
            kind: ErrorKind::NotFound
        }
        .to_string(),
        "Cannot open file: NotFound"
    );
}
