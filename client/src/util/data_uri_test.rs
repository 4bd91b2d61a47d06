use super::*;

#[test]
fn encode_prefixes_mime_and_base64() {
    assert_eq!(encode("image/png", b"hi"), "data:image/png;base64,aGk=");
}

#[test]
fn empty_mime_falls_back_to_octet_stream() {
    assert_eq!(encode("  ", b""), "data:application/octet-stream;base64,");
}

#[test]
fn chunks_are_joined_in_order() {
    let chunks = vec![b"ab".to_vec(), Vec::new(), b"c".to_vec()];
    assert_eq!(encode_chunks("audio/webm", &chunks), encode("audio/webm", b"abc"));
}
