use crate::SseDecoder;

#[test]
fn test_single_event_decoded() {
    let mut decoder = SseDecoder::new();

    assert_eq!(decoder.push(b"data: healthy 3\n\n"), vec!["healthy 3"]);
}

#[test]
fn test_event_split_across_chunks() {
    let mut decoder = SseDecoder::new();

    assert!(decoder.push(b"data: star").is_empty());
    assert!(decoder.push(b"ting\n").is_empty());
    assert_eq!(decoder.push(b"\ndata: healthy\n\n"), vec!["starting", "healthy"]);
}

#[test]
fn test_keep_alive_comments_ignored() {
    let mut decoder = SseDecoder::new();

    assert_eq!(decoder.push(b":\n\ndata:inactive\n\n: ping\n\n"), vec!["inactive"]);
}

#[test]
fn test_crlf_line_endings_accepted() {
    let mut decoder = SseDecoder::new();

    assert_eq!(decoder.push(b"data: cancelled\r\n\r\n"), vec!["cancelled"]);
}

#[test]
fn test_crlf_pair_split_across_chunks() {
    let mut decoder = SseDecoder::new();

    assert!(decoder.push(b"data: healthy 1\r").is_empty());
    assert!(decoder.push(b"\n\r").is_empty());
    assert_eq!(decoder.push(b"\n"), vec!["healthy 1"]);
}

#[test]
fn test_multibyte_character_split_across_chunks() {
    let mut decoder = SseDecoder::new();
    let frame = "data: Zoë\n\n".as_bytes();
    let split = frame.iter().position(|b| *b == 0xC3).unwrap() + 1;

    assert!(decoder.push(&frame[..split]).is_empty());
    assert_eq!(decoder.push(&frame[split..]), vec!["Zoë"]);
}
