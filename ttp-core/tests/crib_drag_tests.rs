#![allow(missing_docs)]
use ttp_core::ascii::AsciiCatalog;
use ttp_core::hex::{bytes_to_text, combine, crib_drag, is_readable, text_to_bytes};

fn xor_with_key(plain: &[u8], key: &[u8]) -> Vec<u8> {
    plain.iter().zip(key).map(|(p, k)| p ^ k).collect()
}

#[test]
fn text_round_trips_through_the_catalog() {
    let catalog = AsciiCatalog::new();
    let text = "The quick brown fox, 42!";
    assert_eq!(bytes_to_text(&text_to_bytes(&catalog, text)), text);
}

#[test]
fn out_of_range_characters_become_gaps() {
    let catalog = AsciiCatalog::new();
    let bytes = text_to_bytes(&catalog, "a\tb");
    assert_eq!(bytes, vec![Some(97), None, Some(98)]);
    assert_eq!(bytes_to_text(&bytes), "ab");
}

#[test]
fn readability_accepts_basic_prose_and_rejects_noise() {
    let catalog = AsciiCatalog::new();
    assert!(is_readable(&text_to_bytes(&catalog, "Hello, World!")));
    assert!(!is_readable(&[Some(0x07)]));
    assert!(!is_readable(&[Some(b'#')]));
    assert!(is_readable(&[]));
}

#[test]
fn combining_cancels_the_keystream() {
    let key = b"SECRETSECRETS";
    let c1 = xor_with_key(b"attack at ten", key);
    let c2 = xor_with_key(b"defend at two", key);

    let combined = combine(&c1, &c2);
    let expected: Vec<u8> = b"attack at ten"
        .iter()
        .zip(b"defend at two")
        .map(|(a, b)| a ^ b)
        .collect();
    assert_eq!(combined, expected);
}

#[test]
fn combining_truncates_to_the_shorter_ciphertext() {
    let combined = combine(&[0x10, 0x20, 0x30], &[0x01, 0x02]);
    assert_eq!(combined, vec![0x11, 0x22]);
}

#[test]
fn random_keystreams_never_change_the_combined_stream() {
    use rand::Rng;
    let mut rng = rand::rng();

    let p1 = b"this fragment stays fixed";
    let p2 = b"while keystreams vary lot";
    let expected: Vec<u8> = p1.iter().zip(p2.iter()).map(|(a, b)| a ^ b).collect();

    for _ in 0..8 {
        let key: Vec<u8> = (0..p1.len()).map(|_| rng.random()).collect();
        let combined = combine(&xor_with_key(p1, &key), &xor_with_key(p2, &key));
        assert_eq!(combined, expected);
    }
}

#[test]
fn dragging_the_exact_fragment_recovers_the_other_plaintext() {
    let catalog = AsciiCatalog::new();
    let key = b"zWn1qPY0aKd8wG5cMrT2";
    let p1 = b"meet me at the docks";
    let p2 = b"the plan has changed";
    let combined = combine(&xor_with_key(p1, key), &xor_with_key(p2, key));

    // "has" sits at offset 9 of plaintext 2; dragging it there must
    // surface plaintext 1's bytes at the same offset.
    let windows = crib_drag(&combined, &text_to_bytes(&catalog, "has"));
    assert_eq!(windows[9].text(), "t t");
    assert!(windows[9].is_readable());
}

#[test]
fn the_concrete_two_byte_scenario() {
    let catalog = AsciiCatalog::new();
    let c1 = xor_with_key(b"Hx", b"AB");
    let c2 = xor_with_key(b"at", b"AB");
    let combined = combine(&c1, &c2);

    let windows = crib_drag(&combined, &text_to_bytes(&catalog, "at"));
    assert_eq!(windows[0].text(), "Hx");

    let windows = crib_drag(&combined, &text_to_bytes(&catalog, "Hx"));
    assert_eq!(windows[0].text(), "at");
}

#[test]
fn one_window_per_offset_with_truncation_at_the_end() {
    let catalog = AsciiCatalog::new();
    let combined = vec![0x00; 5];
    let windows = crib_drag(&combined, &text_to_bytes(&catalog, "abc"));

    assert_eq!(windows.len(), 5);
    for (offset, window) in windows.iter().enumerate() {
        assert_eq!(window.offset, offset);
    }
    assert_eq!(windows[0].bytes.len(), 3);
    assert_eq!(windows[3].bytes.len(), 2);
    assert_eq!(windows[4].bytes.len(), 1);
    assert_eq!(windows[4].text(), "a");
}

#[test]
fn an_empty_stream_yields_no_windows() {
    let catalog = AsciiCatalog::new();
    assert!(crib_drag(&[], &text_to_bytes(&catalog, "abc")).is_empty());
}

#[test]
fn gaps_in_the_guess_propagate_into_the_windows() {
    let catalog = AsciiCatalog::new();
    let combined = vec![0u8; 4];
    let windows = crib_drag(&combined, &text_to_bytes(&catalog, "a\tc"));

    assert_eq!(windows[0].bytes, vec![Some(b'a'), None, Some(b'c')]);
    assert_eq!(windows[0].text(), "ac");
}
