#![allow(missing_docs)]
use ttp_core::ascii::{AsciiCatalog, PRINTABLE_MAX, PRINTABLE_MIN};
use ttp_core::xor_table::XorTable;

#[test]
fn catalog_indexes_all_three_representations() {
    let catalog = AsciiCatalog::new();
    assert_eq!(catalog.symbols().len(), 95);

    let a = catalog.by_char('A').unwrap();
    assert_eq!(a.code, 65);
    assert_eq!(a.hex(), "41");
    assert_eq!(catalog.by_hex("41").unwrap().ch, 'A');
    assert_eq!(catalog.by_code(65).unwrap().ch, 'A');
}

#[test]
fn catalog_misses_are_none_not_errors() {
    let catalog = AsciiCatalog::new();
    assert!(catalog.by_code(31).is_none());
    assert!(catalog.by_code(127).is_none());
    assert!(catalog.by_char('\n').is_none());
    assert!(catalog.by_char('é').is_none());
    assert!(catalog.by_hex("zz").is_none());
    assert!(catalog.by_hex("0a0b").is_none());
}

#[test]
fn every_printable_pair_is_recorded_both_ways() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    for a in PRINTABLE_MIN..=PRINTABLE_MAX {
        for b in PRINTABLE_MIN..=PRINTABLE_MAX {
            let relations = table.relations_for_result(a ^ b);
            assert!(
                relations
                    .iter()
                    .any(|r| r.left.code == a && r.right.code == b)
            );
            assert!(
                relations
                    .iter()
                    .any(|r| r.left.code == b && r.right.code == a)
            );
        }
    }
}

#[test]
fn table_covers_exactly_the_9025_ordered_pairs() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    let total: usize = (0..=255u8)
        .map(|b| table.relations_for_result(b).len())
        .sum();
    assert_eq!(total, 95 * 95);
}

#[test]
fn self_pairs_produce_zero() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    let relations = table.relations_for_result(0x00);
    assert_eq!(relations.len(), 95);
    assert!(relations.iter().all(|r| r.left == r.right));
}

#[test]
fn candidate_sets_are_unique_and_closed_under_xor() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    for result in 0..=255u8 {
        let candidates = table.candidate_symbols_for_result(result);

        let mut codes: Vec<u8> = candidates.iter().map(|s| s.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), candidates.len(), "duplicate symbol codes");

        // XOR-ing any member with the result byte lands on another member.
        for symbol in &candidates {
            let partner = symbol.code ^ result;
            assert!(candidates.iter().any(|s| s.code == partner));
        }

        if !table.relations_for_result(result).is_empty() {
            assert!(!candidates.is_empty());
        }
    }
}

#[test]
fn pair_lookups_agree_with_the_result_index() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    let h = catalog.by_char('H').unwrap();
    let a = catalog.by_char('a').unwrap();
    let relation = table.relation(h, a);
    assert_eq!(relation.result, b'H' ^ b'a');
    assert_eq!(relation.hex(), "29");

    let row: Vec<_> = table.relations_from(h).collect();
    assert_eq!(row.len(), 95);
    assert!(row.iter().all(|r| r.left == h));
    assert_eq!(row[0].right.code, PRINTABLE_MIN);
}

#[test]
fn grid_rendering_has_a_header_and_one_row_per_symbol() {
    let catalog = AsciiCatalog::new();
    let table = XorTable::new(&catalog);

    let rendered = table.to_string();
    assert_eq!(rendered.lines().count(), 96);

    let header = rendered.lines().next().unwrap();
    assert!(header.contains("A  B  C"));

    let a_row = rendered.lines().find(|l| l.starts_with("A ")).unwrap();
    assert!(a_row.contains("00"));
}
