use seq_edit::{align, render, AlignError, EditScript, Operation};

fn check(a: &str, b: &str, distance: usize, ops: &str) {
    let aln = align(a.as_bytes(), b.as_bytes());
    assert_eq!(aln.distance, distance, "distance for {a:?} vs {b:?}");
    assert_eq!(aln.operations.to_string(), ops, "script for {a:?} vs {b:?}");
}

#[test]
fn empty_first_is_all_inserts() {
    check("", "ACGT", 4, "IIII");
}

#[test]
fn empty_second_is_all_deletes() {
    check("ACGT", "", 4, "DDDD");
}

#[test]
fn both_empty() {
    check("", "", 0, "");
}

#[test]
fn identical_sequences_match_everywhere() {
    check("ACGT", "ACGT", 0, "MMMM");
}

#[test]
fn single_substitution() {
    check("A", "G", 1, "C");
}

#[test]
fn trailing_delete_preferred_over_leading() {
    check("AC", "A", 1, "MD");
}

#[test]
fn six_mer_pair_follows_reference_precedence() {
    check("ACAACC", "CAAAAC", 3, "IMCMMMD");
}

#[test]
fn documented_render_of_six_mer_pair() {
    // An equally cheap script for the same pair, as shown in the original
    // output format.
    let ops: EditScript = "DMMMICM".parse().unwrap();
    assert_eq!(ops.cost(), align(b"ACAACC", b"CAAAAC").distance);
    let view = render(b"ACAACC", b"CAAAAC", &ops).unwrap();
    assert_eq!(view.top, "ACAA-CC");
    assert_eq!(view.glyphs, " ||| *|");
    assert_eq!(view.bottom, "-CAAAAC");
}

#[test]
fn rendering_the_aligner_output() {
    let aln = align(b"GATTACA", b"GCATGCU");
    assert_eq!(aln.distance, 4);
    let view = render(b"GATTACA", b"GCATGCU", &aln.operations).unwrap();
    assert_eq!(view.to_string(), "G-ATTACA\n| ||* |*\nGCATG-CU");
}

#[test]
fn renderer_rejects_foreign_script() {
    let aln = align(b"ACGT", b"ACGT");
    let err = render(b"ACG", b"ACGT", &aln.operations).unwrap_err();
    assert!(matches!(err, AlignError::MalformedOperations { .. }));
}

#[test]
fn script_text_round_trips_through_renderer_input() {
    let aln = align(b"kitten", b"sitting");
    let text = aln.operations.to_string();
    assert_eq!(text, "CMMMCMI");
    let parsed: EditScript = text.parse().unwrap();
    assert_eq!(parsed, aln.operations);
    assert_eq!(parsed.count(Operation::Convert), 2);
}
