#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_edit::{align, distance, render};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_align_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 4_000);
    let t = random_dna(&mut rng, 4_000);
    let aln = align(&s, &t);
    assert!(aln.distance <= 4_000);
    assert_eq!(aln.distance, distance(&s, &t));
    let view = render(&s, &t, &aln.operations).unwrap();
    assert_eq!(view.top.len(), aln.operations.len());
}
