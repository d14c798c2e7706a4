//! Example: aligning many random read pairs at once.
//!
//! Run with:
//! `cargo run --example batch --features parallel`

use rand::{rngs::StdRng, Rng, SeedableRng};
use seq_edit::align_batch;

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let reads: Vec<(Vec<u8>, Vec<u8>)> = (0..8usize)
        .map(|k| {
            let s = random_dna(&mut rng, 40);
            let mut t = s.clone();
            // k point substitutions at random positions
            for _ in 0..k {
                let pos = rng.gen_range(0..t.len());
                t[pos] = if t[pos] == b'A' { b'C' } else { b'A' };
            }
            (s, t)
        })
        .collect();

    for (k, aln) in align_batch::<_, u8>(&reads).iter().enumerate() {
        println!("pair {k}: distance {:>2}  {}", aln.distance, aln.operations);
    }
}
