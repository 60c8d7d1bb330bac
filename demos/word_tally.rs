//! Tallies word frequencies with `chain_hash::HashMap`.
//!
//! Run with `cargo run --example word_tally`.

use chain_hash::HashMap;

const TEXT: &str = "the cat sat on the mat the cat saw the moon \
                    and the moon saw the cat on the mat";

fn main() {
    let mut tally: HashMap<u32> = HashMap::new();

    for word in TEXT.split_whitespace() {
        match tally.get_mut(word) {
            Some(count) => *count += 1,
            None => tally.set(word, 1),
        }
    }

    let mut counts: Vec<(&str, u32)> = tally.entries().map(|(w, c)| (w, *c)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("{} distinct words across {} buckets", tally.len(), tally.capacity());
    for (word, count) in counts {
        println!("{count:>3}  {word}");
    }
}
