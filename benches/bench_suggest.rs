use autocorrect::{Dictionary, SuggestionEngine};
use criterion::{Criterion, criterion_group, criterion_main};

// Deterministic pseudo-words so the benchmark needs no word list on disk.
fn synthetic_dictionary(size: usize) -> Dictionary {
    const LETTERS: &[u8] = b"etaoinshrdlucmfwypvbgkqjxz";
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut words = Vec::with_capacity(size);
    for _ in 0..size {
        let len = 3 + (next() % 8) as usize;
        let word: String = (0..len)
            .map(|_| LETTERS[(next() % LETTERS.len() as u64) as usize] as char)
            .collect();
        words.push(word);
    }
    Dictionary::new(words)
}

fn bench_suggest(c: &mut Criterion) {
    let threshold = 3;
    let engine = SuggestionEngine::new(synthetic_dictionary(50_000), threshold)
        .expect("threshold is positive");

    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.".to_string();

    // split the text content into words using white space
    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    c.bench_function("suggest_single_word", |b| {
        b.iter(|| engine.suggest("misspeled"))
    });

    c.bench_function("suggest_many_words", |b| {
        b.iter(|| engine.suggest_many(&words))
    });
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
