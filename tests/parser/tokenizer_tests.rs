//! Tokenizer tests.

use outpost_parser::{InputTokenizer, stdlib};

#[test]
fn standard_stopwords_are_dropped() {
    let tokens = stdlib::tokenizer().tokenize("Prendi LA Pala dalla cassa");
    assert_eq!(tokens, ["prendi", "pala", "cassa"]);
}

#[test]
fn any_whitespace_separates_words() {
    let tokens = stdlib::tokenizer().tokenize("\tvai   nord\n");
    assert_eq!(tokens, ["vai", "nord"]);
}

#[test]
fn apostrophes_stay_inside_words() {
    let tokens = stdlib::tokenizer().tokenize("esamina l'analgesico");
    assert_eq!(tokens, ["esamina", "l'analgesico"]);
}

#[test]
fn blank_input_is_empty() {
    let tokenizer = stdlib::tokenizer();
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize("   \t ").is_empty());
    assert!(tokenizer.tokenize("il lo la").is_empty());
}

#[test]
fn stopwords_load_from_a_word_list() {
    let list = "il\n  LA \n\nverso\n";
    let tokenizer = InputTokenizer::from_reader(list.as_bytes()).unwrap();
    assert_eq!(tokenizer.stopword_count(), 3);
    assert!(tokenizer.is_stopword("la"));
    assert_eq!(tokenizer.tokenize("vai verso nord"), ["vai", "nord"]);
}
