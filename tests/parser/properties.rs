//! Property tests over arbitrary player input.

use outpost_parser::{CommandParser, ParseResult, Scope, stdlib};
use outpost_runtime::demo;
use proptest::prelude::*;

use crate::world_in;

/// Words the parser knows, mixed with noise, in any case.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "vai", "prendi", "parla", "spara", "osserva", "leggi", "usa", "nord", "ovest",
            "torcia", "radio", "guardia", "cane", "il", "la", "dei", "sul",
        ])
        .prop_map(str::to_string),
        "[a-zA-Zàèéìòù']{1,10}",
    ]
}

fn line() -> impl Strategy<Value = String> {
    (prop::collection::vec(word(), 0..8), prop::collection::vec("[ \t]{1,3}", 8))
        .prop_map(|(words, gaps)| {
            words
                .iter()
                .zip(gaps.iter())
                .map(|(w, gap)| format!("{w}{gap}"))
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokens_are_clean(input in line()) {
        let tokenizer = stdlib::tokenizer();
        for token in tokenizer.tokenize(&input) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert!(!tokenizer.is_stopword(&token));
        }
    }

    #[test]
    fn tokenizing_is_idempotent(input in line()) {
        let tokenizer = stdlib::tokenizer();
        let once = tokenizer.tokenize(&input);
        let twice = tokenizer.tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parse_follows_the_first_token(input in line()) {
        let world = world_in(demo::KENNEL);
        let parser = CommandParser::default();
        let tokens = stdlib::tokenizer().tokenize(&input);

        match parser.parse(&input, &Scope::of(&world)) {
            ParseResult::Empty => prop_assert!(tokens.is_empty()),
            ParseResult::Parsed(intent) => {
                let verb = parser.catalog().lookup(&tokens[0]).map(|c| c.kind);
                prop_assert_eq!(intent.kind(), verb);
                if verb.is_none() {
                    prop_assert!(!intent.has_nouns());
                    prop_assert_eq!(intent.direction, None);
                }
            }
        }
    }
}
