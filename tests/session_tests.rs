//! Integration tests driving full narrowing sessions
//!
//! These exercise validation, filtering, ranking, and the interactive loop
//! together, the way a real session uses them.

use std::io::Cursor;
use wordle_sieve::commands::{parse_observation_arg, run_interactive, run_query};
use wordle_sieve::core::{Observation, Word};
use wordle_sieve::filter::{filter_candidates, suggest, Session, SUGGESTION_LIMIT};
use wordle_sieve::wordlists::loader::words_from_slice;
use wordle_sieve::wordlists::WORDS;

fn dictionary(words: &[&str]) -> Vec<Word> {
    words.iter().map(|&w| Word::new(w).unwrap()).collect()
}

fn observation(guess: &str, feedback: &str) -> Observation {
    Observation::validate(guess, feedback).unwrap()
}

#[test]
fn embedded_dictionary_loads() {
    let words = words_from_slice(WORDS);
    assert_eq!(words.len(), WORDS.len());
    assert!(words.len() > 500);
}

#[test]
fn progressive_rounds_never_grow_the_candidate_set() {
    let mut session = Session::new(words_from_slice(WORDS));
    let mut previous = session.candidates().len();

    for (guess, feedback) in [("slate", "RRYRY"), ("crane", "RRYRY"), ("about", "YRRRR")] {
        let remaining = session.record(observation(guess, feedback));
        assert!(remaining <= previous, "candidates grew after {guess}");
        previous = remaining;
    }
}

#[test]
fn filtering_is_a_pure_function_of_the_history() {
    let dict = words_from_slice(WORDS);
    let history = vec![
        observation("crane", "RYRRY"),
        observation("sport", "RRYYR"),
    ];

    let first = filter_candidates(&dict, &history);
    let second = filter_candidates(&dict, &history);

    let first_texts: Vec<&str> = first.iter().map(|w| w.text()).collect();
    let second_texts: Vec<&str> = second.iter().map(|w| w.text()).collect();
    assert_eq!(first_texts, second_texts);
}

#[test]
fn exact_feedback_pins_the_answer() {
    let dict = words_from_slice(WORDS);

    // "storm" is in the embedded dictionary; all-green pins it
    let survivors = filter_candidates(&dict, &[observation("storm", "GGGGG")]);
    let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["storm"]);
}

#[test]
fn red_at_a_shared_position_can_empty_the_set() {
    // 'a' red in the guess eliminates even words with 'a' at that position
    let dict = dictionary(&["crane", "crash", "trace", "brace"]);
    let survivors = filter_candidates(&dict, &[observation("crane", "GGRRR")]);
    assert!(survivors.is_empty());
}

#[test]
fn duplicate_letters_survive_correct_narrowing() {
    let dict = dictionary(&["speed", "creep", "sleep", "steep", "sweep"]);

    // Answer CREEP, guess SPEED: s(R) p(Y) e(G) e(G) d(R)
    let survivors = filter_candidates(&dict, &[observation("speed", "RYGGR")]);
    let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["creep"]);
}

#[test]
fn suggestions_appear_only_above_the_limit() {
    let session = Session::new(words_from_slice(WORDS));
    let report = session.report();

    // Whole dictionary survives with no observations
    assert_eq!(report.survivors.len(), WORDS.len());
    assert_eq!(report.suggestions.len(), SUGGESTION_LIMIT);

    // Every word here contains 'a', so this observation empties the set
    let mut narrow = Session::new(dictionary(&["crane", "crash", "trace"]));
    let _ = narrow.record(observation("aaaaa", "RRRRR"));
    assert!(narrow.report().suggestions.is_empty());
}

#[test]
fn suggested_words_come_from_the_candidate_set() {
    let dict = words_from_slice(WORDS);
    let candidates = filter_candidates(&dict, &[observation("slate", "RRRRY")]);
    assert!(candidates.len() > SUGGESTION_LIMIT);

    let suggestions = suggest(&candidates, SUGGESTION_LIMIT);
    assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
    for word in &suggestions {
        assert!(candidates.contains(word));
    }
}

#[test]
fn interactive_session_end_to_end() {
    let input_text = "crane\nGGGRR\ndone\n";
    let mut input = Cursor::new(input_text);

    let report = run_interactive(
        dictionary(&["crane", "crash", "trace", "brace"]),
        &mut input,
    )
    .unwrap();

    assert_eq!(report.observations, 1);
    assert_eq!(report.survivors, vec!["crash"]);
    assert!(report.suggestions.is_empty());
}

#[test]
fn interactive_session_recovers_from_bad_input() {
    let input_text = "zebra!\nGGGGG\ncrane\nBADBAD\ncrane\nGGGRR\nquit\n";
    let mut input = Cursor::new(input_text);

    let report = run_interactive(
        dictionary(&["crane", "crash", "trace", "brace"]),
        &mut input,
    )
    .unwrap();

    assert_eq!(report.observations, 1);
    assert_eq!(report.survivors, vec!["crash"]);
}

#[test]
fn query_mode_matches_interactive_results() {
    let dict = dictionary(&["crane", "crash", "trace", "brace", "grace", "craft"]);

    let query_report = run_query(
        dict.clone(),
        &["crane=GGGRR".to_string(), "blame=RRGRR".to_string()],
        5,
    )
    .unwrap();

    let mut input = Cursor::new("crane\nGGGRR\nblame\nRRGRR\ndone\n");
    let interactive_report = run_interactive(dict, &mut input).unwrap();

    assert_eq!(query_report.survivors, interactive_report.survivors);
    assert_eq!(query_report.survivors, vec!["craft", "crash"]);
}

#[test]
fn observation_args_round_trip_through_the_pipeline() {
    let obs = parse_observation_arg("sassy=GRYRR").unwrap();
    let dict = dictionary(&["soils", "stone", "shoss", "sassy"]);

    let survivors = filter_candidates(&dict, &[obs]);
    let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["soils"]);
}
