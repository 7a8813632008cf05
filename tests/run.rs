use std::{collections::BTreeSet, fs};

use five_five::{run, run_file, Config, Error, LineEnding, Limits};

const WORDS: &str = "abcde\nedcba\nfghij\nklm\nklmno\npqrst\nfloor\nuvwxy\nvwxyz\n";

fn config(threads: usize) -> Config {
    Config {
        threads,
        line_ending: LineEnding::Lf,
        ..Config::default()
    }
}

fn sorted_lines(lines: impl Iterator<Item = String>) -> BTreeSet<Vec<String>> {
    lines
        .map(|line| {
            let mut words: Vec<String> = line.split(' ').map(str::to_owned).collect();
            words.sort();
            words
        })
        .collect()
}

#[test]
fn solves_a_word_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, WORDS).unwrap();

    let outcome = run_file(&path, config(3)).unwrap();
    let found = sorted_lines(outcome.lines());

    let expected: BTreeSet<Vec<String>> = [
        ["abcde", "fghij", "klmno", "pqrst", "uvwxy"],
        ["abcde", "fghij", "klmno", "pqrst", "vwxyz"],
    ]
    .iter()
    .map(|s| s.iter().map(|w| w.to_string()).collect())
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn writes_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("solution.txt");

    let outcome = run(WORDS.as_bytes(), config(2)).unwrap();
    outcome.write_to(fs::File::create(&out).unwrap()).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.ends_with('\n'));
    for line in written.lines() {
        assert_eq!(line.split(' ').count(), 5);
        assert!(!line.contains("edcba"));
    }
}

#[test]
fn thread_count_does_not_change_the_answer() {
    let single = sorted_lines(run(WORDS.as_bytes(), config(1)).unwrap().lines());
    for threads in [2, 4, 16] {
        let many = sorted_lines(run(WORDS.as_bytes(), config(threads)).unwrap().lines());
        assert_eq!(many, single);
    }
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(dir.path().join("nope.txt"), config(1)).unwrap_err();
    assert!(matches!(err, Error::Input { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn too_many_solutions_is_an_error() {
    let config = Config {
        limits: Limits {
            solutions: 1,
            ..Limits::default()
        },
        ..config(2)
    };
    let err = run(WORDS.as_bytes(), config).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { what: "solution buffer", capacity: 1 }));
}

#[test]
fn empty_input_has_no_solutions() {
    let outcome = run(b"", config(4)).unwrap();
    assert!(outcome.solutions.is_empty());
    assert!(outcome.corpus.words().is_empty());
}
