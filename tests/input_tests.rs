//! Tests for comma-separated input parsing, the mode catalogue and configuration.

use std::collections::HashMap;

use recursion_explorer::{
    ExplorerConfig, ExplorerError, Mode, explanation_page, parse_elements, parse_integers
};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_integers() {
    assert_eq!(parse_integers("5, 3, 8, 1").unwrap(), vec![5, 3, 8, 1]);
    assert_eq!(parse_integers("-4,0,12").unwrap(), vec![-4, 0, 12]);
    assert_eq!(parse_integers(" 7 ").unwrap(), vec![7]);
}

#[test]
fn test_parse_integers_reports_bad_token() {
    match parse_integers("5, x, 1") {
        Err(ExplorerError::Parse { token, position }) => {
            assert_eq!(token, "x");
            assert_eq!(position, 1);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_empty_input_and_tokens() {
    assert!(matches!(parse_integers(""), Err(ExplorerError::EmptyInput)));
    assert!(matches!(parse_integers("   "), Err(ExplorerError::EmptyInput)));
    assert!(matches!(parse_integers("1,,2"), Err(ExplorerError::Parse { position: 1, .. })));
    assert!(matches!(parse_elements("a, "), Err(ExplorerError::Parse { position: 1, .. })));
}

#[test]
fn test_parse_elements_trims() {
    assert_eq!(parse_elements("a, b, c").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(parse_elements("red fish,blue fish").unwrap(), vec!["red fish", "blue fish"]);
}

// ============================================================================
// Explanation page
// ============================================================================

#[test]
fn test_mode_lookup() {
    assert_eq!(Mode::from_name("tree"), Some(Mode::TreeFractal));
    assert_eq!(Mode::from_name("/sort"), Some(Mode::MergeSort));
    assert_eq!(Mode::from_name("Prime Check"), Some(Mode::PrimeCheck));
    assert_eq!(Mode::from_name("quicksort"), None);
}

#[test]
fn test_explanation_page_lists_every_mode() {
    let page = explanation_page();
    for mode in Mode::ALL {
        assert!(page.contains(mode.title()), "missing {}", mode.title());
        assert!(page.contains(mode.example()));
    }
}

#[test]
fn test_explanation_shows_code_listing() {
    for mode in Mode::ALL {
        let text = mode.explanation();
        let first = mode.listing().lines().next().unwrap();
        assert!(text.contains(first), "{} has no listing", mode.title());
    }
    assert!(Mode::MergeSort.explanation().contains("merge_sort(items[..mid])"));
}

#[test]
fn test_fibonacci_entry_runs_tree_recursion() {
    let text = Mode::FibonacciSpiral.explanation();
    assert!(text.contains("fibonacci_tree(n - 1) + fibonacci_tree(n - 2)"));
    assert!(text.contains("terms:   0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55"));
}

#[test]
fn test_explanation_page_ends_with_further_reading() {
    let page = explanation_page();
    let footer = page.find("Further reading").expect("footer missing");
    assert!(footer > page.find(Mode::Permutations.title()).unwrap());
    assert!(page.contains("https://realpython.com/python-recursion/"));
    assert!(page.contains("https://en.wikipedia.org/wiki/Fibonacci_number"));
    assert!(page.contains("https://www.geeksforgeeks.org/merge-sort/"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_defaults() {
    let cfg = ExplorerConfig::default();
    assert_eq!(cfg.guess_range(), 1..=100);
    assert_eq!(cfg.max_tree_depth, 10);
    assert_eq!(cfg.max_spiral_terms, 15);
    assert_eq!(cfg.countdown_secs, 5);
}

#[test]
fn test_config_overrides() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("EXPLORER_COUNTDOWN_SECS", "0"),
        ("EXPLORER_MAX_TREE_DEPTH", "12"),
        ("EXPLORER_OPEN_WINDOW", "false"),
        ("EXPLORER_SESSION", "/tmp/explorer.bin"),
        ("EXPLORER_MAX_PRIME", "not a number"),
    ]);
    let cfg = ExplorerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(cfg.countdown_secs, 0);
    assert_eq!(cfg.max_tree_depth, 12);
    assert!(!cfg.open_window);
    assert_eq!(cfg.session_path, "/tmp/explorer.bin");
    // unparsable values keep the default
    assert_eq!(cfg.max_prime, ExplorerConfig::default().max_prime);
}
