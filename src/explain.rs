use std::fmt::Write;

use crate::math::fibonacci_tree;

/// Terms the Fibonacci entry evaluates with the tree recursion.
const LISTED_FIB_TERMS: u32 = 10;

/// Interactive modes, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Factorial,
    Power,
    PrimeCheck,
    GuessingGame,
    TreeFractal,
    RecursivePuzzle,
    FibonacciSpiral,
    MergeSort,
    Permutations,
}

impl Mode {
    pub const ALL: [Mode; 9] = [
        Mode::Factorial,
        Mode::Power,
        Mode::PrimeCheck,
        Mode::GuessingGame,
        Mode::TreeFractal,
        Mode::RecursivePuzzle,
        Mode::FibonacciSpiral,
        Mode::MergeSort,
        Mode::Permutations,
    ];

    /// Accepts the command name ("factorial", "tree", ...) or the title, case-insensitively.
    pub fn from_name(name: &str) -> Option<Mode> {
        let name = name.trim().trim_start_matches('/').to_lowercase();
        Mode::ALL.into_iter()
            .find(|m| m.command() == name || m.title().to_lowercase() == name)
    }

    pub fn command(&self) -> &'static str {
        match self {
            Mode::Factorial => "factorial",
            Mode::Power => "power",
            Mode::PrimeCheck => "prime",
            Mode::GuessingGame => "guess",
            Mode::TreeFractal => "tree",
            Mode::RecursivePuzzle => "puzzle",
            Mode::FibonacciSpiral => "spiral",
            Mode::MergeSort => "sort",
            Mode::Permutations => "perms",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Factorial => "Factorial",
            Mode::Power => "Power",
            Mode::PrimeCheck => "Prime Check",
            Mode::GuessingGame => "Guessing Game",
            Mode::TreeFractal => "Tree Fractal",
            Mode::RecursivePuzzle => "Recursive Puzzle Challenge",
            Mode::FibonacciSpiral => "Fibonacci Visualization",
            Mode::MergeSort => "Merge Sort",
            Mode::Permutations => "Permutations",
        }
    }

    pub fn logic(&self) -> &'static str {
        match self {
            Mode::Factorial => "n! = n * (n-1)!, with 0! = 1! = 1",
            Mode::Power => "base^exp = base * base^(exp-1), with base^0 = 1",
            Mode::PrimeCheck => "try every divisor from n-1 down to 2; prime if none divides n",
            Mode::GuessingGame => "compare the guess against a hidden number from 1 to 100",
            Mode::TreeFractal => "each branch splits into two shorter branches, 20 degrees apart",
            Mode::RecursivePuzzle => "each step reduces the level by one until level 1 is reached",
            Mode::FibonacciSpiral => "each term is the sum of the two before it; terms become square sides",
            Mode::MergeSort => "split in half, sort each half, merge the sorted halves",
            Mode::Permutations => "fix each element first, then permute the rest",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            Mode::Factorial => "/factorial 5  ->  5! = 5 * 4 * 3 * 2 * 1 = 120",
            Mode::Power => "/power 2 3  ->  2^3 = 2 * 2 * 2 = 8",
            Mode::PrimeCheck => "/prime 7 is prime, /prime 9 is not",
            Mode::GuessingGame => "hidden 42, /guess 50  ->  too high",
            Mode::TreeFractal => "/tree 5 draws 31 branches",
            Mode::RecursivePuzzle => "/puzzle 5 asks for level 4, then 3, 2 and 1",
            Mode::FibonacciSpiral => "/spiral 5 lays out squares of side 1, 1, 2, 3, 5",
            Mode::MergeSort => "/sort 5, 3, 8, 1  ->  [1, 3, 5, 8]",
            Mode::Permutations => "/perms a, b, c  ->  6 permutations",
        }
    }

    /// The recursion behind the mode, as implemented in this crate.
    pub fn listing(&self) -> &'static str {
        match self {
            Mode::Factorial => "\
fn factorial(n) {
    if n == 0 || n == 1 { return 1 }
    n * factorial(n - 1)
}",
            Mode::Power => "\
fn power(base, exp) {
    if exp == 0 { return 1 }
    base * power(base, exp - 1)
}",
            Mode::PrimeCheck => "\
fn is_prime_from(n, divisor) {
    if n < 2 { return false }
    if divisor <= 1 { return true }
    if n % divisor == 0 { return false }
    is_prime_from(n, divisor - 1)
}",
            Mode::GuessingGame => "\
fn guessing_game(target, guess) {
    if guess == target { Correct }
    else if guess > target { TooHigh }
    else { TooLow }
}",
            Mode::TreeFractal => "\
fn grow_branch(from, angle, depth) {
    if depth == 0 { return }
    let to = from.towards(angle, depth * 5)
    line(from, to, thickness = depth / 2)
    grow_branch(to, angle - 20, depth - 1)
    grow_branch(to, angle + 20, depth - 1)
}",
            Mode::RecursivePuzzle => "\
fn recursive_puzzle(n) {
    if n == 1 { return Solved }
    Next(n - 1)
}",
            Mode::FibonacciSpiral => "\
fn fibonacci_tree(n) {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_tree(n - 1) + fibonacci_tree(n - 2),
    }
}",
            Mode::MergeSort => "\
fn merge_sort(items) {
    if items.len() <= 1 { return }
    let mid = items.len() / 2
    merge_sort(items[..mid])
    merge_sort(items[mid..])
    merge_halves(items, mid)   // left wins ties
}",
            Mode::Permutations => "\
fn permutations(items) {
    if items.len() == 1 { return [items] }
    for i in 0..items.len() {
        for tail in permutations(items without i) {
            yield [items[i]] + tail
        }
    }
}",
        }
    }

    pub fn explanation(&self) -> String {
        let mut text = format!(
            "{}\n  logic:   {}\n  example: {}\n",
            self.title(),
            self.logic(),
            self.example()
        );
        if *self == Mode::FibonacciSpiral {
            let terms: Vec<String> = (0..=LISTED_FIB_TERMS)
                .map(|n| fibonacci_tree(n).to_string())
                .collect();
            let _ = writeln!(text, "  terms:   {}", terms.join(", "));
        }
        for line in self.listing().lines() {
            let _ = writeln!(text, "    {}", line);
        }
        text
    }
}

pub const FURTHER_READING: [(&str, &str); 3] = [
    ("Recursion in Python (Real Python)", "https://realpython.com/python-recursion/"),
    ("Fibonacci Sequence (Wikipedia)", "https://en.wikipedia.org/wiki/Fibonacci_number"),
    ("Merge Sort (GeeksforGeeks)", "https://www.geeksforgeeks.org/merge-sort/"),
];

pub fn explanation_page() -> String {
    let mut page = String::from("Recursion Explorer\n\n");
    for mode in Mode::ALL {
        // writing into a String cannot fail
        let _ = writeln!(page, "{}", mode.explanation());
    }
    page.push_str("Further reading\n");
    for (title, url) in FURTHER_READING {
        let _ = writeln!(page, "  {}: {}", title, url);
    }
    page
}
