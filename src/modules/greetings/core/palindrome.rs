/// True when `text` reads the same forwards and backwards.
///
/// Compares Unicode scalar values pairwise from both ends, stopping at the midpoint.
/// The empty string and a single character are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    let mut forward = text.chars();
    let mut backward = text.chars().rev();
    let half = text.chars().count() / 2;
    (0..half).all(|_| forward.next() == backward.next())
}
