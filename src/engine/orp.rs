/// Optimal Recognition Point (ORP) index calculation.
///
/// The ORP is the character a reader should fixate on for fastest word
/// recognition; it sits slightly left of center and drifts rightward as
/// words get longer. The index is a step function of the raw word length
/// (punctuation included):
/// - 0-1 chars  → index 0
/// - 2-5 chars  → index 1
/// - 6-9 chars  → index 2
/// - 10-13 chars → index 3
/// - 14+ chars  → index 4
pub fn orp_index(word: &str) -> usize {
    match word.chars().count() {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}
