use crate::constants::{NUM_WORDS, REQUEST_CONFIRMATIONS};

/// Splits a revealed 32 byte Switchboard value into `NUM_WORDS`
/// little-endian words.
pub fn random_words(value: &[u8; 32]) -> Vec<u64> {
    value
        .chunks_exact(8)
        .take(NUM_WORDS as usize)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect()
}

/// Position of the winning player: first word modulo the player count.
/// `None` when there are no words or no players.
pub fn winner_index(words: &[u64], players: usize) -> Option<usize> {
    let word = *words.first()?;
    if players == 0 {
        return None;
    }
    Some((word % players as u64) as usize)
}

/// Whether enough slots have passed since the request for it to be fulfilled.
pub fn confirmations_met(request_slot: u64, current_slot: u64) -> bool {
    current_slot.saturating_sub(request_slot) >= u64::from(REQUEST_CONFIRMATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_words_takes_leading_bytes() {
        let mut value = [0xAAu8; 32];
        value[..8].copy_from_slice(&17u64.to_le_bytes());

        let words = random_words(&value);
        assert_eq!(words.len(), NUM_WORDS as usize);
        assert_eq!(words[0], 17);
    }

    #[test]
    fn test_random_words_deterministic() {
        let value = [99u8; 32];
        assert_eq!(random_words(&value), random_words(&value));
    }

    #[test]
    fn test_winner_index_modulo() {
        assert_eq!(winner_index(&[17], 4), Some(1));
        assert_eq!(winner_index(&[0], 3), Some(0));
        assert_eq!(winner_index(&[u64::MAX], 10), Some(5));
    }

    #[test]
    fn test_winner_index_empty_inputs() {
        assert_eq!(winner_index(&[], 4), None);
        assert_eq!(winner_index(&[17], 0), None);
    }

    #[test]
    fn test_confirmations() {
        assert!(!confirmations_met(100, 100));
        assert!(!confirmations_met(100, 102));
        assert!(confirmations_met(100, 103));
        // slot behind the request never counts
        assert!(!confirmations_met(100, 50));
    }
}
