//! Mnemonic validation, checksum-word recovery, and seed generation
//!
//! A BIP39 mnemonic of N words encodes N×11 − N/3 bits of entropy plus a
//! checksum of N/3 bits embedded in the final word. Given all but the last
//! word, the final word is recoverable by search: of the 2048 wordlist
//! candidates, only those whose checksum bits match the SHA-256-derived
//! checksum of the entropy bits produce a valid mnemonic.

use crate::{Error, Result};
use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

/// Check whether a single word belongs to the canonical English wordlist.
///
/// The wordlist is sorted, so membership is a binary search.
pub fn is_wordlist_word(word: &str) -> bool {
    Language::English
        .word_list()
        .binary_search_by(|candidate| str::cmp(candidate, word))
        .is_ok()
}

/// Return the words of `phrase` that are not in the canonical wordlist.
///
/// Input order is preserved and duplicates are each checked independently.
/// An empty result means every word is individually valid; checksum
/// validity is a separate question.
pub fn invalid_words(phrase: &str) -> Vec<&str> {
    phrase
        .split_whitespace()
        .filter(|word| !is_wordlist_word(word))
        .collect()
}

/// Validate every word of `phrase` against the wordlist.
///
/// Errors with [`Error::InvalidMnemonicWord`] naming the offending words.
pub fn validate_words(phrase: &str) -> Result<()> {
    let invalid = invalid_words(phrase);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidMnemonicWord(invalid.join(", ")))
    }
}

/// Whether appending `candidate` to `first_words` yields a checksum-valid
/// mnemonic.
fn completes_mnemonic(first_words: &str, candidate: &str) -> bool {
    let phrase = format!("{first_words} {candidate}");
    Mnemonic::parse_in_normalized(Language::English, &phrase).is_ok()
}

/// Find every wordlist word that completes `first_words` to a valid
/// mnemonic.
///
/// Candidates are returned in wordlist order. A correctly sized prefix of
/// valid words always admits at least one completion, so an empty search
/// result means the first words themselves are not a valid truncated
/// mnemonic (wrong word count or corrupted word) and is reported as
/// [`Error::NoValidChecksum`].
pub fn find_checksum_words(first_words: &str) -> Result<Vec<&'static str>> {
    let first_words = first_words.trim();

    let candidates: Vec<&'static str> = Language::English
        .word_list()
        .iter()
        .copied()
        .filter(|word| completes_mnemonic(first_words, word))
        .collect();

    if candidates.is_empty() {
        return Err(Error::NoValidChecksum(
            "first words are not a valid mnemonic prefix".to_string(),
        ));
    }

    tracing::debug!("found {} valid checksum word(s)", candidates.len());
    Ok(candidates)
}

/// Stretch a full mnemonic into its 64-byte BIP39 seed.
///
/// The seed is returned in a zeroizing buffer so the bytes are scrubbed
/// when the caller drops it.
pub fn to_seed(mnemonic: &str, passphrase: &str) -> Result<Zeroizing<[u8; 64]>> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, mnemonic)
        .map_err(|e| Error::InvalidMnemonic(e.to_string()))?;
    Ok(Zeroizing::new(mnemonic.to_seed(passphrase)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ENTROPY_23: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
    const ZERO_ENTROPY_11: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";

    #[test]
    fn test_wordlist_membership() {
        assert!(is_wordlist_word("abandon"));
        assert!(is_wordlist_word("zoo"));
        assert!(!is_wordlist_word("zebra"));
        assert!(!is_wordlist_word(""));
    }

    #[test]
    fn test_invalid_words_preserves_order_and_duplicates() {
        let invalid = invalid_words("abandon zebra ability zebra qqq");
        assert_eq!(invalid, vec!["zebra", "zebra", "qqq"]);
    }

    #[test]
    fn test_validate_words() {
        assert!(validate_words("abandon ability able").is_ok());
        let err = validate_words("abandon zebra").unwrap_err();
        assert!(matches!(err, Error::InvalidMnemonicWord(ref words) if words.as_str() == "zebra"));
    }

    #[test]
    fn test_zero_entropy_24_word_family() {
        let words = find_checksum_words(ZERO_ENTROPY_23).unwrap();
        // 3 free entropy bits in the final word: exactly 8 completions
        assert_eq!(words.len(), 8);
        assert!(words.contains(&"art"));
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "candidates must follow wordlist order");
        }
    }

    #[test]
    fn test_zero_entropy_12_word_family() {
        let words = find_checksum_words(ZERO_ENTROPY_11).unwrap();
        // 4 free entropy bits in the final word: exactly 16 completions
        assert_eq!(words.len(), 16);
        assert!(words.contains(&"about"));
    }

    #[test]
    fn test_returned_words_validate_and_others_do_not() {
        let words = find_checksum_words(ZERO_ENTROPY_11).unwrap();
        for word in &words {
            assert!(completes_mnemonic(ZERO_ENTROPY_11, word));
        }
        assert!(!words.contains(&"abandon"));
        assert!(!completes_mnemonic(ZERO_ENTROPY_11, "abandon"));
    }

    #[test]
    fn test_wrong_word_count_has_no_checksum_words() {
        // 5 valid words cannot be a prefix of any valid mnemonic length
        let err = find_checksum_words("abandon abandon abandon abandon abandon").unwrap_err();
        assert!(matches!(err, Error::NoValidChecksum(_)));
    }

    #[test]
    fn test_to_seed() {
        let mnemonic = format!("{ZERO_ENTROPY_11} about");
        let seed = to_seed(&mnemonic, "").unwrap();
        assert_eq!(seed.len(), 64);

        let with_passphrase = to_seed(&mnemonic, "TREZOR").unwrap();
        assert_ne!(*seed, *with_passphrase);

        assert!(matches!(
            to_seed("not a mnemonic", ""),
            Err(Error::InvalidMnemonic(_))
        ));
    }
}
