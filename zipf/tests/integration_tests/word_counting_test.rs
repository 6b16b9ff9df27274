// tests/integration_tests/word_counting_test.rs
use super::common::{GETTYSBURG, setup_input};
use anyhow::Result;
use std::collections::BTreeSet;
use zipf::{FrequencyGroups, count_words_in_file};

#[test]
fn test_word_counting() -> Result<()> {
    let (_temp_dir, input, _out) = setup_input("gettysburg.txt", GETTYSBURG)?;

    let word_count = count_words_in_file(&input)?;

    assert_eq!(word_count.total(), 65, "Every token should be counted");
    assert_eq!(word_count.get("nation"), Some(3));
    assert_eq!(word_count.get("that"), Some(3));
    assert_eq!(word_count.get("we"), Some(2), "Case should be folded");
    assert_eq!(word_count.get("battle"), Some(1), "Hyphen should separate words");
    assert_eq!(word_count.get("field"), Some(1));

    let sum: u64 = word_count.iter().map(|(_, count)| count).sum();
    assert_eq!(word_count.total(), sum, "Total should equal the sum of counts");

    Ok(())
}

#[test]
fn test_groups_partition_words() -> Result<()> {
    let (_temp_dir, input, _out) = setup_input("gettysburg.txt", GETTYSBURG)?;

    let word_count = count_words_in_file(&input)?;
    let groups = FrequencyGroups::from_word_count(&word_count);

    let mut seen = BTreeSet::new();
    for (_, words) in groups.iter() {
        for word in words {
            assert!(seen.insert(word.as_str()), "{word} is in more than one group");
        }
    }
    assert_eq!(seen.len(), word_count.distinct());
    assert_eq!(groups.word_total(), word_count.distinct());

    Ok(())
}

#[test]
fn test_contractions() -> Result<()> {
    let (_temp_dir, input, _out) =
        setup_input("quotes.txt", "'Tis true, isn't it? The dogs' bone. ISN'T it 'so'?\n")?;

    let word_count = count_words_in_file(&input)?;

    assert_eq!(word_count.get("tis"), Some(1));
    assert_eq!(word_count.get("isn't"), Some(2));
    assert_eq!(word_count.get("dogs"), Some(1));
    assert_eq!(word_count.get("so"), Some(1));
    assert_eq!(word_count.get("it"), Some(2));
    assert_eq!(word_count.total(), 10);

    Ok(())
}
