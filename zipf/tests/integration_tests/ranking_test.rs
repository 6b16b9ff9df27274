// tests/integration_tests/ranking_test.rs
use super::common::{GETTYSBURG, setup_input};
use anyhow::Result;
use zipf::{FrequencyGroups, Rank, WordCount, count_words_in_file, rank_frequencies};

#[test]
fn test_ranking_with_ties() -> Result<()> {
    let (_temp_dir, input, _out) = setup_input("gettysburg.txt", GETTYSBURG)?;

    let word_count = count_words_in_file(&input)?;
    let ranks = rank_frequencies(&FrequencyGroups::from_word_count(&word_count));

    let rows: Vec<(String, u64, String)> = ranks
        .iter()
        .map(|entry| (entry.rank.to_string(), entry.frequency, entry.product.to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (String::from("3.0"), 3, String::from("9.0")),
            (String::from("9.5"), 2, String::from("19.0")),
            (String::from("30.5"), 1, String::from("30.5")),
        ],
        "Five-way, eight-way and 34-way ties should take the middle rank"
    );

    Ok(())
}

#[test]
fn test_tie_for_most_frequent() {
    let mut words = vec!["a"; 5];
    words.extend(vec!["b"; 5]);
    words.extend(["c", "c", "c", "d"]);
    let word_count: WordCount = words.into_iter().collect();

    let ranks = rank_frequencies(&FrequencyGroups::from_word_count(&word_count));

    assert_eq!(ranks[0].frequency, 5);
    assert_eq!(ranks[0].rank, Rank::from_halves(3), "Two-way tie for first is 1.5");
    assert_eq!(ranks[1].rank, Rank::whole(3));
    assert_eq!(ranks[2].rank, Rank::whole(4));
}

#[test]
fn test_single_most_frequent_is_rank_one() {
    let word_count: WordCount = ["x", "x", "x", "x", "y", "y", "z"].into_iter().collect();

    let ranks = rank_frequencies(&FrequencyGroups::from_word_count(&word_count));

    assert_eq!(ranks[0].rank, Rank::whole(1));
    assert!(ranks.windows(2).all(|pair| pair[0].rank <= pair[1].rank));
    assert!(ranks.windows(2).all(|pair| pair[0].frequency > pair[1].frequency));
}
