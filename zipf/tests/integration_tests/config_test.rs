// tests/integration_tests/config_test.rs
use super::common::{create_config_file, setup_input};
use anyhow::Result;
use zipf::{ZipfError, load_config};

#[test]
fn test_config_next_to_input() -> Result<()> {
    let (temp_dir, input, _out) = setup_input("book.txt", "text")?;
    create_config_file(temp_dir.path(), &["batch_size = 4", "column_width = 12"])?;

    let input_dir = input.parent().unwrap_or(temp_dir.path());
    let config = load_config(None, input_dir)?;

    assert_eq!(config.batch_size, 4);
    assert_eq!(config.column_width, 12);
    assert_eq!(config.word_extension, "wrd");
    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let (temp_dir, _input, _out) = setup_input("book.txt", "text")?;
    create_config_file(temp_dir.path(), &["column_width = 0"])?;

    let err = load_config(None, temp_dir.path()).expect_err("Zero width should be rejected");
    assert!(matches!(err, ZipfError::InvalidConfig(_)));
    Ok(())
}
