//! Walkthrough of the alphabet index
use avl_prefix_index::AlphabetIndex;
use tracing_subscriber::EnvFilter;

fn main() -> avl_prefix_index::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut index = AlphabetIndex::new();
    index.insert_word("apple", "A fruit")?;
    index.insert_word("apricot", "A fruit")?;
    index.insert_word("banana", "A tropical fruit")?;
    index.insert_word("berry", "Small fruit")?;

    print!("{}", index);

    for prefix in &["app", "ba"] {
        println!("Words found for prefix '{}':", prefix);
        for word in index.find_by_prefix(prefix)? {
            println!("{}", word);
        }
    }

    // Empty input is reported, not fatal
    if let Err(err) = index.find_by_prefix("") {
        println!("Search rejected: {}", err);
    }

    Ok(())
}

#[test]
fn test_walkthrough_lookups() {
    let mut index = AlphabetIndex::new();
    index.insert_word("apple", "A fruit").unwrap();
    index.insert_word("apricot", "A fruit").unwrap();
    index.insert_word("banana", "A tropical fruit").unwrap();
    index.insert_word("berry", "Small fruit").unwrap();

    assert_eq!(index.find_by_prefix("app").unwrap(), vec!["apple"]);
    assert_eq!(index.find_by_prefix("ba").unwrap(), vec!["banana"]);
}
