use avl_prefix_index::{AlphabetIndex, Error, Input, PrefixNode, WordEntry};

fn fruit_index() -> AlphabetIndex {
    let mut index = AlphabetIndex::new();
    index.insert_word("apple", "A fruit").unwrap();
    index.insert_word("apricot", "A fruit").unwrap();
    index.insert_word("banana", "A tropical fruit").unwrap();
    index.insert_word("berry", "Small fruit").unwrap();
    index
}

#[test]
fn test_fruit_lookups() {
    let index = fruit_index();

    assert_eq!(index.find_by_prefix("app").unwrap(), vec!["apple"]);

    let a_words = index.find_by_prefix("a").unwrap();
    assert!(a_words.contains(&"apple".to_string()));
    assert!(a_words.contains(&"apricot".to_string()));
    assert_eq!(a_words.len(), 2);

    // "berry" shares the 'b' node but does not start with "ba"
    assert_eq!(index.find_by_prefix("ba").unwrap(), vec!["banana"]);

    let b_words = index.find_by_prefix("b").unwrap();
    assert_eq!(b_words, vec!["banana", "berry"]);

    assert!(index.find_by_prefix("c").unwrap().is_empty());
}

#[test]
fn test_meanings_are_kept() {
    let index = fruit_index();
    let entries = index.find_entries_by_prefix("be").unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word(), "berry");
    assert_eq!(entries[0].meaning(), "Small fruit");
}

#[test]
fn test_duplicate_words_accumulate() {
    let mut index = AlphabetIndex::new();
    index.insert_word("kiwi", "A fruit").unwrap();
    index.insert_word("kiwi", "A bird").unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.find_by_prefix("kiwi").unwrap(), vec!["kiwi", "kiwi"]);

    let meanings: Vec<&str> = index
        .find_entries_by_prefix("kiwi")
        .unwrap()
        .into_iter()
        .map(WordEntry::meaning)
        .collect();
    assert_eq!(meanings, vec!["A fruit", "A bird"]);

    let tree = index.bucket('k').unwrap();
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn test_empty_input_leaves_index_untouched() {
    let mut index = fruit_index();
    let before = index.clone();

    assert_eq!(index.insert_word("", "m"), Err(Error::EmptyInput(Input::Word)));
    assert_eq!(index.find_by_prefix(""), Err(Error::EmptyInput(Input::Prefix)));
    assert_eq!(index, before);

    // Callers that only want words treat the error as "no results"
    assert!(index.find_by_prefix("").unwrap_or_default().is_empty());
}

#[test]
fn test_buckets_are_independent() {
    let mut index = AlphabetIndex::new();
    for word in &["zebra", "ant", "zoo", "axe", "mole"] {
        index.insert_word(*word, "").unwrap();
    }

    let letters: Vec<char> = index.buckets().map(|(letter, _)| *letter).collect();
    assert_eq!(letters, vec!['a', 'm', 'z']);

    for (letter, tree) in index.buckets() {
        for node in tree {
            assert!(node.prefix().starts_with(*letter));
            for entry in node.entries() {
                assert!(entry.word().starts_with(*letter));
            }
        }
    }
}

#[test]
fn test_case_sensitive_buckets() {
    let mut index = AlphabetIndex::new();
    index.insert_word("Apple", "A company").unwrap();
    index.insert_word("apple", "A fruit").unwrap();

    assert_eq!(index.bucket_count(), 2);
    assert_eq!(index.find_by_prefix("A").unwrap(), vec!["Apple"]);
    assert_eq!(index.find_by_prefix("a").unwrap(), vec!["apple"]);
}

#[test]
fn test_generated_words_single_bucket() {
    let mut index = AlphabetIndex::new();
    for i in 0..10_000 {
        let word = format!("word{}", i);
        let meaning = format!("Definition of {}", word);
        index.insert_word(word, meaning).unwrap();
    }

    assert_eq!(index.bucket_count(), 1);
    assert_eq!(index.len(), 10_000);
    assert_eq!(index.find_by_prefix("word").unwrap().len(), 10_000);
    // word1, word10..word19, word100..word199, word1000..word1999
    assert_eq!(index.find_by_prefix("word1").unwrap().len(), 1_111);
    assert_eq!(index.find_by_prefix("word9999").unwrap(), vec!["word9999"]);
}

#[test]
fn test_display_lists_every_bucket() {
    let index = fruit_index();
    let rendered = index.to_string();

    assert!(rendered.contains("Tree for letter a:\n"));
    assert!(rendered.contains("Tree for letter b:\n"));
    assert!(rendered.contains("Prefix: a | Words: apple(A fruit) apricot(A fruit) \n"));
    assert!(rendered.contains("Prefix: b | Words: banana(A tropical fruit) berry(Small fruit) \n"));
}

#[test]
fn test_node_accessors() {
    let index = fruit_index();
    let root: &PrefixNode = index.bucket('b').unwrap().root().unwrap();

    assert_eq!(root.prefix(), "b");
    assert_eq!(root.height(), 1);
    assert_eq!(root.balance_factor(), 0);
    assert!(root.left().is_none());
    assert!(root.right().is_none());
}
