use balanced_collections::avl_tree::AvlSet;
use rand::Rng;

#[test]
fn test_random_inserts_match_sorted_reference() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    let mut expected = Vec::new();

    for _ in 0..10_000 {
        let value = rng.gen::<u16>();
        if set.insert(value) {
            expected.push(value);
        }
    }

    expected.sort();
    expected.dedup();

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.in_order(), expected.iter().collect::<Vec<_>>());
}

#[test]
fn test_random_removals_match_sorted_reference() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    let mut expected = Vec::new();

    for _ in 0..10_000 {
        let value = rng.gen::<u16>();
        if set.insert(value) {
            expected.push(value);
        }
    }

    expected.sort();
    expected.dedup();

    // Remove every other value and check the survivors are still yielded in order.
    let mut remaining = Vec::new();
    for (i, value) in expected.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(set.remove(value), Some(*value));
        } else {
            remaining.push(*value);
        }
    }

    assert_eq!(set.len(), remaining.len());
    assert_eq!(set.in_order(), remaining.iter().collect::<Vec<_>>());

    for value in &remaining {
        assert_eq!(set.remove(value), Some(*value));
    }
    assert!(set.is_empty());
}

#[test]
fn test_interleaved_operations_match_reference() {
    let mut rng = rand::thread_rng();
    let mut set = AvlSet::new();
    let mut model = std::collections::BTreeSet::new();

    for _ in 0..10_000 {
        let value = rng.gen_range(0u32, 256);
        if rng.gen::<bool>() {
            assert_eq!(set.insert(value), model.insert(value));
        } else {
            assert_eq!(set.remove(&value), model.take(&value));
        }
        assert_eq!(set.len(), model.len());
    }

    assert_eq!(set.in_order(), model.iter().collect::<Vec<_>>());
}
