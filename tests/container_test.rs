use linked_container::{Container, ContainerError};

fn letters(n: usize) -> Container<char> {
    ('a'..='z').take(n).collect()
}

#[test]
fn test_size_follows_appends() {
    let mut container = Container::new();

    for n in 0..50 {
        assert_eq!(container.size(), n);
        assert_eq!(container.is_empty(), n == 0);
        container.add(n);
    }
    assert_eq!(container.len(), 50);
}

#[test]
fn test_get_keeps_insertion_order() {
    let container = letters(10);

    for (i, expected) in ('a'..='j').enumerate() {
        assert_eq!(container.get(i), Ok(&expected));
    }
}

#[test]
fn test_out_of_range_everywhere() {
    let mut empty: Container<char> = Container::new();
    assert_eq!(
        empty.remove(0),
        Err(ContainerError::IndexOutOfRange { index: 0, size: 0 })
    );

    let mut container = letters(4);
    for index in [4, 5, 100, usize::MAX] {
        assert_eq!(
            container.get(index),
            Err(ContainerError::IndexOutOfRange { index, size: 4 })
        );
        assert_eq!(
            container.remove(index),
            Err(ContainerError::IndexOutOfRange { index, size: 4 })
        );
    }
    assert_eq!(container, letters(4));
}

#[test]
fn test_remove_shifts_later_elements() {
    for i in 0..6 {
        let mut container = letters(6);
        let before: Vec<char> = container.iter().copied().collect();
        let expected = *container.get(i).unwrap();

        assert_eq!(container.remove(i), Ok(expected));
        assert_eq!(container.size(), 5);

        for j in 0..5 {
            let original = if j < i { j } else { j + 1 };
            assert_eq!(container.get(j), Ok(&before[original]));
        }
    }
}

#[test]
fn test_drain_from_front_and_back() {
    let mut container = letters(5);

    assert_eq!(container.remove(0), Ok('a'));
    assert_eq!(container.remove(3), Ok('e'));
    assert_eq!(container.remove(1), Ok('c'));
    assert_eq!(container.to_string(), "[b, d]");

    assert_eq!(container.remove(1), Ok('d'));
    assert_eq!(container.remove(0), Ok('b'));
    assert!(container.is_empty());

    container.add('z');
    assert_eq!(container.to_string(), "[z]");
}

#[test]
fn test_error_message() {
    let container = letters(1);
    let err = container.get(1).unwrap_err();

    assert_eq!(err.to_string(), "Index: 1, Size: 1");
}

#[test]
fn test_contains_none_symmetrically() {
    let mut container: Container<Option<String>> = Container::new();
    assert!(!container.contains(&None));

    container.add(Some("x".to_string()));
    assert!(!container.contains(&None));
    assert!(container.contains(&Some("x".to_string())));

    container.add(None);
    assert!(container.contains(&None));
    assert_eq!(container.display_nullable().to_string(), "[x, None]");
}

#[test]
fn test_clear_resets() {
    let mut container = letters(3);
    container.clear();

    assert!(container.is_empty());
    assert_eq!(container.size(), 0);
    assert_eq!(container.to_string(), "[]");
    assert_eq!(container, Container::default());
}

#[test]
fn test_render() {
    let container: Container<&str> = ["first", "second", "third"].into_iter().collect();
    assert_eq!(container.to_string(), "[first, second, third]");

    let mut numbers = Container::new();
    numbers.extend([10, 20, 30]);
    assert_eq!(numbers.to_string(), "[10, 20, 30]");
    assert_eq!(numbers.get(0).unwrap() + numbers.get(2).unwrap(), 40);
}

#[test]
fn test_clone_is_independent() {
    let original = letters(3);
    let mut copy = original.clone();

    copy.remove(0).unwrap();
    assert_eq!(original.to_string(), "[a, b, c]");
    assert_eq!(copy.to_string(), "[b, c]");
    assert_ne!(original, copy);
}
