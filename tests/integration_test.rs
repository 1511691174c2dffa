use lists::{Error, List};

fn list_of(values: &[i32]) -> List<i32> {
    let mut list = List::new();
    for &v in values {
        list.push_back(v);
    }
    list
}

#[test]
fn test_build_with_push_back() {
    let list = list_of(&[1, 2, 3]);

    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.length(), 3);
}

#[test]
fn test_insert_shifts_right() {
    let mut list = list_of(&[1, 2, 3]);

    list.insert_at(9, 1).unwrap();
    assert_eq!(list.to_string(), "[1, 9, 2, 3]");
    assert_eq!(list.get(1), Ok(9));
}

#[test]
fn test_remove_shifts_left() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove_at(1), Ok(2));
    assert_eq!(list.to_string(), "[1, 3]");
    assert_eq!(list.length(), 2);
}

#[test]
fn test_pop_front_on_empty_list() {
    let mut list: List<i32> = List::new();

    assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
    assert!(list.empty());
}

#[test]
fn test_out_of_range_positions() {
    let mut list = list_of(&[1, 2, 3]);

    assert!(matches!(list.get(5), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(
        list.insert_at(9, 4),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert_eq!(list.insert_at(4, 3), Ok(()));
    assert_eq!(list.to_string(), "[1, 2, 3, 4]");
}

#[test]
fn test_insert_then_remove_every_position() {
    let base = [10, 20, 30, 40];

    for i in 0..=base.len() {
        let mut list = list_of(&base);
        list.insert_at(99, i).unwrap();
        assert_eq!(list.get(i), Ok(99));
        for (j, &v) in base.iter().enumerate() {
            let expected = if j < i { j } else { j + 1 };
            assert_eq!(list.get(expected), Ok(v));
        }

        assert_eq!(list.remove_at(i), Ok(99));
        assert_eq!(list.to_string(), "[10, 20, 30, 40]");
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::EmptyContainer.to_string(),
        "operation requires a non-empty list"
    );
    assert_eq!(
        Error::IndexOutOfRange { index: 5, size: 3 }.to_string(),
        "index 5 out of range for list of length 3"
    );
}

#[test]
fn test_clear_then_reuse() {
    let mut list = list_of(&[1, 2, 3]);

    list.clear();
    assert!(list.empty());
    assert_eq!(list.length(), 0);

    list.push_back(42);
    assert_eq!(list.front(), Ok(42));
    assert_eq!(list.last(), Ok(42));
}
