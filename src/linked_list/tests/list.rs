extern crate std;

use core::cell::RefCell;

use alloc::{
    format,
    string::{String, ToString},
};
use std::{vec, vec::Vec};

use crate::linked_list::{IndexOutOfRangeError, LinkedList};

/// Checks length, every indexed read, the one-past-the-end miss, and the
/// element order in both directions. Walking backwards exercises the `prev`
/// links, so a list passing this check is fully intact.
fn assert_list_equals(list: &LinkedList<i32>, expected: &[i32]) {
    assert_eq!(list.len(), expected.len());
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(list.get(index), Some(value));
    }
    assert_eq!(list.get(expected.len()), None);
    assert!(list.iter().eq(expected.iter()));
    assert!(list.iter().rev().eq(expected.iter().rev()));
}

#[test]
fn test_len_and_is_empty() {
    let mut list = LinkedList::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());

    list.push_front(1);
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());

    list.push_front(2);
    list.push_front(3);
    assert_eq!(list.len(), 3);

    // Replacing an element does not change the count
    assert!(list.set(1, 9).is_ok());
    assert_eq!(list.len(), 3);

    list.remove(0).unwrap();
    assert_eq!(list.len(), 2);

    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_front_and_back() {
    let mut list = LinkedList::new();

    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    for value in [1, 2, 3] {
        list.push_front(value);
        assert_eq!(list.front(), Some(&value));
        assert_eq!(list.back(), Some(&1));
    }

    *list.front_mut().unwrap() = 30;
    *list.back_mut().unwrap() = 10;
    assert_list_equals(&list, &[30, 2, 10]);
}

#[test]
fn test_get() {
    let mut list = LinkedList::new();

    assert_eq!(list.get(0), None);

    let values = [1, 2, 3, 4, 5];
    for value in values {
        list.push_front(value);
    }

    // Front pushes reverse the order, so index len-1-i holds values[i]
    for (i, value) in values.iter().enumerate() {
        assert_eq!(list.get(values.len() - 1 - i), Some(value));
    }

    assert_eq!(list.get(5), None);
    assert_eq!(list.get(usize::MAX), None);
}

#[test]
fn test_get_seeks_from_both_ends() {
    let list: LinkedList<usize> = (0..101).collect();

    // Indices on either side of the midpoint, plus the midpoint itself
    for index in [0, 1, 49, 50, 51, 99, 100] {
        assert_eq!(list.get(index), Some(&index));
    }
}

#[test]
fn test_get_mut() {
    let mut list: LinkedList<i32> = (1..=5).collect();

    *list.get_mut(2).unwrap() += 10;
    assert_list_equals(&list, &[1, 2, 13, 4, 5]);

    assert!(list.get_mut(5).is_none());
}

#[test]
fn test_push_front() {
    let mut list = LinkedList::new();
    let values = [1, 2, 3, 4, 5];

    for (i, value) in values.iter().enumerate() {
        list.push_front(*value);

        assert_eq!(list.front(), Some(value));
        assert_eq!(list.back(), Some(&values[0]));
        assert_eq!(list.len(), i + 1);
    }

    assert_list_equals(&list, &[5, 4, 3, 2, 1]);
}

#[test]
fn test_push_back() {
    let mut list = LinkedList::new();
    let values = [1, 2, 3, 4, 5];

    for (i, value) in values.iter().enumerate() {
        list.push_back(*value);

        assert_eq!(list.back(), Some(value));
        assert_eq!(list.front(), Some(&values[0]));
        assert_eq!(list.len(), i + 1);
    }

    assert_list_equals(&list, &[1, 2, 3, 4, 5]);
}

#[test]
fn test_set() {
    let mut list: LinkedList<i32> = LinkedList::from_iter([5, 4, 3, 2, 1]);

    assert_eq!(list.set(4, 99), Ok(1));
    assert_list_equals(&list, &[5, 4, 3, 2, 99]);

    assert_eq!(list.set(4, 100), Ok(99));
    assert_list_equals(&list, &[5, 4, 3, 2, 100]);

    assert_eq!(list.set(0, 98), Ok(5));
    assert_list_equals(&list, &[98, 4, 3, 2, 100]);

    assert_eq!(list.set(2, 7), Ok(3));
    assert_list_equals(&list, &[98, 4, 7, 2, 100]);
}

#[test]
fn test_set_out_of_range() {
    let mut list = LinkedList::new();

    // An empty list has no settable slot at all
    assert_eq!(
        list.set(0, 1),
        Err(IndexOutOfRangeError { index: 0, len: 0 })
    );
    assert!(list.is_empty());

    list.extend([5, 4, 3, 2, 1]);

    // Setting one past the end is rejected rather than treated as an append
    assert_eq!(
        list.set(5, 1),
        Err(IndexOutOfRangeError { index: 5, len: 5 })
    );
    assert_list_equals(&list, &[5, 4, 3, 2, 1]);
}

#[test]
fn test_pop_front() {
    let mut list = LinkedList::new();

    assert_eq!(list.pop_front(), None);

    list.extend([5, 4, 3, 2, 1]);

    let mut remaining = list.len();
    for expected in [5, 4, 3, 2, 1] {
        assert_eq!(list.pop_front(), Some(expected));
        remaining -= 1;
        assert_eq!(list.len(), remaining);
    }

    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
}

#[test]
fn test_pop_back() {
    let mut list = LinkedList::new();

    assert_eq!(list.pop_back(), None);

    list.extend([5, 4, 3, 2, 1]);

    let mut remaining = list.len();
    for expected in [1, 2, 3, 4, 5] {
        assert_eq!(list.pop_back(), Some(expected));
        remaining -= 1;
        assert_eq!(list.len(), remaining);
    }

    assert!(list.is_empty());
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_remove() {
    let mut list: LinkedList<i32> = LinkedList::from_iter([5, 4, 3, 2, 1]);

    // Tail
    assert_eq!(list.remove(4), Ok(1));
    assert_list_equals(&list, &[5, 4, 3, 2]);

    // Head
    assert_eq!(list.remove(0), Ok(5));
    assert_list_equals(&list, &[4, 3, 2]);

    // Middle, which must leave the neighbours linked to each other
    assert_eq!(list.remove(1), Ok(3));
    assert_list_equals(&list, &[4, 2]);

    assert_eq!(list.remove(1), Ok(2));
    assert_eq!(list.remove(0), Ok(4));
    assert!(list.is_empty());
}

#[test]
fn test_remove_out_of_range() {
    let mut list = LinkedList::new();

    assert_eq!(
        list.remove(1),
        Err(IndexOutOfRangeError { index: 1, len: 0 })
    );
    assert!(list.is_empty());

    list.extend([5, 4, 3, 2, 1]);

    assert_eq!(
        list.remove(6),
        Err(IndexOutOfRangeError { index: 6, len: 5 })
    );
    assert_list_equals(&list, &[5, 4, 3, 2, 1]);
}

#[test]
fn test_error_display() {
    let err = IndexOutOfRangeError { index: 6, len: 5 };
    assert_eq!(
        err.to_string(),
        "index 6 is out of range, the available range is [0, 4]"
    );

    // The report stays well-formed when the list was empty
    let err = IndexOutOfRangeError { index: 0, len: 0 };
    assert_eq!(
        err.to_string(),
        "index 0 is out of range, the available range is [0, 0]"
    );
}

#[test]
fn test_clear() {
    let mut list = LinkedList::new();

    list.clear();
    assert!(list.is_empty());

    list.extend([1, 2, 3, 4, 5]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    // The list stays usable after clearing
    list.push_back(7);
    assert_list_equals(&list, &[7]);
}

#[test]
fn test_map() {
    let values = [1, 2, 3, 4, 5];
    let list: LinkedList<i32> = values.into_iter().collect();

    let doubled = list.map(|value, index| {
        assert_eq!(*value, values[index]);
        value * 2
    });

    assert_list_equals(&list, &values);
    assert_list_equals(&doubled, &[2, 4, 6, 8, 10]);
}

#[test]
fn test_map_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();

    let mapped = list.map(|_, _| -> i32 { panic!("transform must not run on an empty list") });

    assert!(mapped.is_empty());
}

#[test]
fn test_map_changes_element_type() {
    let list: LinkedList<i32> = (1..=3).collect();

    let rendered = list.map(|value, index| format!("{index}:{value}"));

    let expected: Vec<String> = vec!["0:1".to_string(), "1:2".to_string(), "2:3".to_string()];
    assert!(rendered.iter().eq(expected.iter()));
}

#[test]
fn test_filter() {
    let values = [1, 2, 3, 4, 5];
    let list: LinkedList<i32> = values.into_iter().collect();

    let small = list.filter(|value, index| {
        assert_eq!(*value, values[index]);
        *value <= 3
    });

    assert_list_equals(&list, &values);
    assert_list_equals(&small, &[1, 2, 3]);
}

#[test]
fn test_filter_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();

    let kept = list.filter(|_, _| panic!("predicate must not run on an empty list"));

    assert!(kept.is_empty());
}

#[test]
fn test_iter() {
    let list: LinkedList<i32> = (1..=5).collect();

    assert!(list.iter().copied().eq(1..=5));
    assert!(list.iter().rev().copied().eq((1..=5).rev()));

    // Both ends can be consumed until the cursors meet
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iter_mut() {
    let mut list: LinkedList<i32> = (1..=5).collect();

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_list_equals(&list, &[10, 20, 30, 40, 50]);

    if let Some(last) = list.iter_mut().next_back() {
        *last = 0;
    }
    assert_list_equals(&list, &[10, 20, 30, 40, 0]);
}

#[test]
fn test_into_iter() {
    let list: LinkedList<i32> = (1..=5).collect();
    let drained: Vec<i32> = list.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);

    let list: LinkedList<i32> = (1..=5).collect();
    let reversed: Vec<i32> = list.into_iter().rev().collect();
    assert_eq!(reversed, vec![5, 4, 3, 2, 1]);

    // By-reference iteration through the loop syntax
    let list: LinkedList<i32> = (1..=3).collect();
    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 6);
}

#[test]
fn test_clone_and_eq() {
    let list: LinkedList<i32> = (1..=5).collect();
    let mut copy = list.clone();

    assert_eq!(copy, list);

    // The clone owns its nodes, so changing it leaves the original alone
    copy.set(0, 9).unwrap();
    assert_ne!(copy, list);
    assert_list_equals(&list, &[1, 2, 3, 4, 5]);

    assert_ne!(list, (1..=4).collect::<LinkedList<i32>>());
    assert_ne!(list, (2..=6).collect::<LinkedList<i32>>());
}

#[test]
fn test_debug_format() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(format!("{list:?}"), "[]");

    list.extend([1, 2, 3]);
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
}

struct DropLogger<'a> {
    id: usize,
    log: &'a RefCell<Vec<usize>>,
}

impl Drop for DropLogger<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

#[test]
fn test_elements_dropped_once_front_to_back() {
    let log = RefCell::new(Vec::new());

    let mut list = LinkedList::new();
    for id in 0..4 {
        list.push_back(DropLogger { id, log: &log });
    }

    // Popping hands the element out instead of dropping it
    let popped = list.pop_front().unwrap();
    assert!(log.borrow().is_empty());
    drop(popped);
    assert_eq!(*log.borrow(), vec![0]);

    drop(list);
    assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn test_clear_drops_elements() {
    let log = RefCell::new(Vec::new());

    let mut list = LinkedList::new();
    for id in 0..3 {
        list.push_back(DropLogger { id, log: &log });
    }

    list.clear();
    assert_eq!(*log.borrow(), vec![0, 1, 2]);
    assert!(list.is_empty());
}
