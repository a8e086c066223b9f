use dlist::{List, ListError};
use proptest::prelude::*;

fn contents<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

proptest! {
    #[test]
    fn prop_behaves_like_vec(ops in prop::collection::vec(
        (0u8..8, 0usize..24, -1000i32..1000), 0..200
    )) {
        let mut list = List::new();
        let mut model: Vec<i32> = Vec::new();

        for (op, index, value) in ops {
            match op {
                0 => {
                    list.push(value);
                    model.push(value);
                }
                1 => prop_assert_eq!(list.pop(), model.pop()),
                2 => {
                    let result = list.add(index, value);
                    if model.is_empty() {
                        prop_assert_eq!(result, Ok(()));
                        model.push(value);
                    } else if index <= model.len() {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(index, value);
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(ListError::InvalidInsertionIndex { index, len: model.len() })
                        );
                    }
                }
                3 => {
                    let expected = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(list.remove(index), expected);
                }
                4 => prop_assert_eq!(list.get(index), model.get(index)),
                5 => {
                    list.rotate();
                    if let Some(back) = model.pop() {
                        model.insert(0, back);
                    }
                }
                6 => {
                    list.rotate_back();
                    if !model.is_empty() {
                        let front = model.remove(0);
                        model.push(front);
                    }
                }
                7 => {
                    list.push_front(value);
                    model.insert(0, value);
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.validate().is_ok());
        }

        prop_assert_eq!(contents(&list), model.clone());
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }
}

proptest! {
    #[test]
    fn prop_push_then_get_in_order(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut list = List::new();
        for v in &values {
            list.push(*v);
        }
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i), Some(v));
        }
        prop_assert_eq!(list.get(values.len()), None);
    }

    #[test]
    fn prop_pop_undoes_push(values in prop::collection::vec(any::<i32>(), 0..50), x in any::<i32>()) {
        let mut list: List<_> = values.iter().copied().collect();
        list.push(x);
        prop_assert_eq!(list.pop(), Some(x));
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn prop_add_at_ends(values in prop::collection::vec(any::<i32>(), 0..50), x in any::<i32>()) {
        let mut front: List<_> = values.iter().copied().collect();
        front.add(0, x).unwrap();
        prop_assert_eq!(front.get(0), Some(&x));

        let mut added: List<_> = values.iter().copied().collect();
        let mut pushed = added.clone();
        added.add(values.len(), x).unwrap();
        pushed.push(x);
        prop_assert_eq!(added, pushed);
    }

    #[test]
    fn prop_remove_shrinks_by_one(values in prop::collection::vec(any::<u16>(), 1..60), seed in any::<usize>()) {
        let index = seed % values.len();
        let mut list: List<_> = values.iter().copied().collect();
        prop_assert_eq!(list.remove(index), Some(values[index]));
        prop_assert_eq!(list.len(), values.len() - 1);
        prop_assert!(list.validate().is_ok());
    }

    #[test]
    fn prop_rotate_len_times_is_identity(values in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut list: List<_> = values.iter().copied().collect();
        for _ in 0..values.len() {
            list.rotate();
        }
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn prop_add_then_remove_round_trips(values in prop::collection::vec(any::<i32>(), 0..40), x in any::<i32>()) {
        for index in 0..=values.len() {
            let mut list: List<_> = values.iter().copied().collect();
            list.add(index, x).unwrap();
            prop_assert_eq!(list.remove(index), Some(x));
            prop_assert_eq!(contents(&list), values.clone());
            prop_assert!(list.validate().is_ok());
        }
    }

    #[test]
    fn prop_out_of_range_never_mutates(values in prop::collection::vec(any::<i32>(), 0..30), extra in 0usize..10) {
        let mut list: List<_> = values.iter().copied().collect();
        let index = values.len() + extra;
        prop_assert_eq!(list.get(index), None);
        prop_assert_eq!(list.remove(index), None);
        prop_assert_eq!(list.get(usize::MAX), None);
        prop_assert_eq!(list.remove(usize::MAX), None);
        prop_assert_eq!(contents(&list), values);
        prop_assert!(list.validate().is_ok());
    }
}
