pub use arbor::*;

use rand::Rng;

/// Builds a tree from the given elements, checking the invariants after
/// every insertion.
pub fn build<T: Ord + Clone>(elements: &[T]) -> AvlTree<T> {
    let mut tree = AvlTree::new();
    for element in elements {
        tree.insert(element.clone());
        tree.assert_invariants();
    }
    tree
}

/// Empties the tree through `remove_min`, checking the invariants after
/// every removal. A valid search tree drains in non-decreasing order.
pub fn drain_sorted<T: Ord>(tree: &mut AvlTree<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(element) = tree.remove_min() {
        tree.assert_invariants();
        out.push(element);
    }
    assert!(tree.is_empty());
    out
}

/// Runs random insert/remove rounds against a sorted `Vec` model, checking
/// the invariants and the agreement with the model as it goes, and finally
/// drains the tree against the model.
pub fn check_against_model(rounds: usize) {
    const BOUND: i32 = 60;

    let mut rng = rand::thread_rng();
    let mut tree: AvlTree<i32> = AvlTree::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..rounds {
        let x = rng.gen_range(-BOUND..=BOUND);
        if rng.gen() {
            tree.insert(x);
            let ix = model.binary_search(&x).unwrap_or_else(|ix| ix);
            model.insert(ix, x);
        } else {
            match model.binary_search(&x) {
                Ok(ix) => {
                    model.remove(ix);
                    assert_eq!(tree.remove(&x), Ok(()));
                }
                Err(_) => {
                    assert_eq!(tree.remove(&x), Err(TreeError::ElementNotFound));
                }
            }
        }
        tree.assert_invariants();
        assert_eq!(tree.size(), model.len());
        match model.first() {
            None => assert_eq!(tree.find_min(), Err(TreeError::EmptyCollection)),
            Some(min) => assert_eq!(tree.find_min(), Ok(min)),
        }
        match model.last() {
            None => assert_eq!(tree.find_max(), Err(TreeError::EmptyCollection)),
            Some(max) => assert_eq!(tree.find_max(), Ok(max)),
        }
    }

    assert_eq!(drain_sorted(&mut tree), model);
}
