use wordbst::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of words in both.
fn do_ops(ops: &[Op], tree: &mut Tree<String>, set: &mut BTreeSet<String>) {
    for op in ops {
        match op {
            Op::Insert(word) => {
                tree.insert(word.clone());
                set.insert(word.clone());
            }
            Op::Delete(word) => {
                tree.delete(word.as_str());
                set.remove(word);
            }
        }
    }
}

fn words(tree: &Tree<String>) -> Vec<String> {
    tree.iter().cloned().collect()
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter()) && set.iter().all(|word| tree.contains(word.as_str()))
}

#[quickcheck]
fn iter_is_strictly_ascending(xs: Vec<String>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let words = words(&tree);

    words.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_inserted(xs: Vec<String>) -> bool {
    let tree: Tree<_> = xs.iter().cloned().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let tree: Tree<_> = xs.iter().cloned().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn inserting_twice_changes_nothing(xs: Vec<String>) -> bool {
    let once: Tree<_> = xs.iter().cloned().collect();
    let twice: Tree<_> = xs.iter().chain(xs.iter()).cloned().collect();

    words(&once) == words(&twice) && once.len() == twice.len()
}

#[quickcheck]
fn insertion_order_does_not_change_contents(xs: Vec<String>) -> bool {
    let forwards: Tree<_> = xs.iter().cloned().collect();
    let backwards: Tree<_> = xs.iter().rev().cloned().collect();

    words(&forwards) == words(&backwards)
}

#[quickcheck]
fn delete_removes_exactly_one_word(xs: Vec<String>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().cloned().collect();
    let before = words(&tree);
    let target = xs[pick % xs.len()].clone();

    tree.delete(&target);

    let expected: Vec<_> = before.into_iter().filter(|w| *w != target).collect();
    !tree.contains(&target) && words(&tree) == expected
}

#[quickcheck]
fn delete_absent_is_noop(xs: Vec<String>, absent: String) -> bool {
    if xs.contains(&absent) {
        return true;
    }
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before = words(&tree);

    tree.delete(&absent);
    words(&tree) == before
}
