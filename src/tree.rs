use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;


#[derive(Debug)]
pub enum Node<T> {

    Parent { count: usize, left: Box<Node<T>>, right: Box<Node<T>> },
    Leaf { count: usize, value: T },

}

impl<T> Node<T> {

    pub const fn count(&self) -> usize {
        match self {
            Node::Parent { count, .. } |
            Node::Leaf { count, .. }
                => *count
        }
    }


    fn merge(left: Self, right: Self) -> Self {
        Node::Parent {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right)
        }
    }

}


/// A node waiting in the queue.
/// `seq` is the construction order and breaks ties between equal counts, first come first served.
struct Pending<T> {

    seq: usize,
    node: Node<T>

}

impl<T> Pending<T> {

    fn key(&self) -> (usize, usize) {
        (self.node.count(), self.seq)
    }

}

impl<T> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Pending<T> {}

impl<T> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, BinaryHeap is a max-heap
        other.key().cmp(&self.key())
    }
}


/// Builds the Huffman tree by repeatedly merging the two lightest nodes.
///
/// Returns `None` for an empty table. A table with a single entry yields a lone leaf.
/// The first node taken from the queue becomes the left child.
pub fn build<T>(frequencies: &FrequencyTable<T>) -> Option<Node<T>>
where
    T: Symbol
{

    let mut queue = BinaryHeap::with_capacity(frequencies.len());
    let mut seq = 0;

    for (value, count) in frequencies.iter() {
        queue.push(Pending {
            seq,
            node: Node::Leaf { count: *count, value: value.clone() }
        });
        seq += 1;
    }

    while queue.len() > 1 {

        let left = queue.pop()?;
        let right = queue.pop()?;

        queue.push(Pending {
            seq,
            node: Node::merge(left.node, right.node)
        });
        seq += 1;
    }

    queue.pop()
        .map(|pending| pending.node)
}


#[cfg(test)]
mod tests {

    use crate::frequency::analyze;

    use super::*;


    fn leaves<T: Clone>(node: &Node<T>, depth: usize, out: &mut Vec<(T, usize)>) {
        match node {
            Node::Parent { left, right, .. } => {
                leaves(left, depth + 1, out);
                leaves(right, depth + 1, out);
            },
            Node::Leaf { value, .. } => out.push((value.clone(), depth)),
        }
    }


    #[test]
    fn empty_table() {
        assert!(build(&analyze("".chars())).is_none());
    }


    #[test]
    fn single_leaf() {

        let root = build(&analyze("aaaa".chars())).unwrap();

        assert!(matches!(root, Node::Leaf { count: 4, value: 'a' }));
    }


    #[test]
    fn abracadabra_shape() {

        let root = build(&analyze("abracadabra".chars())).unwrap();
        assert_eq!(root.count(), 11);

        let mut out = Vec::new();
        leaves(&root, 0, &mut out);

        // c and d merge first, then b and r, then those two, then a on the left
        assert_eq!(out, [('a', 1), ('c', 3), ('d', 3), ('b', 3), ('r', 3)]);
    }


    #[test]
    fn ties_broken_by_appearance() {

        let root = build(&analyze("xyzw".chars())).unwrap();

        let mut out = Vec::new();
        leaves(&root, 0, &mut out);

        assert_eq!(out, [('x', 2), ('y', 2), ('z', 2), ('w', 2)]);
    }

}
