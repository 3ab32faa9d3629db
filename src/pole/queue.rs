//! Pending-cell queue in either traversal order.

use super::cell::Cell;
use super::tree::NodeId;
use super::QueueOrder;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A queued cell plus its node in the retained tree, if any.
#[derive(Debug)]
pub(crate) struct Entry<F> {
    pub cell: Cell<F>,
    pub node: Option<NodeId>,
    /// Insertion counter; breaks ties so the heap pops deterministically.
    seq: u64,
}

impl<F: Float> PartialEq for Entry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for Entry<F> {}

impl<F: Float> PartialOrd for Entry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Entry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on the cell bound; earlier insertions win ties
        self.cell
            .max_distance()
            .partial_cmp(&other.cell.max_distance())
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
enum Pending<F> {
    Fifo(VecDeque<Entry<F>>),
    BestFirst(BinaryHeap<Entry<F>>),
}

/// Work queue of unexplored cells.
#[derive(Debug)]
pub(crate) struct CellQueue<F> {
    pending: Pending<F>,
    next_seq: u64,
}

impl<F: Float> CellQueue<F> {
    pub fn new(order: QueueOrder) -> Self {
        let pending = match order {
            QueueOrder::Fifo => Pending::Fifo(VecDeque::new()),
            QueueOrder::BestFirst => Pending::BestFirst(BinaryHeap::new()),
        };
        Self {
            pending,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, cell: Cell<F>, node: Option<NodeId>) {
        let entry = Entry {
            cell,
            node,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        match &mut self.pending {
            Pending::Fifo(queue) => queue.push_back(entry),
            Pending::BestFirst(heap) => heap.push(entry),
        }
    }

    pub fn pop(&mut self) -> Option<Entry<F>> {
        match &mut self.pending {
            Pending::Fifo(queue) => queue.pop_front(),
            Pending::BestFirst(heap) => heap.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Fifo(queue) => queue.len(),
            Pending::BestFirst(heap) => heap.len(),
        }
    }
}
