/// Array-backed binary min-heap.
///
/// Holds the nodes that still await merging during tree construction.
/// Only insertion and extraction of the minimum are supported; there is
/// no peeking, no in-place priority update and no removal of arbitrary
/// elements.
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> MinHeap<T> {
        MinHeap {
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the entries in raw heap-array order. The order is
    /// the backing array's layout, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the minimum element, or `None` when the heap
    /// holds no elements.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last_index = self.elements.len() - 1;
        self.elements.swap(0, last_index);
        let minimum = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        minimum
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index] < self.elements[parent] {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.elements.len() && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < self.elements.len() && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
