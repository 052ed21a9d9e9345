use crate::core::GrowVec;

impl<T: PartialEq> GrowVec<T> {
    /// Returns the lowest index holding an element equal to `value`.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Like `find`, but only looks at `[begin, end)`.
    ///
    /// A range that is empty or reaches past `len()` finds nothing; it is
    /// not scanned at all.
    #[must_use]
    pub fn find_in(&self, begin: usize, end: usize, value: &T) -> Option<usize> {
        if begin >= end || end > self.len() {
            return None;
        }
        self.as_slice()[begin..end]
            .iter()
            .position(|element| element == value)
            .map(|offset| begin + offset)
    }
}

impl<T> GrowVec<T> {
    /// Bubble sort that swaps a neighbouring pair whenever the earlier
    /// element is less than the later one.
    ///
    /// With the natural ordering this leaves the vector in descending order:
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let mut vec = GrowVec::from([3, 1, 4, 1, 5]);
    /// vec.sort();
    /// assert_eq!(vec.as_slice(), &[5, 4, 3, 1, 1]);
    /// ```
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.bubble(|earlier, later| earlier < later);
    }

    /// Bubble sort that swaps a neighbouring pair whenever `in_order` is
    /// false for it.
    ///
    /// A strict "less than" predicate therefore sorts ascending:
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let mut vec = GrowVec::from([3, 1, 4, 1, 5]);
    /// vec.sort_by(|a, b| a < b);
    /// assert_eq!(vec.as_slice(), &[1, 1, 3, 4, 5]);
    /// ```
    pub fn sort_by<F>(&mut self, mut in_order: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.bubble(|earlier, later| !in_order(earlier, later));
    }

    fn bubble<F>(&mut self, mut should_swap: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let elements = self.as_mut_slice();
        let len = elements.len();
        if len < 2 {
            return;
        }
        for pass in 0..len - 1 {
            for j in 0..len - pass - 1 {
                if should_swap(&elements[j], &elements[j + 1]) {
                    elements.swap(j, j + 1);
                }
            }
        }
    }
}
