//! core::chain
//!
//! Linear ownership chains of units.
//!
//! # Structure
//!
//! A chain is a right fold over its elements:
//! `build_chain([a, b, c]) = Unit(a, Unit(b, Unit(c, Terminal)))`.
//! Each unit exclusively owns the next link; the last unit owns
//! [`Link::Terminal`]. Units are immutable once built.
//!
//! Chunk lengths grow with the Fibonacci sequence, so a single chain can be
//! long. Drop, clone, equality and debug output walk the chain iteratively
//! instead of recursing through the links.

use std::fmt;

/// One position in a chain.
pub enum Link<T> {
    /// A unit that owns the rest of the chain.
    Unit(Box<Unit<T>>),
    /// End of the chain. Owns nothing.
    Terminal,
}

impl<T> Link<T> {
    /// True if this is the terminal marker.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Link::Terminal)
    }

    /// The unit at this position, if any.
    pub fn unit(&self) -> Option<&Unit<T>> {
        match self {
            Link::Unit(unit) => Some(&**unit),
            Link::Terminal => None,
        }
    }
}

/// A node wrapping one value and owning the next link.
pub struct Unit<T> {
    value: T,
    next: Link<T>,
}

impl<T> Unit<T> {
    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The link this unit owns.
    pub fn next(&self) -> &Link<T> {
        &self.next
    }
}

/// A linear chain of units.
pub struct Chain<T> {
    head: Link<T>,
    len: usize,
}

/// Build a chain from `chunk`, preserving order.
///
/// # Example
///
/// ```
/// use hierarchy_builder::core::chain::build_chain;
///
/// let chain = build_chain(vec!['a', 'b', 'c']);
/// let first = chain.head().unit().unwrap();
/// assert_eq!(*first.value(), 'a');
/// assert_eq!(*first.next().unit().unwrap().value(), 'b');
/// assert_eq!(chain.iter().collect::<Vec<_>>(), vec![&'a', &'b', &'c']);
///
/// assert!(build_chain(Vec::<char>::new()).is_terminal());
/// ```
pub fn build_chain<T, I>(chunk: I) -> Chain<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut head = Link::Terminal;
    let mut len = 0;
    for value in chunk.into_iter().rev() {
        head = Link::Unit(Box::new(Unit { value, next: head }));
        len += 1;
    }
    Chain { head, len }
}

impl<T> Chain<T> {
    /// An empty chain.
    pub fn terminal() -> Self {
        Self {
            head: Link::Terminal,
            len: 0,
        }
    }

    /// The first link.
    pub fn head(&self) -> &Link<T> {
        &self.head
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the chain holds no units.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the head link is the terminal marker.
    pub fn is_terminal(&self) -> bool {
        self.head.is_terminal()
    }

    /// Iterate values head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            link: &self.head,
            remaining: self.len,
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut link = std::mem::replace(&mut self.head, Link::Terminal);
        while let Link::Unit(mut unit) = link {
            link = std::mem::replace(&mut unit.next, Link::Terminal);
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::terminal()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        build_chain(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a chain's values.
pub struct Iter<'a, T> {
    link: &'a Link<T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link: &'a Link<T> = self.link;
        match link {
            Link::Unit(unit) => {
                self.link = &unit.next;
                self.remaining -= 1;
                Some(&unit.value)
            }
            Link::Terminal => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator over a chain's values.
pub struct IntoIter<T> {
    link: Link<T>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.link, Link::Terminal) {
            Link::Unit(unit) => {
                let Unit { value, next } = *unit;
                self.link = next;
                self.remaining -= 1;
                Some(value)
            }
            Link::Terminal => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            link: std::mem::replace(&mut self.head, Link::Terminal),
            remaining: std::mem::take(&mut self.len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chunk_is_terminal() {
        let chain = build_chain(Vec::<i32>::new());
        assert!(chain.is_terminal());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.iter().next(), None);
    }

    #[test]
    fn single_unit_owns_terminal() {
        let chain = build_chain(vec![7]);
        let unit = chain.head().unit().expect("one unit");
        assert_eq!(*unit.value(), 7);
        assert!(unit.next().is_terminal());
    }

    #[test]
    fn right_fold_nesting() {
        let chain = build_chain(vec!["a", "b", "c"]);
        let a = chain.head().unit().unwrap();
        let b = a.next().unit().unwrap();
        let c = b.next().unit().unwrap();
        assert_eq!((*a.value(), *b.value(), *c.value()), ("a", "b", "c"));
        assert!(c.next().is_terminal());
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn into_iter_yields_owned_values_in_order() {
        let chain = build_chain(vec![String::from("x"), String::from("y")]);
        let values: Vec<String> = chain.into_iter().collect();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn partially_consumed_into_iter_drops_rest() {
        let chain: Chain<String> = (0..5).map(|i| i.to_string()).collect();
        let mut iter = chain.into_iter();
        assert_eq!(iter.next().as_deref(), Some("0"));
        assert_eq!(iter.len(), 4);
        drop(iter);
    }

    #[test]
    fn clone_is_independent_and_equal() {
        let chain = build_chain(vec![1, 2, 3]);
        let copy = chain.clone();
        assert_eq!(chain, copy);
        let a = chain.head().unit().unwrap() as *const Unit<i32>;
        let b = copy.head().unit().unwrap() as *const Unit<i32>;
        assert_ne!(a, b);
    }

    #[test]
    fn debug_lists_values() {
        let chain = build_chain(vec![1, 2]);
        assert_eq!(format!("{:?}", chain), "[1, 2]");
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let chain: Chain<u32> = (0..1_000_000).collect();
        assert_eq!(chain.len(), 1_000_000);
        let copy = chain.clone();
        assert!(chain == copy);
        drop(chain);
        drop(copy);
    }
}
