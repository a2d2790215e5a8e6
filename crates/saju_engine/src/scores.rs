//! Per-element integer scoreboard.

use std::ops::Index;

use saju_base::{ALL_ELEMENTS, Element};
use serde::Serialize;

/// Signed score for each of the 5 elements, indexed by `Element::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElementScores([i32; 5]);

impl ElementScores {
    pub const fn new(scores: [i32; 5]) -> Self {
        Self(scores)
    }

    pub const fn get(&self, element: Element) -> i32 {
        self.0[element.index() as usize]
    }

    pub fn add(&mut self, element: Element, delta: i32) {
        self.0[element.index() as usize] += delta;
    }

    pub const fn as_array(&self) -> &[i32; 5] {
        &self.0
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    /// (element, score) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, i32)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    /// Elements by score, highest first; equal scores keep table order.
    pub fn ranked(&self) -> [Element; 5] {
        let mut order = ALL_ELEMENTS;
        // sort_by_key is stable
        order.sort_by_key(|&e| std::cmp::Reverse(self.get(e)));
        order
    }
}

impl Index<Element> for ElementScores {
    type Output = i32;

    fn index(&self, element: Element) -> &i32 {
        &self.0[element.index() as usize]
    }
}

impl std::fmt::Display for ElementScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (e, s) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={s}", e.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_total() {
        let mut s = ElementScores::default();
        s.add(Element::Fire, 10);
        s.add(Element::Fire, -3);
        s.add(Element::Water, 5);
        assert_eq!(s[Element::Fire], 7);
        assert_eq!(s.total(), 12);
    }

    #[test]
    fn ranked_ties_keep_table_order() {
        let s = ElementScores::new([10, 30, 30, 5, 10]);
        assert_eq!(
            s.ranked(),
            [Element::Fire, Element::Earth, Element::Wood, Element::Water, Element::Metal]
        );
    }

    #[test]
    fn display() {
        let s = ElementScores::new([1, 2, 3, 4, -5]);
        assert_eq!(s.to_string(), "Wood=1 Fire=2 Earth=3 Metal=4 Water=-5");
    }
}
