use std::slice;

use crate::{
    Error, OwnValue, Result,
    util::{check_index, cold_path},
};

/// An owned, ordered sequence of values.
///
/// Backs both `list` and `sexp` values; the kind lives on the enclosing
/// [`OwnValue`] variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnList {
    elements: Vec<OwnValue>,
}

impl OwnList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[OwnValue] {
        &self.elements
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [OwnValue] {
        &mut self.elements
    }

    /// Returns the element at `index`, or `None` past the end, like [`slice::get`].
    #[inline]
    pub fn get(&self, index: usize) -> Option<&OwnValue> {
        self.elements.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut OwnValue> {
        self.elements.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, OwnValue> {
        self.elements.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, OwnValue> {
        self.elements.iter_mut()
    }

    #[inline]
    pub fn push(&mut self, value: impl Into<OwnValue>) {
        self.elements.push(value.into());
    }

    /// Inserts at `index`, shifting later elements. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<OwnValue>) -> Result<()> {
        if index > self.elements.len() {
            cold_path();
            return Err(Error::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        self.elements.insert(index, value.into());
        Ok(())
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, value: impl Into<OwnValue>) -> Result<OwnValue> {
        check_index(index, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[index], value.into()))
    }

    pub fn remove(&mut self, index: usize) -> Result<OwnValue> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl From<Vec<OwnValue>> for OwnList {
    #[inline]
    fn from(elements: Vec<OwnValue>) -> Self {
        Self { elements }
    }
}

impl From<OwnList> for Vec<OwnValue> {
    #[inline]
    fn from(list: OwnList) -> Self {
        list.elements
    }
}

impl<V: Into<OwnValue>> FromIterator<V> for OwnList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<OwnValue>> Extend<V> for OwnList {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for OwnList {
    type Item = OwnValue;
    type IntoIter = std::vec::IntoIter<OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a OwnList {
    type Item = &'a OwnValue;
    type IntoIter = slice::Iter<'a, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a mut OwnList {
    type Item = &'a mut OwnValue;
    type IntoIter = slice::IterMut<'a, OwnValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}
