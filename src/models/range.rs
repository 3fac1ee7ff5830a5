//! Lazy enumeration of the addresses inside a CIDR block.

use super::{Address, AddressFamily, GroupBounds};
use crate::error::{IpRangeError, Result};

/// Every address in the Cartesian product of per-group bounds.
///
/// Nothing is materialised up front: [`AddressRange::iter`] walks the product
/// like an odometer, most significant group outermost, so addresses come out
/// in ascending order. The range can be iterated any number of times.
///
/// In clean mode any address whose last group is all zeros or all ones is
/// skipped. Only the last group is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    family: AddressFamily,
    bounds: Vec<GroupBounds>,
    clean: bool,
}

impl AddressRange {
    /// Build a range from caller supplied bounds.
    ///
    /// There must be one bound per group of `family`, each within the group
    /// width.
    pub fn new(
        family: AddressFamily,
        bounds: Vec<GroupBounds>,
        clean: bool,
    ) -> Result<AddressRange> {
        if bounds.len() != family.group_count() {
            return Err(IpRangeError::Format {
                family,
                input: format!("{} group bounds", bounds.len()),
            });
        }
        for bound in &bounds {
            GroupBounds::new(bound.first(), bound.last(), family)?;
        }
        Ok(AddressRange::from_parts(family, bounds, clean))
    }

    /// Build from bounds derived from a parsed [`super::Cidr`].
    pub(crate) fn from_parts(
        family: AddressFamily,
        bounds: Vec<GroupBounds>,
        clean: bool,
    ) -> AddressRange {
        AddressRange {
            family,
            bounds,
            clean,
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }

    pub fn bounds(&self) -> &[GroupBounds] {
        &self.bounds
    }

    /// Number of addresses the iterator yields, saturating at `u128::MAX`.
    pub fn len(&self) -> u128 {
        let Some((inner, outer)) = self.bounds.split_last() else {
            return 0;
        };

        let mut inner_count = u128::from(inner.width());
        if self.clean {
            if inner.first() == 0 {
                inner_count -= 1;
            }
            if inner.last() == self.family.all_ones() {
                inner_count -= 1;
            }
        }

        outer
            .iter()
            .try_fold(inner_count, |acc, b| acc.checked_mul(u128::from(b.width())))
            .unwrap_or(u128::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> AddressIter<'_> {
        let start = if self.bounds.is_empty() {
            None
        } else {
            Some(self.bounds.iter().map(|b| b.first()).collect())
        };
        AddressIter {
            range: self,
            next: start,
        }
    }

    /// Textual form of every address, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|a| a.to_string()).collect()
    }

    /// Advance `groups` to the next combination, or `None` once every group
    /// has wrapped.
    fn successor(&self, mut groups: Vec<u16>) -> Option<Vec<u16>> {
        for (i, bound) in self.bounds.iter().enumerate().rev() {
            if groups[i] < bound.last() {
                groups[i] += 1;
                return Some(groups);
            }
            groups[i] = bound.first();
        }
        None
    }

    fn is_excluded(&self, groups: &[u16]) -> bool {
        self.clean
            && groups
                .last()
                .is_some_and(|g| self.family.is_boundary(*g))
    }
}

impl<'a> IntoIterator for &'a AddressRange {
    type Item = Address;
    type IntoIter = AddressIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`AddressRange`].
#[derive(Debug, Clone)]
pub struct AddressIter<'a> {
    range: &'a AddressRange,
    next: Option<Vec<u16>>,
}

impl Iterator for AddressIter<'_> {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        loop {
            let current = self.next.take()?;
            self.next = self.range.successor(current.clone());
            if self.range.is_excluded(&current) {
                continue;
            }
            return Some(Address::from_parts(self.range.family, current));
        }
    }
}
