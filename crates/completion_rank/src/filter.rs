//! Category filters.
//!
//! Hosts label candidates with up to 64 categories (methods, keywords, snippets, ...)
//! and let the user toggle them. A category is either a blacklist filter, hiding its
//! candidates unless selected, or a whitelist filter, restricting the list to its
//! candidates while selected.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

/// A set of category filters, one bit per filter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterMask(pub u64);

impl FilterMask {
	pub const EMPTY: Self = Self(0);

	/// Largest number of filters a mask can hold.
	pub const CAPACITY: usize = u64::BITS as usize;

	pub const fn single(index: usize) -> Self {
		debug_assert!(index < Self::CAPACITY);
		Self(1 << index)
	}

	pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
		indices.into_iter().fold(Self::EMPTY, |mask, index| mask | Self::single(index))
	}

	pub const fn contains(self, index: usize) -> bool {
		index < Self::CAPACITY && self.0 & (1 << index) != 0
	}

	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub const fn intersects(self, other: Self) -> bool {
		self.0 & other.0 != 0
	}
}

impl BitAnd for FilterMask {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

impl BitOr for FilterMask {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl BitOrAssign for FilterMask {
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}

impl Not for FilterMask {
	type Output = Self;

	fn not(self) -> Self {
		Self(!self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
	/// Candidates carrying the filter are hidden unless it is selected.
	Blacklist,
	/// While any whitelist filter is selected, only candidates carrying a selected one
	/// are shown.
	Whitelist,
}

/// The filters a host announced, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilters {
	pub blacklist: FilterMask,
	pub whitelist: FilterMask,
}

impl CategoryFilters {
	/// Builds the filter set from the kind of each filter, in index order.
	///
	/// Filters past [`FilterMask::CAPACITY`] are ignored.
	pub fn new(kinds: impl IntoIterator<Item = FilterKind>) -> Self {
		let mut filters = Self::default();
		for (index, kind) in kinds.into_iter().take(FilterMask::CAPACITY).enumerate() {
			match kind {
				FilterKind::Blacklist => filters.blacklist |= FilterMask::single(index),
				FilterKind::Whitelist => filters.whitelist |= FilterMask::single(index),
			}
		}
		filters
	}

	/// Resolves the filters in effect for the user's current selection.
	pub fn activate(&self, selected: FilterMask) -> ActiveFilters {
		let blacklist = !selected & self.blacklist;
		let mut whitelist = selected & self.whitelist;
		if whitelist.is_empty() {
			// Nothing selected means every whitelist category is shown.
			whitelist = self.whitelist;
		}

		ActiveFilters {
			announced: *self,
			blacklist,
			whitelist,
		}
	}
}

/// Filters in effect for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveFilters {
	announced: CategoryFilters,
	blacklist: FilterMask,
	whitelist: FilterMask,
}

impl ActiveFilters {
	/// No filters: every candidate passes.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn is_blocked(&self, candidate: FilterMask) -> bool {
		self.blacklist.intersects(candidate)
	}

	pub fn is_allowed(&self, candidate: FilterMask) -> bool {
		self.announced.whitelist.is_empty() || self.whitelist.intersects(candidate)
	}

	pub fn passes(&self, candidate: FilterMask) -> bool {
		!self.is_blocked(candidate) && self.is_allowed(candidate)
	}

	/// The part of `candidate` worth announcing as available to the user.
	///
	/// Blacklist filters are always announced so the user can reveal what they hide.
	/// Whitelist filters of a hidden candidate are not, since selecting them would show
	/// nothing.
	pub fn announce(&self, candidate: FilterMask) -> FilterMask {
		let blacklisted = candidate & self.announced.blacklist;
		if self.is_blocked(candidate) {
			return blacklisted;
		}
		blacklisted | (candidate & self.announced.whitelist)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEYWORDS: usize = 0;
	const METHODS: usize = 1;
	const FIELDS: usize = 2;

	fn filters() -> CategoryFilters {
		CategoryFilters::new([FilterKind::Blacklist, FilterKind::Whitelist, FilterKind::Whitelist])
	}

	#[test]
	fn no_filters_pass_everything() {
		let active = ActiveFilters::none();
		assert!(active.passes(FilterMask::EMPTY));
		assert!(active.passes(FilterMask::single(5)));
	}

	#[test]
	fn blacklist_hides_unless_selected() {
		let keyword = FilterMask::single(KEYWORDS) | FilterMask::single(METHODS);
		assert!(!filters().activate(FilterMask::EMPTY).passes(keyword));
		assert!(filters().activate(FilterMask::single(KEYWORDS)).passes(keyword));
	}

	#[test]
	fn unselected_whitelist_shows_all_categories() {
		let active = filters().activate(FilterMask::EMPTY);
		assert!(active.passes(FilterMask::single(METHODS)));
		assert!(active.passes(FilterMask::single(FIELDS)));
		assert!(!active.passes(FilterMask::EMPTY));
	}

	#[test]
	fn selected_whitelist_restricts() {
		let active = filters().activate(FilterMask::single(FIELDS));
		assert!(active.passes(FilterMask::single(FIELDS)));
		assert!(!active.passes(FilterMask::single(METHODS)));
	}

	#[test]
	fn mask_helpers() {
		let mask = FilterMask::from_indices([1, 3]);
		assert!(mask.contains(1) && mask.contains(3));
		assert!(!mask.contains(2));
		assert!(!mask.contains(200));
		assert_eq!(filters().activate(FilterMask::EMPTY).announce(FilterMask::from_indices([2, 9])), FilterMask::single(2));
	}

	#[test]
	fn hidden_candidate_announces_only_blacklist_filters() {
		let keyword_method = FilterMask::single(KEYWORDS) | FilterMask::single(METHODS);
		assert_eq!(filters().activate(FilterMask::EMPTY).announce(keyword_method), FilterMask::single(KEYWORDS));
		assert_eq!(filters().activate(FilterMask::single(KEYWORDS)).announce(keyword_method), keyword_method);
	}
}
