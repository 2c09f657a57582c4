//! Filtering and pagination of the launch list.
//!
//! Everything here is a pure function of its inputs and is recomputed every
//! frame, so the visible page can never drift from the filters, the favorite
//! set or the fetched data.

use crate::api::Launch;
use crate::prefs::FavoriteSet;

/// Launches shown per page
pub const PAGE_SIZE: usize = 8;

/// User-selected filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Debounced search text; empty matches everything
    pub search: String,
    /// Selected UTC year; `None` means all years
    pub year: Option<i32>,
    pub only_successful: bool,
    pub only_favorites: bool,
}

impl FilterState {
    /// Whether `launch` passes every active filter
    pub fn matches(&self, launch: &Launch, favorites: &FavoriteSet) -> bool {
        let matches_search = self.search.is_empty()
            || launch
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_year = self.year.is_none_or(|year| launch.year() == year);
        let matches_success = !self.only_successful || launch.success == Some(true);
        let matches_favorites = !self.only_favorites || favorites.contains(&launch.id);

        matches_search && matches_year && matches_success && matches_favorites
    }
}

/// Distinct launch years, newest first
pub fn available_years(launches: &[Launch]) -> Vec<i32> {
    let mut years: Vec<i32> = launches.iter().map(Launch::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Launches passing `filter`, in source order
pub fn filter_launches<'a>(
    launches: &'a [Launch],
    filter: &FilterState,
    favorites: &FavoriteSet,
) -> Vec<&'a Launch> {
    launches
        .iter()
        .filter(|launch| filter.matches(launch, favorites))
        .collect()
}

/// One page of a filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown (after clamping)
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Page numbers for the numbered pagination buttons
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Slice out page `page` (1-based) of `items`.
///
/// Out-of-range page numbers are clamped to the nearest valid page, so a
/// filter change that shrinks the list never strands the view on an empty
/// page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let number = page.clamp(1, total_pages.max(1));

    let items = items
        .into_iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::launch;

    fn sample() -> Vec<Launch> {
        vec![
            launch("1", "FalconSat", "2006-03-24T22:30:00Z", Some(false)),
            launch("2", "DemoSat", "2007-03-21T01:10:00Z", Some(false)),
            launch("3", "RatSat", "2008-09-28T23:15:00Z", Some(true)),
            launch("4", "Starlink-1 (v1.0)", "2019-11-11T14:56:00Z", Some(true)),
            launch("5", "Crew-1", "2020-11-16T00:27:00Z", Some(true)),
            launch("6", "Starlink-15 (v1.0)", "2020-10-24T15:31:00Z", Some(true)),
            launch("7", "USSF-44", "2022-11-01T13:41:00Z", None),
        ]
    }

    fn names(launches: &[&Launch]) -> Vec<String> {
        launches.iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let launches = sample();
        let result = filter_launches(&launches, &FilterState::default(), &FavoriteSet::default());
        assert_eq!(result.len(), launches.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let launches = sample();
        let filter = FilterState {
            search: "STARLINK".to_string(),
            ..Default::default()
        };

        let result = filter_launches(&launches, &filter, &FavoriteSet::default());
        assert_eq!(names(&result), vec!["Starlink-1 (v1.0)", "Starlink-15 (v1.0)"]);

        let filter = FilterState {
            search: "sat".to_string(),
            ..Default::default()
        };
        let result = filter_launches(&launches, &filter, &FavoriteSet::default());
        assert_eq!(names(&result), vec!["FalconSat", "DemoSat", "RatSat"]);
    }

    #[test]
    fn test_search_is_not_tokenized() {
        let launches = sample();
        let filter = FilterState {
            search: "link-1 (v".to_string(),
            ..Default::default()
        };

        let result = filter_launches(&launches, &filter, &FavoriteSet::default());
        assert_eq!(names(&result), vec!["Starlink-1 (v1.0)", "Starlink-15 (v1.0)"]);
    }

    #[test]
    fn test_year_filter() {
        let launches = sample();
        let filter = FilterState {
            year: Some(2020),
            ..Default::default()
        };

        let result = filter_launches(&launches, &filter, &FavoriteSet::default());
        assert_eq!(names(&result), vec!["Crew-1", "Starlink-15 (v1.0)"]);
        assert!(result.iter().all(|l| l.year() == 2020));
    }

    #[test]
    fn test_available_years_desc_unique() {
        let years = available_years(&sample());
        assert_eq!(years, vec![2022, 2020, 2019, 2008, 2007, 2006]);
        assert!(!years.contains(&2021));
    }

    #[test]
    fn test_only_successful_excludes_unknown_and_failed() {
        let launches = sample();
        let mut filter = FilterState {
            only_successful: true,
            ..Default::default()
        };

        let result = filter_launches(&launches, &filter, &FavoriteSet::default());
        assert!(result.iter().all(|l| l.success == Some(true)));
        assert_eq!(result.len(), 4);

        // Toggling off and on again yields the same set
        filter.only_successful = false;
        assert_eq!(filter_launches(&launches, &filter, &FavoriteSet::default()).len(), 7);
        filter.only_successful = true;
        assert_eq!(names(&filter_launches(&launches, &filter, &FavoriteSet::default())), names(&result));
    }

    #[test]
    fn test_only_favorites() {
        let launches = sample();
        let favorites = FavoriteSet::default().toggled("7").toggled("2");
        let filter = FilterState {
            only_favorites: true,
            ..Default::default()
        };

        let result = filter_launches(&launches, &filter, &favorites);
        assert_eq!(names(&result), vec!["DemoSat", "USSF-44"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let launches = sample();
        let favorites = FavoriteSet::default().toggled("5").toggled("6").toggled("1");
        let filter = FilterState {
            search: "starlink".to_string(),
            year: Some(2020),
            only_successful: true,
            only_favorites: true,
        };

        let result = filter_launches(&launches, &filter, &favorites);
        assert_eq!(names(&result), vec!["Starlink-15 (v1.0)"]);
    }

    #[test]
    fn test_paginate_ten_items() {
        let items: Vec<u32> = (1..=10).collect();

        let first = paginate(items.clone(), 1, PAGE_SIZE);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let second = paginate(items, 2, PAGE_SIZE);
        assert_eq!(second.items, vec![9, 10]);
        assert!(second.has_prev());
        assert!(!second.has_next());
        assert_eq!(second.page_numbers().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_paginate_clamps_out_of_range() {
        let page = paginate((1..=10).collect::<Vec<u32>>(), 7, PAGE_SIZE);
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![9, 10]);

        let page = paginate((1..=3).collect::<Vec<u32>>(), 0, PAGE_SIZE);
        assert_eq!(page.number, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::<u32>::new(), 3, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.page_numbers().count(), 0);
    }
}
