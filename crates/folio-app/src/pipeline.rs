// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::{Project, SortDirection, SortField, ViewState};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// An immutable dataset plus the filter options discovered from it. Each
/// `Dataset` gets a fresh revision, which stands in for reference identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    revision: u64,
    projects: Vec<Project>,
    categories: Vec<String>,
    statuses: Vec<String>,
}

impl Dataset {
    pub fn new(projects: Vec<Project>) -> Self {
        let categories = discover_categories(&projects);
        let statuses = discover_statuses(&projects);
        Self {
            revision: NEXT_REVISION.fetch_add(1, AtomicOrdering::Relaxed),
            projects,
            categories,
            statuses,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }
}

pub fn discover_categories(projects: &[Project]) -> Vec<String> {
    distinct_sorted(projects.iter().map(|project| project.category.as_str()))
}

pub fn discover_statuses(projects: &[Project]) -> Vec<String> {
    distinct_sorted(projects.iter().map(|project| project.status.as_str()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Filters, searches and sorts `projects` into a new sequence. The input is
/// never reordered.
pub fn derive_visible_projects<'a>(projects: &'a [Project], view: &ViewState) -> Vec<&'a Project> {
    derive_visible_indices(projects, view)
        .into_iter()
        .map(|index| &projects[index])
        .collect()
}

/// Index form of [`derive_visible_projects`], used for caching.
pub fn derive_visible_indices(projects: &[Project], view: &ViewState) -> Vec<usize> {
    let needle = view.search_term.to_lowercase();
    let mut visible = projects
        .iter()
        .enumerate()
        .filter(|(_, project)| view.category_filter.matches(&project.category))
        .filter(|(_, project)| view.status_filter.matches(&project.status))
        .filter(|(_, project)| matches_search(project, &needle))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();

    // sort_by is stable, so equal keys keep dataset order in both directions.
    visible.sort_by(|left, right| {
        compare_projects(
            &projects[*left],
            &projects[*right],
            view.sort_field,
            view.sort_direction,
        )
    });
    visible
}

/// `needle` must already be lowercased. An empty needle matches everything.
pub fn matches_search(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |value: &str| value.to_lowercase().contains(needle);
    hit(&project.title)
        || hit(&project.description)
        || hit(project.slug.as_str())
        || project.technologies().iter().any(|tech| hit(tech))
        || project.tags().iter().any(|tag| hit(tag))
}

pub fn compare_projects(
    left: &Project,
    right: &Project,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ordering = match field {
        SortField::Title => compare_text(&left.title, &right.title),
        SortField::Category => compare_text(&left.category, &right.category),
        SortField::Status => compare_text(&left.status, &right.status),
        SortField::CreatedDate => left.created_date.cmp(&right.created_date),
        SortField::UpdatedDate => left.updated_date.cmp(&right.updated_date),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{
        Dataset, compare_projects, derive_visible_projects, discover_categories,
        discover_statuses, matches_search,
    };
    use crate::{Filter, Project, Slug, SortDirection, SortField, ViewState};
    use std::cmp::Ordering;
    use time::{Date, Month};

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid date")
    }

    fn project(slug: &str, title: &str, category: &str, status: &str, updated: Date) -> Project {
        Project {
            slug: Slug::from(slug),
            title: title.to_owned(),
            description: format!("{title} description"),
            detailed_description: String::new(),
            category: category.to_owned(),
            status: status.to_owned(),
            created_date: date(2022, Month::June, 1),
            updated_date: updated,
            duration: "2 weeks".to_owned(),
            technologies: None,
            features: None,
            tags: None,
            links: None,
        }
    }

    fn alpha_beta() -> Vec<Project> {
        vec![
            project(
                "a",
                "Alpha",
                "code",
                "completed",
                date(2023, Month::January, 1),
            ),
            project(
                "b",
                "Beta",
                "cad",
                "in-progress",
                date(2024, Month::January, 1),
            ),
        ]
    }

    fn slugs(projects: &[&Project]) -> Vec<String> {
        projects
            .iter()
            .map(|project| project.slug.to_string())
            .collect()
    }

    #[test]
    fn category_filter_keeps_exact_matches() {
        let data = alpha_beta();
        let view = ViewState {
            category_filter: Filter::parse("cad"),
            ..ViewState::default()
        };
        assert_eq!(slugs(&derive_visible_projects(&data, &view)), vec!["b"]);
    }

    #[test]
    fn default_sort_orders_by_title_ascending() {
        let mut data = alpha_beta();
        data.reverse();
        let visible = derive_visible_projects(&data, &ViewState::default());
        assert_eq!(slugs(&visible), vec!["a", "b"]);
    }

    #[test]
    fn updated_date_descending_puts_newest_first() {
        let data = alpha_beta();
        let view = ViewState {
            sort_field: SortField::UpdatedDate,
            sort_direction: SortDirection::Desc,
            ..ViewState::default()
        };
        assert_eq!(slugs(&derive_visible_projects(&data, &view)), vec!["b", "a"]);
    }

    #[test]
    fn unmatched_search_yields_empty_sequence() {
        let data = alpha_beta();
        let view = ViewState {
            search_term: "zzz-nomatch".to_owned(),
            ..ViewState::default()
        };
        assert!(derive_visible_projects(&data, &view).is_empty());
    }

    #[test]
    fn missing_tags_neither_fail_nor_match() {
        let mut data = alpha_beta();
        data[1].tags = Some(vec!["robotics".to_owned()]);
        assert!(data[0].tags.is_none());

        let view = ViewState {
            search_term: "robotics".to_owned(),
            ..ViewState::default()
        };
        assert_eq!(slugs(&derive_visible_projects(&data, &view)), vec!["b"]);
    }

    #[test]
    fn search_is_case_insensitive_across_technologies() {
        let mut data = alpha_beta();
        data[0].technologies = Some(vec!["React".to_owned()]);

        let upper = ViewState {
            search_term: "REACT".to_owned(),
            ..ViewState::default()
        };
        let lower = ViewState {
            search_term: "react".to_owned(),
            ..ViewState::default()
        };
        let upper_hits = derive_visible_projects(&data, &upper);
        assert_eq!(slugs(&upper_hits), vec!["a"]);
        assert_eq!(upper_hits, derive_visible_projects(&data, &lower));
    }

    #[test]
    fn search_covers_title_description_and_slug() {
        let data = alpha_beta();
        assert!(matches_search(&data[0], "alp"));
        assert!(matches_search(&data[0], "description"));
        assert!(matches_search(&data[1], "b"));
        assert!(!matches_search(&data[1], "alpha"));
        assert!(matches_search(&data[1], ""));
    }

    #[test]
    fn filters_compose_with_and() {
        let mut data = alpha_beta();
        data.push(project(
            "c",
            "Gamma",
            "cad",
            "completed",
            date(2024, Month::March, 3),
        ));
        let view = ViewState {
            category_filter: Filter::parse("cad"),
            status_filter: Filter::parse("completed"),
            ..ViewState::default()
        };
        assert_eq!(slugs(&derive_visible_projects(&data, &view)), vec!["c"]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let data = alpha_beta();
        let view = ViewState {
            sort_field: SortField::Status,
            sort_direction: SortDirection::Desc,
            ..ViewState::default()
        };
        assert_eq!(
            derive_visible_projects(&data, &view),
            derive_visible_projects(&data, &view)
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut data = alpha_beta();
        data[0].tags = Some(vec!["shared".to_owned()]);
        data[1].tags = Some(vec!["Shared".to_owned()]);
        let view = ViewState {
            search_term: "shared".to_owned(),
            status_filter: Filter::parse("completed"),
            ..ViewState::default()
        };

        let once = derive_visible_projects(&data, &view)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = derive_visible_projects(&once, &view)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let day = date(2024, Month::May, 5);
        let data = vec![
            project("first", "Same", "code", "completed", day),
            project("second", "same", "cad", "completed", day),
            project("third", "SAME", "code", "completed", day),
        ];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            for field in [SortField::Title, SortField::Status, SortField::UpdatedDate] {
                let view = ViewState {
                    sort_field: field,
                    sort_direction: direction,
                    ..ViewState::default()
                };
                assert_eq!(
                    slugs(&derive_visible_projects(&data, &view)),
                    vec!["first", "second", "third"],
                    "field {field:?} direction {direction:?}"
                );
            }
        }
    }

    #[test]
    fn flipping_direction_reverses_unique_keys() {
        let data = vec![
            project("m", "mango", "code", "completed", date(2021, Month::May, 1)),
            project("a", "Apple", "code", "completed", date(2023, Month::May, 1)),
            project("k", "kiwi", "code", "completed", date(2022, Month::May, 1)),
        ];
        for field in [SortField::Title, SortField::UpdatedDate] {
            let asc = ViewState {
                sort_field: field,
                ..ViewState::default()
            };
            let desc = ViewState {
                sort_direction: SortDirection::Desc,
                ..asc.clone()
            };
            let mut forward = slugs(&derive_visible_projects(&data, &asc));
            forward.reverse();
            assert_eq!(forward, slugs(&derive_visible_projects(&data, &desc)));
        }
    }

    #[test]
    fn dates_sort_chronologically_not_lexically() {
        let early = project("early", "x", "code", "completed", date(999, Month::December, 31));
        let late = project("late", "y", "code", "completed", date(2000, Month::January, 1));
        assert_eq!(
            compare_projects(&early, &late, SortField::UpdatedDate, SortDirection::Asc),
            Ordering::Less
        );

        let mut created_late = early.clone();
        created_late.created_date = date(2030, Month::January, 1);
        assert_eq!(
            compare_projects(&created_late, &late, SortField::CreatedDate, SortDirection::Asc),
            Ordering::Greater
        );
    }

    #[test]
    fn derivation_does_not_reorder_the_input() {
        let mut data = alpha_beta();
        data.reverse();
        let before = data.clone();
        let _ = derive_visible_projects(&data, &ViewState::default());
        assert_eq!(data, before);
    }

    #[test]
    fn discovery_returns_sorted_distinct_values() {
        let mut data = alpha_beta();
        data.push(project(
            "c",
            "Gamma",
            "code",
            "on-hold",
            date(2024, Month::March, 3),
        ));
        assert_eq!(discover_categories(&data), vec!["cad", "code"]);
        assert_eq!(
            discover_statuses(&data),
            vec!["completed", "in-progress", "on-hold"]
        );
    }

    #[test]
    fn each_dataset_gets_a_new_revision() {
        let first = Dataset::new(alpha_beta());
        let second = Dataset::new(alpha_beta());
        assert_ne!(first.revision(), second.revision());
        assert_eq!(first.categories(), &["cad".to_owned(), "code".to_owned()]);
        assert_eq!(first.len(), 2);
    }
}
