// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::{Filter, Slug, SortDirection, SortField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub category_filter: Filter,
    pub status_filter: Filter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub expanded: BTreeSet<Slug>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category_filter: Filter::All,
            status_filter: Filter::All,
            sort_field: SortField::Title,
            sort_direction: SortDirection::Asc,
            expanded: BTreeSet::new(),
        }
    }
}

/// The part of the view state the derived sequence depends on. Expansion is
/// not part of it; toggling rows must not invalidate a cached derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeriveKey {
    pub search_term: String,
    pub category_filter: Filter,
    pub status_filter: Filter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    SetSearchTerm(String),
    PushSearchChar(char),
    PopSearchChar,
    SetCategoryFilter(Filter),
    SetStatusFilter(Filter),
    SortBy(SortField),
    FlipSortDirection,
    ToggleExpansion(Slug),
    ResetFilters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    SearchChanged(String),
    CategoryFilterChanged(Filter),
    StatusFilterChanged(Filter),
    SortChanged(SortField, SortDirection),
    RowExpanded(Slug),
    RowCollapsed(Slug),
    FiltersReset,
}

impl ViewState {
    pub fn derive_key(&self) -> DeriveKey {
        DeriveKey {
            search_term: self.search_term.clone(),
            category_filter: self.category_filter.clone(),
            status_filter: self.status_filter.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        }
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded.contains(slug)
    }

    /// Pure transition: returns the next state and leaves `self` untouched.
    pub fn reduce(&self, command: TableCommand) -> Self {
        let mut next = self.clone();
        next.dispatch(command);
        next
    }

    pub fn dispatch(&mut self, command: TableCommand) -> Vec<TableEvent> {
        match command {
            TableCommand::SetSearchTerm(term) => {
                self.search_term = term;
                vec![TableEvent::SearchChanged(self.search_term.clone())]
            }
            TableCommand::PushSearchChar(value) => {
                self.search_term.push(value);
                vec![TableEvent::SearchChanged(self.search_term.clone())]
            }
            TableCommand::PopSearchChar => {
                if self.search_term.pop().is_none() {
                    return Vec::new();
                }
                vec![TableEvent::SearchChanged(self.search_term.clone())]
            }
            TableCommand::SetCategoryFilter(filter) => {
                self.category_filter = filter;
                vec![TableEvent::CategoryFilterChanged(
                    self.category_filter.clone(),
                )]
            }
            TableCommand::SetStatusFilter(filter) => {
                self.status_filter = filter;
                vec![TableEvent::StatusFilterChanged(self.status_filter.clone())]
            }
            TableCommand::SortBy(field) => {
                self.set_sort_field(field);
                vec![TableEvent::SortChanged(self.sort_field, self.sort_direction)]
            }
            TableCommand::FlipSortDirection => {
                self.sort_direction = self.sort_direction.flipped();
                vec![TableEvent::SortChanged(self.sort_field, self.sort_direction)]
            }
            TableCommand::ToggleExpansion(slug) => {
                if self.toggle_expansion(slug.clone()) {
                    vec![TableEvent::RowExpanded(slug)]
                } else {
                    vec![TableEvent::RowCollapsed(slug)]
                }
            }
            TableCommand::ResetFilters => {
                self.search_term.clear();
                self.category_filter = Filter::All;
                self.status_filter = Filter::All;
                vec![TableEvent::FiltersReset]
            }
        }
    }

    /// Same field flips the direction; a new field starts ascending.
    pub fn set_sort_field(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Returns true when the slug is expanded after the toggle.
    pub fn toggle_expansion(&mut self, slug: Slug) -> bool {
        if self.expanded.remove(&slug) {
            false
        } else {
            self.expanded.insert(slug);
            true
        }
    }
}
