// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;
use tracing::debug;

use crate::display::{detail_href, results_summary};
use crate::{
    Dataset, DeriveKey, Filter, Project, TableCommand, TableEvent, ViewState,
    derive_visible_indices,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeriveCache {
    revision: u64,
    key: DeriveKey,
    indices: Vec<usize>,
}

/// One table instance: an immutable dataset, the view state over it, and the
/// memoized derived sequence.
#[derive(Debug, Clone)]
pub struct ProjectTable {
    dataset: Arc<Dataset>,
    base_path: String,
    view: ViewState,
    cache: DeriveCache,
    recomputations: usize,
}

impl ProjectTable {
    pub fn new(dataset: Arc<Dataset>, base_path: impl Into<String>) -> Self {
        let view = ViewState::default();
        let cache = DeriveCache {
            revision: dataset.revision(),
            key: view.derive_key(),
            indices: derive_visible_indices(dataset.projects(), &view),
        };
        Self {
            dataset,
            base_path: base_path.into(),
            view,
            cache,
            recomputations: 1,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Number of times the derived sequence has been computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn dispatch(&mut self, command: TableCommand) -> Vec<TableEvent> {
        debug!(?command, "table command");
        let events = self.view.dispatch(command);
        self.refresh();
        events
    }

    /// Swaps in a dataset. A different dataset identity resets the view
    /// state; the same identity keeps it. Returns whether a reset happened.
    pub fn replace_dataset(&mut self, dataset: Arc<Dataset>) -> bool {
        let reset = dataset.revision() != self.dataset.revision();
        self.dataset = dataset;
        if reset {
            debug!(revision = self.dataset.revision(), "dataset replaced; view reset");
            self.view = ViewState::default();
        }
        self.refresh();
        reset
    }

    fn refresh(&mut self) {
        let key = self.view.derive_key();
        if self.cache.revision == self.dataset.revision() && self.cache.key == key {
            return;
        }
        self.cache = DeriveCache {
            revision: self.dataset.revision(),
            indices: derive_visible_indices(self.dataset.projects(), &self.view),
            key,
        };
        self.recomputations += 1;
        debug!(
            visible = self.cache.indices.len(),
            total = self.dataset.len(),
            "derived view recomputed"
        );
    }

    pub fn visible(&self) -> impl Iterator<Item = &Project> {
        let projects = self.dataset.projects();
        self.cache.indices.iter().map(move |index| &projects[*index])
    }

    pub fn visible_len(&self) -> usize {
        self.cache.indices.len()
    }

    pub fn category_options(&self) -> Vec<Filter> {
        filter_options(self.dataset.categories())
    }

    pub fn status_options(&self) -> Vec<Filter> {
        filter_options(self.dataset.statuses())
    }

    /// Read-only projection shared by every renderer.
    pub fn projection(&self) -> TableView<'_> {
        let rows = self
            .visible()
            .map(|project| RowView {
                project,
                expanded: self.view.is_expanded(project.slug.as_str()),
                href: detail_href(&self.base_path, project.slug.as_str()),
            })
            .collect();
        TableView {
            view: &self.view,
            rows,
            total: self.dataset.len(),
            categories: self.dataset.categories(),
            statuses: self.dataset.statuses(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub project: &'a Project,
    pub expanded: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub view: &'a ViewState,
    pub rows: Vec<RowView<'a>>,
    pub total: usize,
    pub categories: &'a [String],
    pub statuses: &'a [String],
}

impl TableView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> String {
        results_summary(self.rows.len(), self.total)
    }
}

/// Selector options: the `All` sentinel followed by the discovered values.
pub fn filter_options(values: &[String]) -> Vec<Filter> {
    std::iter::once(Filter::All)
        .chain(values.iter().cloned().map(Filter::Only))
        .collect()
}

/// Steps through `All` plus `values`, wrapping. A current value that is not
/// among the options steps from `All`.
pub fn cycle_filter(values: &[String], current: &Filter, delta: isize) -> Filter {
    let options = filter_options(values);
    let position = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0) as isize;
    let len = options.len() as isize;
    let next = (position + delta).rem_euclid(len) as usize;
    options[next].clone()
}
