// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use folio_app::{Project, Slug};

use crate::RawProject;

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    MissingSlug { index: usize },
    DuplicateSlug { slug: String },
    MissingTitle { slug: String },
    InvalidDate {
        slug: String,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSlug { index } => {
                write!(f, "project #{index} has an empty slug")
            }
            Self::DuplicateSlug { slug } => {
                write!(f, "slug {slug:?} is used by more than one project")
            }
            Self::MissingTitle { slug } => {
                write!(f, "project {slug:?} has an empty title")
            }
            Self::InvalidDate { slug, field, value } => write!(
                f,
                "project {slug:?} has invalid {field} {value:?}; use {DATE_LAYOUT} or an RFC 3339 timestamp"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

pub fn validate_projects(raw: Vec<RawProject>) -> CatalogResult<Vec<Project>> {
    let mut seen = BTreeSet::new();
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let project = validate_project(index, record)?;
            if !seen.insert(project.slug.clone()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: project.slug.to_string(),
                });
            }
            Ok(project)
        })
        .collect()
}

fn validate_project(index: usize, raw: RawProject) -> CatalogResult<Project> {
    let slug = raw.slug.trim();
    if slug.is_empty() {
        return Err(CatalogError::MissingSlug { index });
    }
    if raw.title.trim().is_empty() {
        return Err(CatalogError::MissingTitle {
            slug: slug.to_owned(),
        });
    }

    let created_date = parse_catalog_date(&raw.created_date).ok_or_else(|| {
        CatalogError::InvalidDate {
            slug: slug.to_owned(),
            field: "createdDate",
            value: raw.created_date.clone(),
        }
    })?;
    let updated_date = parse_catalog_date(&raw.updated_date).ok_or_else(|| {
        CatalogError::InvalidDate {
            slug: slug.to_owned(),
            field: "updatedDate",
            value: raw.updated_date.clone(),
        }
    })?;

    Ok(Project {
        slug: Slug::new(slug),
        title: raw.title,
        description: raw.description,
        detailed_description: raw.detailed_description,
        category: raw.category,
        status: raw.status,
        created_date,
        updated_date,
        duration: raw.duration,
        technologies: raw.technologies,
        features: raw.features,
        tags: raw.tags,
        links: raw.links,
    })
}

/// Accepts a calendar date, an RFC 3339 timestamp, or an offset-less
/// `YYYY-MM-DDTHH:MM:SS` timestamp. Timestamps keep only their date.
pub fn parse_catalog_date(input: &str) -> Option<Date> {
    let trimmed = input.trim();
    if let Ok(date) = Date::parse(trimmed, &format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }
    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(timestamp.date());
    }
    PrimitiveDateTime::parse(
        trimmed,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
    .map(PrimitiveDateTime::date)
}
