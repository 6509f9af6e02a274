// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

use crate::ids::Slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub status: String,
    pub created_date: Date,
    pub updated_date: Date,
    pub duration: String,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub links: Option<BTreeMap<String, String>>,
}

impl Project {
    pub fn technologies(&self) -> &[String] {
        self.technologies.as_deref().unwrap_or(&[])
    }

    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or(&[])
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Links in label order. Absent and empty maps both yield nothing.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .flatten()
            .map(|(label, url)| (label.as_str(), url.as_str()))
    }

    pub fn has_links(&self) -> bool {
        self.links.as_ref().is_some_and(|links| !links.is_empty())
    }
}

/// Category values are open-set; only these get dedicated styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Code,
    Cad,
    Hardware,
    Other,
}

impl CategoryKind {
    pub const KNOWN: [Self; 3] = [Self::Code, Self::Cad, Self::Hardware];

    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Code => Some("code"),
            Self::Cad => Some("cad"),
            Self::Hardware => Some("hardware"),
            Self::Other => None,
        }
    }

    pub fn classify(value: &str) -> Self {
        match value {
            "code" => Self::Code,
            "cad" => Self::Cad,
            "hardware" => Self::Hardware,
            _ => Self::Other,
        }
    }
}

/// Status values are open-set; only these get an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Completed,
    InProgress,
    OnHold,
    Other,
}

impl StatusKind {
    pub const KNOWN: [Self; 3] = [Self::Completed, Self::InProgress, Self::OnHold];

    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Completed => Some("completed"),
            Self::InProgress => Some("in-progress"),
            Self::OnHold => Some("on-hold"),
            Self::Other => None,
        }
    }

    pub fn classify(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "in-progress" => Self::InProgress,
            "on-hold" => Self::OnHold,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Title,
    Category,
    Status,
    CreatedDate,
    UpdatedDate,
}

impl SortField {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Category,
        Self::Status,
        Self::CreatedDate,
        Self::UpdatedDate,
    ];

    /// Fields offered as column headers and in the narrow sort selector.
    pub const OFFERED: [Self; 4] = [Self::Title, Self::Category, Self::Status, Self::UpdatedDate];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Status => "status",
            Self::CreatedDate => "createdDate",
            Self::UpdatedDate => "updatedDate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "status" => Some(Self::Status),
            "createdDate" => Some(Self::CreatedDate),
            "updatedDate" => Some(Self::UpdatedDate),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Category => "Category",
            Self::Status => "Status",
            Self::CreatedDate => "Created",
            Self::UpdatedDate => "Last Updated",
        }
    }

    pub const fn header_label(self) -> &'static str {
        match self {
            Self::Title => "Project Title",
            other => other.label(),
        }
    }

    pub const fn is_date(self) -> bool {
        matches!(self, Self::CreatedDate | Self::UpdatedDate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A filter on one open-set dimension. `All` is the "no restriction" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parses a selector value; the literal `"all"` maps to the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Only(value) => value,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}
