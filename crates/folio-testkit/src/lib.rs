// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use folio_app::{Project, Slug};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::path::PathBuf;
use time::macros::format_description;
use time::{Date, Duration, Month};

const CATEGORIES: [&str; 4] = ["code", "cad", "hardware", "writing"];
const STATUSES: [&str; 4] = ["completed", "in-progress", "on-hold", "archived"];

const TITLE_NOUNS: [&str; 12] = [
    "Logger", "Tracker", "Bracket", "Synth", "Dashboard", "Enclosure", "Parser", "Mount",
    "Controller", "Planner", "Notes", "Studio",
];
const TITLE_ADJECTIVES: [&str; 10] = [
    "Tide", "Reef", "Harbor", "Lagoon", "Coral", "Drift", "Swell", "Kelp", "Dune", "Current",
];
const TECHNOLOGIES: [&str; 12] = [
    "Rust", "React", "TypeScript", "Python", "FreeCAD", "KiCad", "ESP32", "Astro", "Tailwind",
    "PostgreSQL", "Fusion 360", "C++",
];
const TAGS: [&str; 8] = [
    "web", "ocean", "iot", "boating", "3d-printing", "guide", "audio", "lighting",
];
const WORDS: [&str; 20] = [
    "sensor", "map", "buoy", "hull", "signal", "panel", "tile", "report", "surface", "stream",
    "chart", "cable", "frame", "board", "current", "light", "layer", "mesh", "model", "sail",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of plausible portfolio projects. Slugs are unique per
/// faker instance.
#[derive(Debug, Clone)]
pub struct ProjectFaker {
    rng: DeterministicRng,
    issued: usize,
}

impl ProjectFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            issued: 0,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn project(&mut self) -> Project {
        let title = format!(
            "{} {}",
            self.pick(&TITLE_ADJECTIVES),
            self.pick(&TITLE_NOUNS)
        );
        self.issued += 1;
        let slug = format!("{}-{}", slugify(&title), self.issued);

        let created_date = self.date_between(fixture_date(2019, Month::January, 1), 6 * 365);
        let updated_date = created_date + Duration::days(self.rng.int_n(400) as i64);

        Project {
            slug: Slug::new(slug),
            title,
            description: self.sentence(6, 14),
            detailed_description: if self.rng.bool() {
                self.sentence(12, 30)
            } else {
                String::new()
            },
            category: self.pick(&CATEGORIES).to_owned(),
            status: self.pick(&STATUSES).to_owned(),
            created_date,
            updated_date,
            duration: format!("{} weeks", 1 + self.rng.int_n(30)),
            technologies: self.optional_list(&TECHNOLOGIES, 4),
            features: if self.rng.bool() {
                Some((0..1 + self.rng.int_n(3)).map(|_| self.sentence(2, 4)).collect())
            } else {
                None
            },
            tags: self.optional_list(&TAGS, 3),
            links: if self.rng.bool() {
                let mut links = BTreeMap::new();
                links.insert(
                    "github".to_owned(),
                    format!("https://github.com/example/{}", self.issued),
                );
                Some(links)
            } else {
                None
            },
        }
    }

    pub fn projects(&mut self, count: usize) -> Vec<Project> {
        (0..count).map(|_| self.project()).collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn optional_list(&mut self, items: &[&str], max: usize) -> Option<Vec<String>> {
        if !self.rng.bool() {
            return None;
        }
        let count = 1 + self.rng.int_n(max);
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let value = self.pick(items).to_owned();
            if !picked.contains(&value) {
                picked.push(value);
            }
        }
        Some(picked)
    }

    fn date_between(&mut self, start: Date, span_days: usize) -> Date {
        start + Duration::days(self.rng.int_n(span_days) as i64)
    }

    fn sentence(&mut self, min_words: usize, max_words: usize) -> String {
        let span = max_words.saturating_sub(min_words) + 1;
        let count = min_words + self.rng.int_n(span);
        let words = (0..count)
            .map(|_| self.pick(&WORDS))
            .collect::<Vec<_>>()
            .join(" ");
        let mut chars = words.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

pub fn fixture_date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("fixture date is valid")
}

/// Minimal project with every optional list absent.
pub fn sample_project(
    slug: &str,
    title: &str,
    category: &str,
    status: &str,
    updated_date: Date,
) -> Project {
    Project {
        slug: Slug::from(slug),
        title: title.to_owned(),
        description: format!("{title} description"),
        detailed_description: String::new(),
        category: category.to_owned(),
        status: status.to_owned(),
        created_date: fixture_date(2022, Month::June, 1),
        updated_date,
        duration: String::new(),
        technologies: None,
        features: None,
        tags: None,
        links: None,
    }
}

/// The two-project dataset used across scenario tests.
pub fn alpha_beta() -> Vec<Project> {
    vec![
        sample_project(
            "alpha",
            "Alpha",
            "code",
            "completed",
            fixture_date(2023, Month::January, 1),
        ),
        sample_project(
            "beta",
            "Beta",
            "cad",
            "in-progress",
            fixture_date(2024, Month::January, 1),
        ),
    ]
}

/// Serializes projects in the catalog file's JSON shape.
pub fn catalog_json(projects: &[Project]) -> Result<String> {
    let layout = format_description!("[year]-[month]-[day]");
    let mut records = Vec::with_capacity(projects.len());
    for project in projects {
        let mut record = Map::new();
        record.insert("slug".to_owned(), json!(project.slug.as_str()));
        record.insert("title".to_owned(), json!(project.title));
        record.insert("description".to_owned(), json!(project.description));
        record.insert(
            "detailedDescription".to_owned(),
            json!(project.detailed_description),
        );
        record.insert("category".to_owned(), json!(project.category));
        record.insert("status".to_owned(), json!(project.status));
        record.insert(
            "createdDate".to_owned(),
            json!(project.created_date.format(&layout)?),
        );
        record.insert(
            "updatedDate".to_owned(),
            json!(project.updated_date.format(&layout)?),
        );
        record.insert("duration".to_owned(), json!(project.duration));
        if let Some(values) = &project.technologies {
            record.insert("technologies".to_owned(), json!(values));
        }
        if let Some(values) = &project.features {
            record.insert("features".to_owned(), json!(values));
        }
        if let Some(values) = &project.tags {
            record.insert("tags".to_owned(), json!(values));
        }
        if let Some(links) = &project.links {
            record.insert("links".to_owned(), json!(links));
        }
        records.push(Value::Object(record));
    }
    serde_json::to_string_pretty(&Value::Array(records)).context("serialize catalog JSON")
}

pub fn temp_catalog_path(file_name: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join(file_name);
    Ok((dir, path))
}

fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
