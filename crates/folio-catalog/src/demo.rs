// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use folio_app::{Project, Slug};
use std::collections::BTreeMap;
use time::Date;
use time::macros::date;

struct DemoRecord {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    detailed_description: &'static str,
    category: &'static str,
    status: &'static str,
    created: Date,
    updated: Date,
    duration: &'static str,
    technologies: &'static [&'static str],
    features: &'static [&'static str],
    tags: &'static [&'static str],
    links: &'static [(&'static str, &'static str)],
}

const DEMO: [DemoRecord; 8] = [
    DemoRecord {
        slug: "tide-logger",
        title: "Tide Logger",
        description: "Solar powered tide gauge that posts readings every ten minutes.",
        detailed_description: "An ultrasonic range finder on a piling, an ESP32, and a small \
            solar panel. Readings are buffered to flash when the uplink drops and replayed later.",
        category: "hardware",
        status: "completed",
        created: date!(2022 - 03 - 14),
        updated: date!(2023 - 08 - 02),
        duration: "5 months",
        technologies: &["ESP32", "C++", "LoRa"],
        features: &["Ultrasonic ranging", "Store and forward", "Solar charging"],
        tags: &["iot", "ocean"],
        links: &[("github", "https://github.com/example/tide-logger")],
    },
    DemoRecord {
        slug: "reef-map",
        title: "Reef Map",
        description: "Interactive map of dive sites with visibility reports.",
        detailed_description: "Static site that renders community visibility reports on a \
            vector map, rebuilt nightly from a shared spreadsheet.",
        category: "code",
        status: "in-progress",
        created: date!(2023 - 05 - 20),
        updated: date!(2024 - 11 - 03),
        duration: "ongoing",
        technologies: &["React", "TypeScript", "MapLibre"],
        features: &["Offline tiles", "Report filtering"],
        tags: &["web", "diving"],
        links: &[
            ("demo", "https://example.com/reef-map"),
            ("github", "https://github.com/example/reef-map"),
        ],
    },
    DemoRecord {
        slug: "kayak-rudder",
        title: "Kayak Rudder Bracket",
        description: "Parametric bracket for retrofitting a rudder to a sea kayak.",
        detailed_description: "Modeled for printing in PETG with the pin bore sized from a \
            single parameter so it fits several hull sterns.",
        category: "cad",
        status: "completed",
        created: date!(2021 - 07 - 01),
        updated: date!(2021 - 09 - 12),
        duration: "6 weeks",
        technologies: &["FreeCAD", "PETG"],
        features: &["Parametric pin bore", "Tool-free mount"],
        tags: &["3d-printing", "boating"],
        links: &[],
    },
    DemoRecord {
        slug: "wave-synth",
        title: "wave synth",
        description: "Browser synthesizer driven by live buoy data.",
        detailed_description: "",
        category: "code",
        status: "on-hold",
        created: date!(2022 - 11 - 11),
        updated: date!(2023 - 01 - 30),
        duration: "3 months",
        technologies: &["Web Audio", "JavaScript"],
        features: &[],
        tags: &[],
        links: &[],
    },
    DemoRecord {
        slug: "dock-lights",
        title: "Dock Lights",
        description: "Motion activated LED strip for a floating dock.",
        detailed_description: "Waterproof enclosure, PIR sensor and a MOSFET driver with a \
            dusk-to-dawn light sensor.",
        category: "hardware",
        status: "in-progress",
        created: date!(2024 - 02 - 02),
        updated: date!(2024 - 06 - 18),
        duration: "ongoing",
        technologies: &["ATtiny85", "KiCad"],
        features: &["Dusk sensing", "IP67 enclosure"],
        tags: &["lighting"],
        links: &[("schematic", "https://example.com/dock-lights.pdf")],
    },
    DemoRecord {
        slug: "hull-fairing",
        title: "Hull Fairing Study",
        description: "Surface continuity study for a plywood dinghy.",
        detailed_description: "Compared G1 and G2 lofted surfaces against the original \
            offsets table.",
        category: "cad",
        status: "archived",
        created: date!(2020 - 04 - 04),
        updated: date!(2020 - 06 - 30),
        duration: "2 months",
        technologies: &["Rhino"],
        features: &[],
        tags: &["boating"],
        links: &[],
    },
    DemoRecord {
        slug: "surf-forecast-notes",
        title: "Surf Forecast Notes",
        description: "Write-up on reading swell period and direction charts.",
        detailed_description: "",
        category: "writing",
        status: "completed",
        created: date!(2023 - 10 - 10),
        updated: date!(2023 - 10 - 24),
        duration: "2 weeks",
        technologies: &[],
        features: &[],
        tags: &["ocean", "guide"],
        links: &[("post", "https://example.com/blog/surf-forecast")],
    },
    DemoRecord {
        slug: "portfolio-site",
        title: "Portfolio Site",
        description: "This portfolio: project table, dark mode and case studies.",
        detailed_description: "Static site with a sortable, filterable project table and \
            per-project detail pages.",
        category: "code",
        status: "in-progress",
        created: date!(2024 - 01 - 08),
        updated: date!(2025 - 02 - 14),
        duration: "ongoing",
        technologies: &["Astro", "React", "Tailwind"],
        features: &["Search", "Responsive cards", "Dark mode"],
        tags: &["web"],
        links: &[("github", "https://github.com/example/portfolio")],
    },
];

/// Fixed dataset for `--demo` runs. Empty lists are left absent, the same
/// way a sparse catalog file would leave them.
pub fn demo_projects() -> Vec<Project> {
    DEMO.iter().map(project_from_record).collect()
}

fn project_from_record(record: &DemoRecord) -> Project {
    Project {
        slug: Slug::from(record.slug),
        title: record.title.to_owned(),
        description: record.description.to_owned(),
        detailed_description: record.detailed_description.to_owned(),
        category: record.category.to_owned(),
        status: record.status.to_owned(),
        created_date: record.created,
        updated_date: record.updated,
        duration: record.duration.to_owned(),
        technologies: owned_list(record.technologies),
        features: owned_list(record.features),
        tags: owned_list(record.tags),
        links: (!record.links.is_empty()).then(|| {
            record.links
                .iter()
                .map(|(label, url)| ((*label).to_owned(), (*url).to_owned()))
                .collect::<BTreeMap<_, _>>()
        }),
    }
}

fn owned_list(values: &[&str]) -> Option<Vec<String>> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|value| (*value).to_owned()).collect())
}
