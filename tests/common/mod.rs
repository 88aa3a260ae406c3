#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the binary, isolated from the caller's config files.
pub fn geoaudit(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("geoaudit").expect("binary should exist");
    cmd.current_dir(workdir).env("HOME", workdir).env_remove("RUST_LOG");
    cmd
}

/// A scrape record that passes every SEO and GEO rule.
pub fn rich_page() -> Value {
    json!({
        "title": "How to Optimize Content for AI Search in 2024",
        "metaDescription": "Learn how answer engines choose sources and how short answers, clear headings, schema markup and fresh data help AI tools cite your pages.",
        "headings": [
            { "level": 1, "text": "How to Optimize Content for AI Search" },
            { "level": 2, "text": "What is generative engine optimization?" },
            { "level": 3, "text": "Why does structure matter?" },
            { "level": 2, "text": "How do AI engines choose sources?" },
            { "level": 3, "text": "Key takeaways" }
        ],
        "images": [
            { "src": "/img/a.png", "alt": "Diagram", "hasAlt": true },
            { "src": "/img/b.png", "alt": "Chart", "hasAlt": true }
        ],
        "links": [
            { "href": "/guides", "text": "Guides", "isInternal": true },
            { "href": "https://example.org/research", "text": "Research", "isInternal": false }
        ],
        "content": "TL;DR: Short answers, clear headings and fresh data help AI engines cite your page.\nLast updated June 2024 by the author, Jane Smith.\nWhat is this guide about? It shows how to write pages that Google Search can read.\nAccording to research from Stanford University, 62% of answers quote pages with clear lists.",
        "hasSchema": true,
        "schemaTypes": ["Article", "FAQPage"],
        "loadTime": 1200,
        "wordCount": 320
    })
}

/// A scrape record with every field present and nothing in it.
pub fn bare_page() -> Value {
    json!({
        "title": "",
        "metaDescription": "",
        "headings": [],
        "images": [],
        "links": [],
        "content": "",
        "hasSchema": false,
        "schemaTypes": [],
        "loadTime": 5000,
        "wordCount": 0
    })
}

pub fn write_record(dir: &Path, name: &str, record: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(record).expect("record serializes"))
        .expect("record should write");
    path
}
