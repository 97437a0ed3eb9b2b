//! Maud HTML for the per-person pages and the map page.
//!
//! Every piece of record text goes through Maud's escaping; nothing from the
//! CSV is emitted as `PreEscaped`.

use maud::{DOCTYPE, Markup, html};
use memorial_data::{MAP_FILE, MemorialRecord};

use crate::SiteConfig;

/// Render the page for one person.
///
/// Optional parts of the record that are absent leave no element behind:
/// no years paragraph, no figures, no story paragraphs.
pub fn render_page(record: &MemorialRecord, config: &SiteConfig) -> String {
    person_page(record, config).into_string()
}

/// Render the map page listing every record in the order given.
pub fn render_map(records: &[MemorialRecord], config: &SiteConfig) -> String {
    map_page(records, config).into_string()
}

fn person_page(record: &MemorialRecord, config: &SiteConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { "In Memory of " (record.name) }
                meta name="description" content=(format!("A short remembrance of {}.", record.name));
                link rel="stylesheet" href="../../assets/style.css";
                meta name="robots" content="noindex,follow";
            }
            body {
                a class="skip" href="#content" { "Skip to content" }
                header {
                    h1 { "In Memory of " (record.name) }
                }
                main id="content" {
                    @if let Some(years) = &record.years {
                        p class="small" { (years) }
                    }
                    @for image in &record.images {
                        figure {
                            img src=(format!("../../{}", image.path))
                                alt=(image.alt_text())
                                loading="lazy"
                                decoding="async";
                        }
                    }
                    @for paragraph in record.story_paragraphs() {
                        p { (paragraph) }
                    }
                    p class="small" {
                        a href=(format!("../../{MAP_FILE}")) { "Back to memorials & locations" }
                    }
                }
                footer {
                    p class="small" { (config.footer_line) }
                }
            }
        }
    }
}

fn map_page(records: &[MemorialRecord], config: &SiteConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (config.map_title) }
                meta name="description" content=(config.map_description);
                link rel="stylesheet" href="./assets/style.css";
                meta name="robots" content="noindex,follow";
            }
            body {
                header {
                    h1 { (config.map_title) }
                    p class="small" { (config.map_intro) }
                }
                main {
                    ul class="list" {
                        @for record in records {
                            li {
                                strong {
                                    a href=(record.href()) { (record.name) }
                                }
                                @if let Some(location) = &record.location {
                                    div class="small" { "Location: " (location) }
                                }
                            }
                        }
                    }
                }
                footer {
                    p class="small" { (config.footer_line) }
                }
            }
        }
    }
}
