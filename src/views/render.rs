//! Plain-text rendering of the views, used by the CLI.

use crate::application::format_property_data;
use crate::models::FormattedProperty;
use crate::repository::PropertyReader;
use crate::search::{SearchStatus, SearchView};
use crate::views::listing::EMPTY_LISTING_MESSAGE;
use crate::views::{DetailView, FeaturedView, ListingView, ViewState};
use std::fmt::Write;

/// "Showing 2 properties" / "Showing 1 property"
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "property" } else { "properties" };
    format!("Showing {} {}", count, noun)
}

pub fn render_card(property: &FormattedProperty) -> String {
    let mut out = String::new();
    let p = &property.property;

    let _ = writeln!(out, "{} ({})", p.name, property.formatted_price);
    if !property.formatted_address.is_empty() {
        let _ = writeln!(out, "   {}", property.formatted_address);
    }
    match (p.bedrooms, p.bathrooms) {
        (Some(beds), Some(baths)) => {
            let _ = writeln!(out, "   {} bd, {} ba", beds, baths);
        }
        (Some(beds), None) => {
            let _ = writeln!(out, "   {} bd", beds);
        }
        (None, Some(baths)) => {
            let _ = writeln!(out, "   {} ba", baths);
        }
        (None, None) => {}
    }
    let _ = writeln!(out, "   ID: {}", p.id);
    if let Some(url) = &p.image_url {
        let _ = writeln!(out, "   Image: {}", url);
    }
    out
}

fn render_cards<'a>(out: &mut String, properties: impl IntoIterator<Item = &'a FormattedProperty>) {
    for (i, property) in properties.into_iter().enumerate() {
        let _ = write!(out, "{}. {}", i + 1, render_card(property));
        out.push('\n');
    }
}

pub fn render_search<R: PropertyReader>(view: &SearchView<R>) -> String {
    let mut out = String::new();

    match view.status() {
        SearchStatus::Idle => {}
        SearchStatus::Loading => {
            let _ = writeln!(out, "Searching properties...");
        }
        SearchStatus::Failed(message) => {
            let _ = writeln!(out, "{}", message);
        }
        SearchStatus::Loaded if view.results().is_empty() => {
            let _ = writeln!(out, "No properties found");
            let _ = writeln!(
                out,
                "Try adjusting your search criteria or clearing filters"
            );
        }
        SearchStatus::Loaded => {
            let page = view.page();
            let _ = writeln!(
                out,
                "Search Results ({} properties)    Page {} of {}",
                view.total_results(),
                page.page,
                page.total_pages
            );
            let _ = writeln!(out, "{}", count_label(view.total_results()));
            if let Some(loaded_at) = view.loaded_at() {
                let _ = writeln!(out, "Updated {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            out.push('\n');

            let cards: Vec<FormattedProperty> = page
                .items
                .iter()
                .cloned()
                .map(format_property_data)
                .collect();
            render_cards(&mut out, &cards);

            if page.total_pages > 1 {
                let buttons: Vec<String> = page
                    .pages()
                    .into_iter()
                    .map(|n| {
                        if n == page.page {
                            format!("[{}]", n)
                        } else {
                            n.to_string()
                        }
                    })
                    .collect();
                let previous = if page.has_previous() { "< Previous" } else { "(Previous)" };
                let next = if page.has_next() { "Next >" } else { "(Next)" };
                let _ = writeln!(out, "{}  {}  {}", previous, buttons.join(" "), next);
                if let Some((first, last)) = page.range() {
                    let _ = writeln!(
                        out,
                        "Showing {}-{} of {} properties",
                        first, last, page.total_items
                    );
                }
            }
        }
    }

    out
}

pub fn render_listing(view: &ListingView) -> String {
    let mut out = String::new();
    match &view.state {
        ViewState::Failed(message) => {
            let _ = writeln!(out, "{}", message);
        }
        ViewState::Ready(properties) if properties.is_empty() => {
            let _ = writeln!(out, "{}", EMPTY_LISTING_MESSAGE);
        }
        ViewState::Ready(properties) => {
            let _ = writeln!(out, "{}", count_label(properties.len()));
            out.push('\n');
            render_cards(&mut out, properties);
        }
    }
    out
}

pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    match &view.state {
        ViewState::Ready(property) => {
            out.push_str(&render_card(property));
            if let Some(description) = &property.property.description {
                let _ = writeln!(out, "\n{}", description);
            }
        }
        ViewState::Failed(message) => {
            let (label, route) = view.return_to_listing();
            let _ = writeln!(out, "{}", message);
            let _ = writeln!(out, "{} ({})", label, route);
        }
    }
    out
}

pub fn render_featured(view: &FeaturedView) -> String {
    let mut out = String::new();
    if view.properties.is_empty() {
        return out;
    }
    let _ = writeln!(out, "Featured Properties");
    for property in &view.properties {
        let _ = writeln!(
            out,
            "  {} - {}",
            property.property.name, property.formatted_price
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Property, PropertyId};

    #[test]
    fn pluralizes_counts() {
        assert_eq!(count_label(2), "Showing 2 properties");
        assert_eq!(count_label(1), "Showing 1 property");
        assert_eq!(count_label(0), "Showing 0 properties");
    }

    #[test]
    fn card_lists_the_essentials() {
        let card = render_card(&format_property_data(
            Property::new(7, "Modern Apartment", 180000.0)
                .with_address("456 Oak Ave")
                .with_rooms(2, 1),
        ));

        assert!(card.starts_with("Modern Apartment ($180,000)"));
        assert!(card.contains("456 Oak Ave"));
        assert!(card.contains("2 bd, 1 ba"));
        assert!(card.contains("ID: 7"));
    }

    #[test]
    fn failed_detail_links_back() {
        let view = DetailView {
            id: PropertyId::Number(9),
            state: ViewState::Failed("Property not found".to_string()),
        };
        let text = render_detail(&view);
        assert!(text.contains("Property not found"));
        assert!(text.contains("Back to Properties (/)"));
    }
}
