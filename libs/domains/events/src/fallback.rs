//! Bundled fallback catalog for the public listing.
//!
//! Shown when the store is empty or unreachable so the marketing site
//! never renders an empty calendar. Injected into
//! [`crate::service::PublicEventCatalog`] at construction, which keeps
//! store-empty and store-unreachable scenarios independently testable.

use crate::models::{CreateEvent, Event, EventCategory};
use chrono::NaiveDate;

fn seed(
    title: &str,
    date: &str,
    time: &str,
    venue: &str,
    city: &str,
    category: EventCategory,
    image: &str,
    description: &str,
) -> Event {
    Event::new(CreateEvent {
        title: title.to_string(),
        date: date.parse::<NaiveDate>().expect("valid seed date"),
        time: time.to_string(),
        venue: venue.to_string(),
        city: city.to_string(),
        category,
        image: Some(image.to_string()),
        description: description.to_string(),
        ticket_link: None,
    })
}

/// The bundled sample calendar, ordered by date ascending.
pub fn sample_events() -> Vec<Event> {
    let mut events = vec![
        seed(
            "Rooftop Sunset Session",
            "2026-02-15",
            "4:00 PM - 9:00 PM",
            "The Canopy Rooftop",
            "Scottsdale",
            EventCategory::MusicSession,
            "/gallery/5.jpg",
            "Deep house and downtempo as the sun drops behind Camelback.",
        ),
        seed(
            "St. Patrick's Day Crawl",
            "2026-03-17",
            "2:00 PM - 10:00 PM",
            "Old Town",
            "Scottsdale",
            EventCategory::TourCrawl,
            "/gallery/2.jpg",
            "The biggest St. Paddy's celebration in Arizona!",
        ),
        seed(
            "Spring Guestlist Weekend",
            "2026-04-11",
            "9:00 PM - 2:00 AM",
            "Casa Nocturna",
            "Scottsdale",
            EventCategory::Guestlist,
            "/gallery/7.jpg",
            "Skip the line all weekend with our partner venues.",
        ),
        seed(
            "Summer Kickoff Crawl",
            "2026-05-23",
            "3:00 PM - 11:00 PM",
            "Mill Avenue",
            "Tempe",
            EventCategory::TourCrawl,
            "/gallery/3.jpg",
            "Start summer right with the ultimate bar crawl experience.",
        ),
        seed(
            "Halloween Costume Crawl",
            "2026-10-31",
            "6:00 PM - 2:00 AM",
            "Downtown",
            "Phoenix",
            EventCategory::TourCrawl,
            "/gallery/4.jpg",
            "Costumes required! Best costume wins prizes.",
        ),
        seed(
            "Ugly Sweater Crawl",
            "2026-12-14",
            "4:00 PM - 11:00 PM",
            "Downtown District",
            "Scottsdale",
            EventCategory::TourCrawl,
            "/gallery/1.jpg",
            "Get festive with our annual ugly sweater bar crawl!",
        ),
    ];

    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_events_are_date_ordered() {
        let events = sample_events();
        assert!(!events.is_empty());
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_sample_events_satisfy_invariants() {
        for event in sample_events() {
            assert!(!event.title.is_empty());
            assert!(!event.venue.is_empty());
            assert!(!event.description.is_empty());
        }
    }
}
