//! The fixed activity catalog seeded at process start.
//!
//! The catalog never changes at runtime; only each activity's
//! participant list does.

use indexmap::IndexMap;

use crate::activity::Activity;

fn emails(addrs: &[&str]) -> Vec<String> {
    addrs.iter().map(|a| (*a).to_owned()).collect()
}

/// Returns the full startup catalog, keyed by activity name.
///
/// An `IndexMap` keeps catalog order stable, so repeated listings
/// serialize identically.
#[must_use]
pub fn seed_catalog() -> IndexMap<String, Activity> {
    let mut catalog = IndexMap::new();

    catalog.insert(
        "Chess Club".to_owned(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(emails(&[
            "michael@mergington.edu",
            "daniel@mergington.edu",
        ])),
    );
    catalog.insert(
        "Programming Class".to_owned(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(emails(&["emma@mergington.edu", "sophia@mergington.edu"])),
    );
    catalog.insert(
        "Gym Class".to_owned(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(emails(&["john@mergington.edu", "olivia@mergington.edu"])),
    );
    catalog.insert(
        "Basketball".to_owned(),
        Activity::new(
            "Practice basketball skills and play friendly matches",
            "Wednesdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(emails(&["liam@mergington.edu"])),
    );
    catalog.insert(
        "Tennis Club".to_owned(),
        Activity::new(
            "Tennis lessons and doubles play on the school courts",
            "Tuesdays, 4:00 PM - 5:30 PM",
            10,
        ),
    );
    catalog.insert(
        "Art Class".to_owned(),
        Activity::new(
            "Drawing, painting, and mixed-media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants(emails(&["ava@mergington.edu"])),
    );
    catalog.insert(
        "Drama Club".to_owned(),
        Activity::new(
            "Rehearse and perform the school's stage productions",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
        )
        .with_participants(emails(&["noah@mergington.edu", "mia@mergington.edu"])),
    );
    catalog.insert(
        "Debate Team".to_owned(),
        Activity::new(
            "Prepare arguments and compete in regional debate meets",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        ),
    );
    catalog.insert(
        "Science Club".to_owned(),
        Activity::new(
            "Hands-on experiments and science fair preparation",
            "Thursdays, 3:30 PM - 4:30 PM",
            18,
        )
        .with_participants(emails(&["lucas@mergington.edu"])),
    );

    catalog
}
