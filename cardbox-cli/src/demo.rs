//! Sample cards for the `--demo` flag
//!
//! The set deliberately covers the awkward corners: mixed-case labels, an
//! out-of-enumeration status, present and absent deadlines.

use cardbox_core::date::parse_deadline;
use cardbox_core::{Card, CardStore};

/// Seed the store with the demonstration data set
pub fn seed(store: &mut CardStore) {
    let samples: [(&str, &str, &[&str], Option<&str>); 5] = [
        ("first card", "10-07-1999", &["yellow", "red", "green"], Some("doing")),
        ("taskName1", "null", &["Yellow", "Red", "Green"], Some("doing")),
        ("taskName2", "01-01-2020", &["Yellow", "Blue"], Some("todo")),
        ("taskName3", "null", &["Yellow"], Some("done")),
        ("taskName4", "10-12-2019", &[], Some("null")),
    ];

    for (subject, deadline, labels, status) in samples {
        store.push(Card::new(
            subject,
            parse_deadline(deadline).ok().flatten(),
            labels.iter().map(|l| l.to_string()).collect(),
            status.map(str::to_string),
        ));
    }
}
