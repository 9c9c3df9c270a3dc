// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::reviews::PAGE,
    &pages::ratings::PAGE,
    &pages::top_companies::PAGE,
    &pages::cocoa::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Reviews       => &pages::reviews::PAGE,
        Ratings       => &pages::ratings::PAGE,
        TopCompanies  => &pages::top_companies::PAGE,
        CocoaVsRating => &pages::cocoa::PAGE,
    }
}
