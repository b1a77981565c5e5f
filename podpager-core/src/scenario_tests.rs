//! End-to-end click scenarios on a rendered listing page
//!
//! These drive `PodcastPager` through the same element clicks a reader would
//! make and check the resulting document, not just the paginator state.

use crate::{NavButton, PagerEvent, PodcastEntry, PodcastListing, PodcastPager, PodmakerConfig};

fn listing(count: usize) -> PodcastListing {
    PodcastListing {
        title: Some("Test feeds".to_string()),
        podcasts: (0..count)
            .map(|i| PodcastEntry::new(&format!("Podcast {}", i), &format!("https://example.com/{}.xml", i)))
            .collect(),
    }
}

fn shown_titles(pager: &PodcastPager) -> Vec<String> {
    let doc = pager.document();
    pager
        .paginator()
        .items()
        .iter()
        .filter(|id| doc.style(**id, "display") == Some("block"))
        .map(|id| doc.text_content(*id))
        .collect()
}

fn hidden_count(pager: &PodcastPager) -> usize {
    let doc = pager.document();
    pager
        .paginator()
        .items()
        .iter()
        .filter(|id| doc.style(**id, "display") == Some("none"))
        .count()
}

fn is_disabled(pager: &PodcastPager, nav: NavButton) -> bool {
    pager.document().has_class(pager.nav_control(nav), "disabled")
}

fn active_pages(pager: &PodcastPager) -> Vec<usize> {
    pager
        .paginator()
        .page_buttons()
        .iter()
        .filter(|b| pager.document().has_class(b.handle, "active"))
        .map(|b| b.page)
        .collect()
}

#[test]
fn twelve_podcasts_walk_forward() {
    let mut pager = PodcastPager::new(listing(12)).unwrap();
    assert_eq!(pager.paginator().total_pages(), 3);
    assert_eq!(shown_titles(&pager).len(), 5);
    assert_eq!(hidden_count(&pager), 7);
    assert!(is_disabled(&pager, NavButton::Previous));
    assert!(!is_disabled(&pager, NavButton::Next));
    assert_eq!(active_pages(&pager), vec![1]);

    let next = pager.nav_control(NavButton::Next);
    assert_eq!(pager.click(next), Some(PagerEvent::Next));
    assert_eq!(shown_titles(&pager)[0], "Podcast 5");
    assert_eq!(shown_titles(&pager).len(), 5);
    assert!(!is_disabled(&pager, NavButton::Previous));
    assert!(!is_disabled(&pager, NavButton::Next));
    assert_eq!(active_pages(&pager), vec![2]);

    pager.click(next);
    assert_eq!(shown_titles(&pager), vec!["Podcast 10", "Podcast 11"]);
    assert!(!is_disabled(&pager, NavButton::Previous));
    assert!(is_disabled(&pager, NavButton::Next));
    assert_eq!(active_pages(&pager), vec![3]);

    // Ceiling: another click changes nothing
    let html_before = pager.to_html();
    pager.click(next);
    assert_eq!(pager.to_html(), html_before);
}

#[test]
fn previous_from_middle_and_floor() {
    let mut pager = PodcastPager::new(listing(12)).unwrap();
    let prev = pager.nav_control(NavButton::Previous);

    let html_before = pager.to_html();
    assert_eq!(pager.click(prev), Some(PagerEvent::Previous));
    assert_eq!(pager.to_html(), html_before);

    pager.go_to_page(2);
    pager.click(prev);
    assert_eq!(pager.snapshot().current_page, 1);
    assert_eq!(shown_titles(&pager)[0], "Podcast 0");
}

#[test]
fn every_page_control_reaches_its_own_page() {
    let mut pager = PodcastPager::new(listing(31)).unwrap();
    assert_eq!(pager.paginator().total_pages(), 7);

    for target in (1..=7).rev() {
        let control = pager.page_control(target).unwrap();
        assert_eq!(pager.click(control), Some(PagerEvent::Page(target)));
        assert_eq!(pager.snapshot().current_page, target);
        assert_eq!(active_pages(&pager), vec![target]);
        assert_eq!(
            shown_titles(&pager)[0],
            format!("Podcast {}", (target - 1) * 5)
        );
    }
}

#[test]
fn current_entries_follow_page() {
    let mut pager = PodcastPager::new(listing(12)).unwrap();
    pager.go_to_page(3);
    let titles: Vec<&str> = pager.current_entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Podcast 10", "Podcast 11"]);
}

#[test]
fn empty_listing_renders_without_page_controls() {
    let mut pager = PodcastPager::new(listing(0)).unwrap();
    assert_eq!(pager.paginator().total_pages(), 0);
    assert!(pager.page_control(1).is_none());
    assert!(pager.current_entries().is_empty());
    assert!(!is_disabled(&pager, NavButton::Next));

    let next = pager.nav_control(NavButton::Next);
    pager.click(next);
    assert_eq!(pager.snapshot().current_page, 1);
}

#[test]
fn exact_multiple_of_page_size() {
    let mut pager = PodcastPager::new(listing(10)).unwrap();
    assert_eq!(pager.paginator().total_pages(), 2);
    pager.go_to_page(2);
    assert_eq!(shown_titles(&pager).len(), 5);
    assert!(is_disabled(&pager, NavButton::Next));
}

#[test]
fn podmaker_sources_are_paged() {
    let mut config = String::from("[owner]\nemail = \"me@example.com\"\n");
    for i in 0..7 {
        config.push_str(&format!(
            "\n[[sources]]\nid = \"src-{}\"\nurl = \"https://example.com/{}\"\n",
            i, i
        ));
    }
    let listing = PodmakerConfig::parse(&config).unwrap().to_listing();
    let mut pager = PodcastPager::new(listing).unwrap();
    assert_eq!(pager.paginator().total_pages(), 2);

    let next = pager.nav_control(NavButton::Next);
    pager.click(next);
    let titles: Vec<&str> = pager.current_entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["src-5", "src-6"]);
    assert!(is_disabled(&pager, NavButton::Next));
}
