//! Navigation dispatch.
//!
//! Sections never navigate by themselves. Every click on a link-bearing
//! element goes through [`dispatch`], which picks one of three outcomes by
//! the shape of the destination:
//!
//! | Destination      | Outcome                                      |
//! |------------------|----------------------------------------------|
//! | `http…`          | new browsing context, no opener or referrer  |
//! | `#id`            | scroll the current page to element `id`      |
//! | anything else    | route transition                             |
//!
//! The browser side of this lives in `embed/site.js` and follows the same
//! table.

/// Destinations starting with this are absolute URLs.
pub const EXTERNAL_PREFIX: &str = "http";
/// Destinations starting with this are in-page anchors.
pub const ANCHOR_PREFIX: char = '#';
/// Window features for external destinations.
pub const EXTERNAL_FEATURES: &str = "noopener,noreferrer";

/// Classified navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Absolute URL, opened in a new context
    External(&'a str),
    /// In-page anchor, stored without the leading `#`
    Anchor(&'a str),
    /// Route path handed to the router
    Route(&'a str),
}

impl<'a> Destination<'a> {
    pub fn classify(destination: &'a str) -> Self {
        if destination.starts_with(EXTERNAL_PREFIX) {
            Self::External(destination)
        } else if let Some(id) = destination.strip_prefix(ANCHOR_PREFIX) {
            Self::Anchor(id)
        } else {
            Self::Route(destination)
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Host environment that performs the actual navigation.
pub trait Navigator {
    /// Open `url` in a new browsing context with [`EXTERNAL_FEATURES`].
    fn open_external(&mut self, url: &str);

    /// Scroll the current page to the element with this id.
    fn scroll_to(&mut self, id: &str);

    /// Perform a route transition.
    fn push_route(&mut self, path: &str);
}

/// Send `destination` to the navigator according to its shape.
pub fn dispatch<'a, N: Navigator + ?Sized>(navigator: &mut N, destination: &'a str) -> Destination<'a> {
    let target = Destination::classify(destination);
    match target {
        Destination::External(url) => navigator.open_external(url),
        Destination::Anchor(id) => navigator.scroll_to(id),
        Destination::Route(path) => navigator.push_route(path),
    }
    target
}

/// Open/closed state of the navigation bar's mobile drawer.
///
/// Owned by one navigation bar. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    is_open: bool,
}

impl MobileMenu {
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Drawer open-change callback (trigger button, overlay, escape key).
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Navigate from a menu item or the call to action.
    ///
    /// The drawer is closed in the same interaction regardless of where the
    /// destination leads.
    pub fn navigate<'a, N: Navigator + ?Sized>(
        &mut self,
        navigator: &mut N,
        destination: &'a str,
    ) -> Destination<'a> {
        let target = dispatch(navigator, destination);
        self.is_open = false;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Navigator recording every call, with a scroll offset and window count
    /// standing in for the browser.
    #[derive(Debug, Default)]
    struct Recorder {
        opened: Vec<String>,
        scrolled: Vec<String>,
        routes: Vec<String>,
        scroll_y: u32,
    }

    impl Navigator for Recorder {
        fn open_external(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }

        fn scroll_to(&mut self, id: &str) {
            self.scroll_y = 640;
            self.scrolled.push(id.to_string());
        }

        fn push_route(&mut self, path: &str) {
            self.routes.push(path.to_string());
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Destination::classify("https://example.com"),
            Destination::External("https://example.com")
        );
        assert_eq!(Destination::classify("http://a.test"), Destination::External("http://a.test"));
        assert_eq!(Destination::classify("#contact"), Destination::Anchor("contact"));
        assert_eq!(Destination::classify("/signup"), Destination::Route("/signup"));
        assert_eq!(Destination::classify("mailto:a@b.com"), Destination::Route("mailto:a@b.com"));
    }

    #[test]
    fn test_external_opens_new_context_without_scrolling() {
        let mut nav = Recorder::default();
        dispatch(&mut nav, "https://example.com");

        assert_eq!(nav.opened, vec!["https://example.com"]);
        assert!(nav.scrolled.is_empty());
        assert_eq!(nav.scroll_y, 0);
    }

    #[test]
    fn test_anchor_scrolls_without_opening() {
        let mut nav = Recorder::default();
        dispatch(&mut nav, "#contact");

        assert_eq!(nav.scrolled, vec!["contact"]);
        assert!(nav.opened.is_empty());
        assert!(nav.routes.is_empty());
    }

    #[test]
    fn test_route_is_pushed() {
        let mut nav = Recorder::default();
        dispatch(&mut nav, "/careers");
        assert_eq!(nav.routes, vec!["/careers"]);
    }

    #[test]
    fn test_menu_closes_after_navigation() {
        let mut nav = Recorder::default();
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());

        menu.set_open(true);
        assert!(menu.is_open());

        menu.navigate(&mut nav, "#hero");
        assert!(!menu.is_open());
        assert_eq!(nav.scrolled, vec!["hero"]);
    }

    #[test]
    fn test_menu_closes_after_external_cta() {
        let mut nav = Recorder::default();
        let mut menu = MobileMenu::default();
        menu.set_open(true);

        let target = menu.navigate(&mut nav, "https://app.test/signup");
        assert!(target.is_external());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut nav = Recorder::default();
        let dyn_nav: &mut dyn Navigator = &mut nav;
        dispatch(dyn_nav, "/about");
        assert_eq!(nav.routes, vec!["/about"]);
    }
}
