//! Client routes and shell navigation.
//!
//! Every page except the login form renders inside the shell. The shell is
//! structural only: no session is required to reach any page.

use catalyst_domain::id::CustomerId;

/// A shell page the client links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// Customer list placeholder; renders the dashboard for now.
    Customers,
    Customer(CustomerId),
}

impl Route {
    /// Path to link to this route.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Customers => "/customers".to_string(),
            Self::Customer(id) => format!("/customer/{}", encode_path_segment(id.as_str())),
        }
    }
}

/// Icon shown next to a sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Settings,
}

/// A sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// Exact path match; `/customers` does not activate `/`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Sidebar links in display order. Settings has no page yet.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        href: "/",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        label: "Customers",
        href: "/customers",
        icon: NavIcon::Users,
    },
    NavItem {
        label: "Settings",
        href: "/settings",
        icon: NavIcon::Settings,
    },
];

/// Percent-encode a single path segment (handles `%`, `/`, `?`, `#`, spaces).
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> Route {
        Route::Customer(CustomerId::new(id).unwrap())
    }

    #[test]
    fn should_render_shell_hrefs() {
        assert_eq!(Route::Dashboard.href(), "/");
        assert_eq!(Route::Customers.href(), "/customers");
    }

    #[test]
    fn should_render_customer_href_with_encoded_id() {
        assert_eq!(customer("CUST-004").href(), "/customer/CUST-004");
        assert_eq!(customer("A/B 1").href(), "/customer/A%2FB%201");
        assert_eq!(customer("50%?#").href(), "/customer/50%25%3F%23");
    }

    #[test]
    fn should_link_nav_items_to_shell_routes() {
        assert_eq!(NAV_ITEMS[0].href, Route::Dashboard.href());
        assert_eq!(NAV_ITEMS[1].href, Route::Customers.href());
    }

    #[test]
    fn should_activate_only_exact_nav_match() {
        let dashboard = NAV_ITEMS[0];
        assert!(dashboard.is_active("/"));
        assert!(!dashboard.is_active("/customers"));
        assert!(NAV_ITEMS[1].is_active("/customers"));
    }
}
