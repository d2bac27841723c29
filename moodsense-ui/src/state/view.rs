//! Active view selection owned by the app root.

/// The two top-level views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Employee,
    Hr,
}

impl View {
    /// Stable id used by the navigation list
    pub fn id(&self) -> &'static str {
        match self {
            View::Employee => "employee",
            View::Hr => "hr",
        }
    }
}

/// One sidebar entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries in display order
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        view: View::Employee,
        label: "My Mood",
        icon: "😊",
    },
    NavItem {
        view: View::Hr,
        label: "HR Dashboard",
        icon: "📊",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_employee() {
        assert_eq!(View::default(), View::Employee);
    }

    #[test]
    fn test_nav_ids() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|item| item.view.id()).collect();
        assert_eq!(ids, vec!["employee", "hr"]);
    }
}
