use crate::model::Notification;
use crate::view::{HomeAction, Reducer};

/// State of the page header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub search_query: String,
    pub mobile_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    SetSearchQuery(String),
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl HeaderState {
    /// The action submitting the search box hands to the home page.
    pub fn submit(&self) -> HomeAction {
        HomeAction::Search(self.search_query.clone())
    }
}

impl Reducer for HeaderState {
    type Action = HeaderAction;

    fn reduce(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::SetSearchQuery(search_query) => Self {
                search_query,
                ..self
            },
            HeaderAction::ToggleMobileMenu => Self {
                mobile_menu_open: !self.mobile_menu_open,
                ..self
            },
            HeaderAction::CloseMobileMenu => Self {
                mobile_menu_open: false,
                ..self
            },
        }
    }
}

/// Badge count for the notification bell.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Match starting soon".to_string(),
            message: "Team Liquid vs Cloud9 starts in 15 minutes".to_string(),
            is_read,
        }
    }

    #[test]
    fn test_unread_count() {
        let notifications = vec![
            notification("1", false),
            notification("2", true),
            notification("3", false),
        ];
        assert_eq!(unread_count(&notifications), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn test_mobile_menu() {
        let state = HeaderState::default().reduce(HeaderAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        assert!(!state.clone().reduce(HeaderAction::ToggleMobileMenu).mobile_menu_open);
        assert!(!state.reduce(HeaderAction::CloseMobileMenu).mobile_menu_open);
    }

    #[test]
    fn test_submit() {
        let state = HeaderState::default().reduce(HeaderAction::SetSearchQuery("T1".to_string()));
        assert_eq!(state.submit(), HomeAction::Search("T1".to_string()));
    }
}
