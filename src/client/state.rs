use crate::api::dto::link::LinkItem;

/// Where a link form submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// `POST /api/links`
    Create,
    /// `PUT /api/links/{id}`
    Update(i64),
}

impl SaveTarget {
    pub fn method(&self) -> &'static str {
        match self {
            SaveTarget::Create => "POST",
            SaveTarget::Update(_) => "PUT",
        }
    }

    /// Request path relative to the server root.
    pub fn path(&self) -> String {
        match self {
            SaveTarget::Create => "/api/links".to_string(),
            SaveTarget::Update(id) => format!("/api/links/{id}"),
        }
    }

    /// Label for the form's submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            SaveTarget::Create => "Add Link",
            SaveTarget::Update(_) => "Update Link",
        }
    }
}

/// Client session: the last fetched links, the link being edited, and the
/// bearer token.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    links: Vec<LinkItem>,
    editing_id: Option<i64>,
    auth_token: Option<String>,
}

impl ClientState {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(auth_token.into()),
            ..Self::default()
        }
    }

    pub fn links(&self) -> &[LinkItem] {
        &self.links
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Replaces the list with a fresh fetch.
    ///
    /// An edit in progress is dropped if its link is no longer listed.
    pub fn replace_links(&mut self, links: Vec<LinkItem>) {
        self.links = links;
        if let Some(id) = self.editing_id
            && !self.links.iter().any(|l| l.id == id)
        {
            self.editing_id = None;
        }
    }

    /// Starts editing a listed link and returns it for pre-filling the form.
    ///
    /// Returns `None` and leaves state unchanged if the id is not listed.
    pub fn begin_edit(&mut self, id: i64) -> Option<&LinkItem> {
        let link = self.links.iter().find(|l| l.id == id)?;
        self.editing_id = Some(id);
        Some(link)
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Target of the next form submission.
    pub fn save_target(&self) -> SaveTarget {
        match self.editing_id {
            Some(id) => SaveTarget::Update(id),
            None => SaveTarget::Create,
        }
    }

    /// Clears the token and everything fetched with it.
    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: i64, title: &str) -> LinkItem {
        LinkItem {
            id,
            user_id: 1,
            url: format!("https://example.com/{id}"),
            title: title.to_string(),
            description: None,
            category: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_state_is_authenticated_and_empty() {
        let state = ClientState::new("tok");

        assert!(state.is_authenticated());
        assert_eq!(state.auth_token(), Some("tok"));
        assert!(state.links().is_empty());
        assert_eq!(state.save_target(), SaveTarget::Create);
    }

    #[test]
    fn test_begin_edit_known_link() {
        let mut state = ClientState::new("tok");
        state.replace_links(vec![item(1, "One"), item(2, "Two")]);

        let link = state.begin_edit(2).unwrap();
        assert_eq!(link.title, "Two");
        assert_eq!(state.editing_id(), Some(2));

        let target = state.save_target();
        assert_eq!(target.method(), "PUT");
        assert_eq!(target.path(), "/api/links/2");
        assert_eq!(target.submit_label(), "Update Link");
    }

    #[test]
    fn test_begin_edit_unknown_link_keeps_state() {
        let mut state = ClientState::new("tok");
        state.replace_links(vec![item(1, "One")]);

        assert!(state.begin_edit(99).is_none());
        assert_eq!(state.editing_id(), None);
    }

    #[test]
    fn test_cancel_edit() {
        let mut state = ClientState::new("tok");
        state.replace_links(vec![item(1, "One")]);
        state.begin_edit(1);

        state.cancel_edit();

        assert_eq!(state.save_target(), SaveTarget::Create);
        assert_eq!(SaveTarget::Create.path(), "/api/links");
        assert_eq!(SaveTarget::Create.method(), "POST");
    }

    #[test]
    fn test_replace_links_drops_stale_edit() {
        let mut state = ClientState::new("tok");
        state.replace_links(vec![item(1, "One"), item(2, "Two")]);
        state.begin_edit(1);

        state.replace_links(vec![item(1, "One renamed")]);
        assert_eq!(state.editing_id(), Some(1));

        state.replace_links(vec![item(2, "Two")]);
        assert_eq!(state.editing_id(), None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = ClientState::new("tok");
        state.replace_links(vec![item(1, "One")]);
        state.begin_edit(1);

        state.logout();

        assert!(!state.is_authenticated());
        assert!(state.links().is_empty());
        assert_eq!(state.editing_id(), None);
    }
}
