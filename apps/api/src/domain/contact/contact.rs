/// Contact entity
///
/// # Invariants
/// - `id` is `None` until the contact has been saved once
/// - After a successful save `id` is a non-empty string assigned by storage
///   and never changes afterwards
/// - `name` is not unique; several contacts may share it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl Contact {
    /// Creates a contact that has not been persisted yet
    ///
    /// # Example
    /// ```
    /// use contacts_api::domain::contact::Contact;
    ///
    /// let contact = Contact::new("Ada", "ada@x.com");
    /// assert!(!contact.is_persisted());
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns a copy of this contact carrying the given storage identifier
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// True once storage has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_has_no_id() {
        let contact = Contact::new("Ada", "ada@x.com");

        assert_eq!(contact.id, None);
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@x.com");
        assert!(!contact.is_persisted());
    }

    #[test]
    fn test_with_id_marks_contact_persisted() {
        let contact = Contact::new("Ada", "ada@x.com").with_id("65f0c0ffee0000000000abcd");

        assert_eq!(contact.id.as_deref(), Some("65f0c0ffee0000000000abcd"));
        assert!(contact.is_persisted());
    }

    #[test]
    fn test_empty_id_is_not_persisted() {
        let contact = Contact::new("Ada", "ada@x.com").with_id("");

        assert!(!contact.is_persisted());
    }
}
