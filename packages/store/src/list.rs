//! # Client-side user list
//!
//! [`UserList`] is the in-memory projection of the `users` table held by the list
//! view. It is filled once from `GET /api/users` and afterwards only changes through
//! the three mutations that mirror a confirmed server response:
//!
//! | Method | After |
//! |--------|-------|
//! | [`insert`](UserList::insert) | `POST` returned the created record: append it. |
//! | [`replace`](UserList::replace) | `PUT` returned the updated record: overwrite the entry with the same id, in place. |
//! | [`remove`](UserList::remove) | `DELETE` succeeded: drop the entry with that id. |
//!
//! The list never re-fetches and never invents ids. [`ListStatus`] is the message
//! rendered in place of the rows while the list is empty.

use crate::models::User;

/// Ordered cache of the users known to the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn last(&self) -> Option<&User> {
        self.users.last()
    }

    /// Append a record returned by the server.
    pub fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    /// Overwrite the entry with the same id, keeping its position.
    ///
    /// Returns `false` when no entry matches (the record was removed locally
    /// while the request was in flight); the list is left untouched.
    pub fn replace(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    /// Drop the entry with `id`. Returns the removed record, if any.
    pub fn remove(&mut self, id: i32) -> Option<User> {
        let pos = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(pos))
    }
}

/// Message shown instead of rows while the list is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Empty,
    LoadFailed,
}

impl ListStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ListStatus::Loading => "Loading List..",
            ListStatus::Empty => "No users found",
            ListStatus::LoadFailed => "Error. Please refresh the page.",
        }
    }

    /// Status after the list changed. A failed load stays failed until the page
    /// is reloaded; otherwise an empty list reads as "No users found".
    pub fn after_change(self, list: &UserList) -> Self {
        match self {
            ListStatus::LoadFailed => ListStatus::LoadFailed,
            _ if list.is_empty() => ListStatus::Empty,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_insert_appends_at_end() {
        let mut list = UserList::from_users(vec![user(1, "John")]);
        list.insert(user(2, "Jane"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some(&user(2, "Jane")));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = UserList::from_users(vec![user(1, "John"), user(2, "Jane"), user(3, "Jim")]);

        assert!(list.replace(user(2, "Janet")));

        let names: Vec<&str> = list.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["John", "Janet", "Jim"]);
    }

    #[test]
    fn test_replace_unknown_id_is_ignored() {
        let mut list = UserList::from_users(vec![user(1, "John")]);
        assert!(!list.replace(user(9, "Ghost")));
        assert_eq!(list.users(), &[user(1, "John")]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = UserList::from_users(vec![user(1, "John"), user(2, "Jane")]);

        assert_eq!(list.remove(1), Some(user(1, "John")));
        assert_eq!(list.users(), &[user(2, "Jane")]);

        // Already gone
        assert_eq!(list.remove(1), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_all_reads_as_empty() {
        let mut list = UserList::from_users(vec![user(1, "John"), user(2, "Jane")]);
        let mut status = ListStatus::Loading;

        list.remove(1);
        status = status.after_change(&list);
        assert_eq!(status, ListStatus::Loading);

        list.remove(2);
        status = status.after_change(&list);
        assert_eq!(status, ListStatus::Empty);
        assert_eq!(status.message(), "No users found");
    }

    #[test]
    fn test_load_failure_is_sticky() {
        let status = ListStatus::LoadFailed.after_change(&UserList::new());
        assert_eq!(status.message(), "Error. Please refresh the page.");
    }
}
