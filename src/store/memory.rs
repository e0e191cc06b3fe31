use super::*;

/// The ordered in-memory contact list. Position is the only identity a
/// contact has, so removing an entry shifts every later index down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn iter(&self) -> MemStoreIter<'_> {
        MemStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.data
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.data.push(contact);
    }

    /// Maps a user supplied index onto the list, `None` when out of range.
    pub fn checked_index(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|&idx| idx < self.data.len())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Contact> {
        self.data.get_mut(index)
    }

    pub fn delete_contact(&mut self, index: usize) -> Option<Contact> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Contacts whose first or last name contains `query`, in list order.
    pub fn search_by_name(&self, query: &str) -> Vec<&Contact> {
        self.iter().filter(|c| c.name_contains(query)).collect()
    }

    /// Swap in a freshly loaded list, discarding everything held before.
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.data = contacts;
    }
}

impl From<Vec<Contact>> for MemStore {
    fn from(data: Vec<Contact>) -> Self {
        Self { data }
    }
}

pub struct MemStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for MemStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}
