pub mod contact;

pub use contact::Contact;

/// Menu entries, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DisplayContacts,
    AddContact,
    RemoveContact,
    UpdateContact,
    SearchContacts,
    SaveContacts,
    LoadContacts,
    Quit,
}
