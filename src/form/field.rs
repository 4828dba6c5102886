//! Contact form fields and their visual emphasis.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Every field, in the order the form lays them out.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Message,
    ];

    /// Stable identifier, also used in log output.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone (optional)",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Option<Field> {
        let idx = Field::ALL.iter().position(|f| *f == self)?;
        Field::ALL.get(idx + 1).copied()
    }

    pub fn prev(self) -> Option<Field> {
        let idx = Field::ALL.iter().position(|f| *f == self)?;
        idx.checked_sub(1).map(|i| Field::ALL[i])
    }
}

/// Border emphasis of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Neutral,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_navigation() {
        assert_eq!(Field::FirstName.next(), Some(Field::LastName));
        assert_eq!(Field::Message.next(), None);
        assert_eq!(Field::FirstName.prev(), None);
        assert_eq!(Field::Message.prev(), Some(Field::Phone));
    }

    #[test]
    fn test_field_ids() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["firstName", "lastName", "email", "phone", "message"]);
    }
}
