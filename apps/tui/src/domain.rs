use serde::{Deserialize, Serialize};

/// One row of the contact book. Every field is free text; empty strings are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            street: street.into(),
            city: city.into(),
            region: region.into(),
            country: country.into(),
        }
    }

    /// Builds a contact from the six column values in display order.
    pub fn from_fields(fields: [String; 6]) -> Self {
        let [name, phone, street, city, region, country] = fields;
        Self {
            name,
            phone,
            street,
            city,
            region,
            country,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Street => &self.street,
            ContactField::City => &self.city,
            ContactField::Region => &self.region,
            ContactField::Country => &self.country,
        }
    }

    pub fn fields(&self) -> [&str; 6] {
        ContactField::ALL.map(|field| self.field(field))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Street,
    City,
    Region,
    Country,
}

impl ContactField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Phone,
        Self::Street,
        Self::City,
        Self::Region,
        Self::Country,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Name),
            1 => Some(Self::Phone),
            2 => Some(Self::Street),
            3 => Some(Self::City),
            4 => Some(Self::Region),
            5 => Some(Self::Country),
            _ => None,
        }
    }

    /// Column heading used by the table and the contacts file.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone Number",
            Self::Street => "Street",
            Self::City => "City",
            Self::Region => "State",
            Self::Country => "Country",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_column_order() {
        let contact = Contact::new(
            "Alice",
            "555-1234",
            "1 Main St",
            "Springfield",
            "Illinois",
            "United States",
        );

        assert_eq!(
            contact.fields(),
            [
                "Alice",
                "555-1234",
                "1 Main St",
                "Springfield",
                "Illinois",
                "United States"
            ]
        );
        assert_eq!(
            contact.field(ContactField::from_index(4).unwrap()),
            "Illinois"
        );
        assert_eq!(ContactField::from_index(6), None);
    }

    #[test]
    fn region_column_is_labelled_state() {
        let labels: Vec<_> = ContactField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            ["Name", "Phone Number", "Street", "City", "State", "Country"]
        );
    }
}
