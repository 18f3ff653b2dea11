use super::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Record for Customer {
    const NAME: &'static str = "Customer";
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "address"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.name = other.name;
        self.email = other.email;
        self.phone = other.phone;
        self.address = other.address;
    }

    fn column_values(&self) -> Vec<Option<String>> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
        ]
    }

    fn from_columns(id: i64, values: Vec<Option<String>>) -> Self {
        let mut it = values.into_iter();
        Customer {
            id: Some(id),
            name: it.next().flatten(),
            email: it.next().flatten(),
            phone: it.next().flatten(),
            address: it.next().flatten(),
        }
    }
}
