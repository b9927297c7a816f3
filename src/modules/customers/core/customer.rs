use crate::shared::core::patch::Patch;
use crate::shared::core::record::{Record, RecordPatch, key_eq};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    pub id: i64,
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub username: Patch<String>,
    #[serde(default)]
    pub password: Patch<String>,
}

impl RecordPatch for CustomerPatch {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Customer {
    type Patch = CustomerPatch;

    const RESOURCE: &'static str = "customers";
    const NOUN: &'static str = "Customer";

    fn id(&self) -> i64 {
        self.id
    }

    fn matches_key(&self, key: &str) -> bool {
        key_eq(self.username.as_deref(), key)
    }

    fn replace_with(&mut self, other: Self) {
        self.name = other.name;
        self.username = other.username;
        self.password = other.password;
    }

    fn apply_patch(&mut self, patch: CustomerPatch) {
        patch.name.apply_to(&mut self.name);
        patch.username.apply_to(&mut self.username);
        patch.password.apply_to(&mut self.password);
    }
}

impl Customer {
    pub fn new(id: i64, name: &str, username: &str, password: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new(123, "Roberto", "rober", "123"),
        Customer::new(234, "Agustín", "agus", "234"),
        Customer::new(345, "Gustavo", "tavo", "345"),
        Customer::new(456, "Erica", "eri", "456"),
    ]
}
