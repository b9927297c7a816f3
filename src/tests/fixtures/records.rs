// Shared test fixtures for record resources.

use crate::modules::customers::core::customer::{Customer, seed_customers};
use crate::modules::records::routes::routes;
use crate::modules::records::state::RecordsState;
use crate::shared::inbound::response::ResponseStyle;
use axum::Router;

pub struct CustomerBuilder {
    inner: Customer,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            inner: Customer::new(900, "Test", "test", "secret"),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = Some(v.into());
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = Some(v.into());
        self
    }

    pub fn build(self) -> Customer {
        self.inner
    }
}

/// Router over the seeded customers, plus the state so tests can inspect the store.
pub fn customers_app(style: ResponseStyle) -> (Router, RecordsState<Customer>) {
    let state = RecordsState::in_memory(seed_customers(), style);
    (routes(state.clone()), state)
}

#[cfg(test)]
mod customer_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let customer = CustomerBuilder::new()
            .id(1)
            .name("Lucia")
            .username("lu")
            .password("pw")
            .build();
        assert_eq!(customer, Customer::new(1, "Lucia", "lu", "pw"));
    }
}
