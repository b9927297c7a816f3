// Three-state field wrapper for partial updates.
//
// Purpose
// - Tell apart a field that was left out of a request body from one that was sent as null.
//
// Usage
// - Annotate each patch field with `#[serde(default)]` so a missing key becomes `Absent`.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// Writes the patch into `slot`. `Absent` leaves the slot untouched.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = None,
            Patch::Value(value) => *slot = Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod patch_tests {
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default)]
        name: Patch<String>,
    }

    #[rstest]
    #[case(r#"{}"#, Patch::Absent)]
    #[case(r#"{"name":null}"#, Patch::Null)]
    #[case(r#"{"name":"Erica"}"#, Patch::Value("Erica".to_string()))]
    fn it_should_deserialize_all_three_states(#[case] json: &str, #[case] expected: Patch<String>) {
        let body: Body = serde_json::from_str(json).unwrap();
        assert_eq!(body.name, expected);
    }

    #[rstest]
    fn it_should_leave_the_slot_untouched_when_absent() {
        let mut slot = Some("rober".to_string());
        Patch::Absent.apply_to(&mut slot);
        assert_eq!(slot.as_deref(), Some("rober"));
    }

    #[rstest]
    fn it_should_clear_the_slot_when_null() {
        let mut slot = Some("rober".to_string());
        Patch::<String>::Null.apply_to(&mut slot);
        assert_eq!(slot, None);
    }

    #[rstest]
    fn it_should_overwrite_the_slot_with_a_value() {
        let mut slot = None;
        Patch::Value(25u32).apply_to(&mut slot);
        assert_eq!(slot, Some(25));
    }
}
