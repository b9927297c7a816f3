use crate::shared::core::patch::Patch;
use crate::shared::core::record::{Record, RecordPatch, key_eq};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
    pub course: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentPatch {
    pub id: i64,
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub age: Patch<u32>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub course: Patch<String>,
}

impl RecordPatch for StudentPatch {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Student {
    type Patch = StudentPatch;

    const RESOURCE: &'static str = "students";
    const NOUN: &'static str = "Student";

    fn id(&self) -> i64 {
        self.id
    }

    fn matches_key(&self, key: &str) -> bool {
        key_eq(self.name.as_deref(), key)
    }

    fn replace_with(&mut self, other: Self) {
        self.name = other.name;
        self.age = other.age;
        self.email = other.email;
        self.course = other.course;
    }

    fn apply_patch(&mut self, patch: StudentPatch) {
        patch.name.apply_to(&mut self.name);
        patch.age.apply_to(&mut self.age);
        patch.email.apply_to(&mut self.email);
        patch.course.apply_to(&mut self.course);
    }
}

impl Student {
    pub fn new(id: i64, name: &str, age: u32, email: &str, course: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            age: Some(age),
            email: Some(email.to_string()),
            course: Some(course.to_string()),
        }
    }
}

pub fn seed_students() -> Vec<Student> {
    vec![
        Student::new(1, "Roberto", 25, "roberto@gmail.com", "Programming"),
        Student::new(2, "Manuel", 23, "manuel@gmail.com", "Networks"),
        Student::new(3, "Daniel", 20, "daniel@gmail.com", "Algorithms"),
        Student::new(4, "Miguel", 30, "miguel@gmail.com", "Networks 2"),
        Student::new(5, "Axel", 19, "axel@gmail.com", "Databases"),
    ]
}
