//! Course value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the three courses of a dinner rotation (Value Object)
///
/// The declaration order is the serving order, which is also the order
/// used for rendering and for persisting forbidden courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// All courses in serving order
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Wire identifier (`starter`, `main`, `dessert`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "starter",
            Course::Main => "main",
            Course::Dessert => "dessert",
        }
    }

    /// Human-readable heading (`Starter`, `Main`, `Dessert`)
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Course::Starter => 0b001,
            Course::Main => 0b010,
            Course::Dessert => 0b100,
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Course {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Course::Starter),
            "main" => Ok(Course::Main),
            "dessert" => Ok(Course::Dessert),
            other => Err(DomainError::InvalidCourse(other.to_string())),
        }
    }
}

impl Serialize for Course {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Course {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Set of courses, always iterated and serialized in serving order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CourseSet(u8);

impl CourseSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, course: Course) -> bool {
        self.0 & course.bit() != 0
    }

    pub fn insert(&mut self, course: Course) {
        self.0 |= course.bit();
    }

    /// Flip membership; returns whether the course is now in the set
    pub fn toggle(&mut self, course: Course) -> bool {
        self.0 ^= course.bit();
        self.contains(course)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Course> + '_ {
        Course::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Course> for CourseSet {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut set = CourseSet::new();
        for course in iter {
            set.insert(course);
        }
        set
    }
}

impl Serialize for CourseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CourseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let courses = Vec::<Course>::deserialize(deserializer)?;
        Ok(courses.into_iter().collect())
    }
}
