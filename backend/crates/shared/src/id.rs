//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Identities are assigned by
//! the database (`BIGSERIAL`), so there is no constructor for fresh IDs;
//! values always originate from a returned row or a request path/body.
//!
//! Usage:
//! ```
//! use kernel::id::{Id, markers};
//! type StudentId = Id<markers::Student>;
//! let id = StudentId::from_i64(1);
//! assert_eq!(id.as_i64(), 1);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper over a database-assigned integer key
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

// Manual impls: derives would put the same bounds on the marker type,
// which is a bare tag and implements nothing.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Wrap an existing database key
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer key
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Student IDs
    pub struct Student;

    /// Marker for Instructor IDs
    pub struct Instructor;

    /// Marker for Course IDs
    pub struct Course;
}

/// Type aliases for common IDs
pub type StudentId = Id<markers::Student>;
pub type InstructorId = Id<markers::Instructor>;
pub type CourseId = Id<markers::Course>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let student_id: StudentId = Id::from_i64(1);
        let course_id: CourseId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _s: i64 = student_id.as_i64();
        let _c: i64 = course_id.as_i64();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: StudentId = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(StudentId::from(42), id);
    }

    #[test]
    fn test_id_display() {
        let id: CourseId = Id::from_i64(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:?}", id), "Id(7)");
    }
}
