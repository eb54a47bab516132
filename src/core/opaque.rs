//! # Opaque Path Values
//!
//! The navigation path is allowed to hold values outside the app's closed
//! destination enum (the untyped push escape hatch). Those values still need
//! well-defined equality and hashing, because the stack is inspected and
//! truncated by value.
//!
//! `OpaqueValue` erases the concrete type behind a trait object while
//! delegating `Eq`, `Hash`, `Clone` and `Debug` back to it. Two opaque
//! values are equal only when they wrap the same concrete type and those
//! inner values compare equal; the `TypeId` is folded into the hash so
//! equal-looking values of different types hash independently.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Object-safe bridge for the erased value's standard traits.
trait DynNavValue: Any {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynNavValue) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
    fn dyn_clone(&self) -> Box<dyn DynNavValue>;
    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn type_name(&self) -> &'static str;
}

impl<T> DynNavValue for T
where
    T: Any + Eq + Hash + Clone + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynNavValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|value| value == self)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        // Type first, so equal payloads of different types diverge.
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn dyn_clone(&self) -> Box<dyn DynNavValue> {
        Box::new(self.clone())
    }

    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A type-erased, equality-comparable value pushed onto the navigation path.
pub struct OpaqueValue {
    inner: Box<dyn DynNavValue>,
}

impl OpaqueValue {
    /// Wraps any `'static` value with the standard value-type traits.
    pub fn new<V>(value: V) -> Self
    where
        V: Any + Eq + Hash + Clone + fmt::Debug,
    {
        Self {
            inner: Box::new(value),
        }
    }

    /// Borrows the inner value if it is a `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.inner.as_any().downcast_ref::<V>()
    }

    /// Whether the inner value is a `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.inner.as_any().is::<V>()
    }

    /// Name of the wrapped concrete type, for logs and fallback screens.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.inner.dyn_eq(other.inner.as_ref())
    }
}

impl Eq for OpaqueValue {}

impl Hash for OpaqueValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.dyn_hash(state);
    }
}

impl Clone for OpaqueValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.dyn_clone(),
        }
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.dyn_fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn hash_of(value: &OpaqueValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_values_of_the_same_type_compare_equal() {
        let a = OpaqueValue::new("notes".to_string());
        let b = OpaqueValue::new("notes".to_string());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_unequal_values_of_the_same_type_differ() {
        let a = OpaqueValue::new(1u32);
        let b = OpaqueValue::new(2u32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_types_never_compare_equal() {
        let a = OpaqueValue::new(1u32);
        let b = OpaqueValue::new(1u64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_downcast_recovers_the_value() {
        let value = OpaqueValue::new(42u32);
        assert!(value.is::<u32>());
        assert_eq!(value.downcast_ref::<u32>(), Some(&42));
        assert_eq!(value.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_clone_preserves_equality() {
        let value = OpaqueValue::new("x".to_string());
        let cloned = value.clone();
        assert_eq!(value, cloned);
    }

    #[test]
    fn test_debug_delegates_to_the_inner_value() {
        let value = OpaqueValue::new(7u8);
        assert_eq!(format!("{value:?}"), "7");
    }

    #[test]
    fn test_type_name_reports_the_concrete_type() {
        let value = OpaqueValue::new(7u32);
        assert!(value.type_name().ends_with("u32"));
    }
}
