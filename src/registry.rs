//! Explicit registry of container declarations.
//!
//! A code-emission layer declares, per element type, which container it
//! wants (one of the three set order policies or a sequence) and under which
//! name. [`ContainerRegistry`] is an ordinary value the caller constructs and
//! passes around; there is no process-wide registration state.
//!
//! # Examples
//!
//! ```rust
//! use setgen::registry::{ContainerDeclaration, ContainerKind, ContainerRegistry, OrderPolicy};
//!
//! let mut registry = ContainerRegistry::new();
//! registry
//!     .register(ContainerDeclaration::new("Point", ContainerKind::Set(OrderPolicy::Sorted))?)?;
//! registry.register(
//!     ContainerDeclaration::new("Point", "sequence".parse()?)?.rename("Path")?,
//! )?;
//!
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.get("PointSet").map(|declaration| declaration.kind().to_string()),
//!            Some("sorted".to_string()));
//! assert!(registry.get("Path").is_some());
//! # Ok::<(), setgen::CollectionError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::element::{HashIndex, hash_index_with_capacity};
use crate::error::CollectionError;

// =============================================================================
// Identifiers
// =============================================================================

/// Returns `true` if `identifier` is a valid type name: an ASCII letter or
/// `_` followed by ASCII alphanumerics or `_`.
///
/// # Examples
///
/// ```rust
/// use setgen::registry::is_valid_identifier;
///
/// assert!(is_valid_identifier("a1___1234_fla"));
/// assert!(!is_valid_identifier("abc def"));
/// ```
#[must_use]
pub fn is_valid_identifier(identifier: &str) -> bool {
    let mut characters = identifier.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
}

fn validate(kind: &'static str, identifier: String) -> Result<String, CollectionError> {
    if is_valid_identifier(&identifier) {
        Ok(identifier)
    } else {
        Err(CollectionError::InvalidIdentifier { kind, identifier })
    }
}

// =============================================================================
// Container Kinds
// =============================================================================

/// Iteration discipline of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderPolicy {
    /// [`UnorderedSet`](crate::collection::UnorderedSet).
    Unordered,
    /// [`InsertionOrderedSet`](crate::collection::InsertionOrderedSet).
    InsertionOrdered,
    /// [`SortedSet`](crate::collection::SortedSet).
    Sorted,
}

impl OrderPolicy {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Unordered => "unordered",
            Self::InsertionOrdered => "insertion",
            Self::Sorted => "sorted",
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.keyword())
    }
}

impl FromStr for OrderPolicy {
    type Err = CollectionError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword {
            "unordered" => Ok(Self::Unordered),
            "insertion" => Ok(Self::InsertionOrdered),
            "sorted" => Ok(Self::Sorted),
            _ => Err(CollectionError::InvalidIdentifier {
                kind: "order policy",
                identifier: keyword.to_string(),
            }),
        }
    }
}

/// Which container a declaration asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A set with the given order policy.
    Set(OrderPolicy),
    /// A [`Sequence`](crate::collection::Sequence).
    Sequence,
}

impl ContainerKind {
    /// Suffix appended to the element type to form the default name.
    #[must_use]
    pub const fn default_suffix(self) -> &'static str {
        match self {
            Self::Set(_) => "Set",
            Self::Sequence => "Slice",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(policy) => fmt::Display::fmt(policy, formatter),
            Self::Sequence => formatter.write_str("sequence"),
        }
    }
}

impl FromStr for ContainerKind {
    type Err = CollectionError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        if keyword == "sequence" {
            return Ok(Self::Sequence);
        }
        keyword
            .parse()
            .map(Self::Set)
            .map_err(|_| CollectionError::InvalidIdentifier {
                kind: "container kind",
                identifier: keyword.to_string(),
            })
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// One container requested for one element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDeclaration {
    element_type: String,
    container_name: String,
    kind: ContainerKind,
}

impl ContainerDeclaration {
    /// Declares a container named `<element_type>Set` or
    /// `<element_type>Slice`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIdentifier`] if `element_type` is not
    /// a valid identifier.
    pub fn new(element_type: impl Into<String>, kind: ContainerKind) -> Result<Self, CollectionError> {
        let element_type = validate("element type", element_type.into())?;
        let container_name = format!("{element_type}{}", kind.default_suffix());
        Ok(Self {
            element_type,
            container_name,
            kind,
        })
    }

    /// Replaces the default container name.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIdentifier`] if `name` is not a valid
    /// identifier.
    pub fn rename(self, name: impl Into<String>) -> Result<Self, CollectionError> {
        let container_name = validate("container name", name.into())?;
        Ok(Self {
            container_name,
            ..self
        })
    }

    /// The element type the container holds.
    #[must_use]
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// The name the container is exposed under.
    #[must_use]
    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    /// The requested container.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }
}

impl fmt::Display for ContainerDeclaration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {} of {}",
            self.container_name, self.kind, self.element_type
        )
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Declarations keyed by container name, kept in registration order.
#[derive(Debug, Clone)]
pub struct ContainerRegistry {
    declarations: Vec<ContainerDeclaration>,
    names: HashIndex<String, usize>,
}

impl ContainerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            names: hash_index_with_capacity(0),
        }
    }

    /// Adds a declaration and returns a reference to the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateDeclaration`] if a declaration with
    /// the same container name is already registered.
    pub fn register(
        &mut self,
        declaration: ContainerDeclaration,
    ) -> Result<&ContainerDeclaration, CollectionError> {
        if self.names.contains_key(declaration.container_name()) {
            return Err(CollectionError::DuplicateDeclaration {
                name: declaration.container_name,
            });
        }
        let position = self.declarations.len();
        self.names
            .insert(declaration.container_name.clone(), position);
        self.declarations.push(declaration);
        Ok(&self.declarations[position])
    }

    /// Looks up a declaration by container name.
    #[must_use]
    pub fn get(&self, container_name: &str) -> Option<&ContainerDeclaration> {
        self.names
            .get(container_name)
            .map(|&position| &self.declarations[position])
    }

    /// Returns every declaration made for `element_type`, in registration
    /// order.
    pub fn declarations_for<'a>(
        &'a self,
        element_type: &'a str,
    ) -> impl Iterator<Item = &'a ContainerDeclaration> + 'a {
        self.declarations
            .iter()
            .filter(move |declaration| declaration.element_type == element_type)
    }

    /// Returns the declarations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContainerDeclaration> {
        self.declarations.iter()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ContainerRegistry {
    type Item = &'a ContainerDeclaration;
    type IntoIter = std::slice::Iter<'a, ContainerDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a")]
    #[case("_")]
    #[case("___")]
    #[case("_a")]
    #[case("A")]
    #[case("asdf")]
    #[case("a1")]
    #[case("a1___")]
    #[case("a1___1234_fla")]
    fn test_valid_identifiers(#[case] identifier: &str) {
        assert!(is_valid_identifier(identifier));
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t")]
    #[case("哈哈")]
    #[case("!!!")]
    #[case("abc?")]
    #[case("abc def")]
    #[case(" a")]
    #[case("a ")]
    #[case("1a")]
    fn test_invalid_identifiers(#[case] identifier: &str) {
        assert!(!is_valid_identifier(identifier));
    }

    #[rstest]
    #[case("unordered", ContainerKind::Set(OrderPolicy::Unordered))]
    #[case("insertion", ContainerKind::Set(OrderPolicy::InsertionOrdered))]
    #[case("sorted", ContainerKind::Set(OrderPolicy::Sorted))]
    #[case("sequence", ContainerKind::Sequence)]
    fn test_kind_keywords(#[case] keyword: &str, #[case] kind: ContainerKind) {
        assert_eq!(keyword.parse::<ContainerKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), keyword);
    }

    #[rstest]
    fn test_unknown_kind_keyword() {
        let error = "ordered".parse::<ContainerKind>().unwrap_err();
        assert_eq!(format!("{error}"), "invalid container kind identifier: \"ordered\"");
        assert!("sequence".parse::<OrderPolicy>().is_err());
    }

    #[rstest]
    #[case(ContainerKind::Set(OrderPolicy::Unordered), "IntSet")]
    #[case(ContainerKind::Sequence, "IntSlice")]
    fn test_default_name(#[case] kind: ContainerKind, #[case] expected: &str) {
        let declaration = ContainerDeclaration::new("Int", kind).unwrap();
        assert_eq!(declaration.container_name(), expected);
        assert_eq!(declaration.element_type(), "Int");
        assert_eq!(declaration.kind(), kind);
    }

    #[rstest]
    fn test_rename_is_validated() {
        let declaration = ContainerDeclaration::new("Int", ContainerKind::Sequence).unwrap();
        let renamed = declaration.clone().rename("Numbers").unwrap();
        assert_eq!(renamed.container_name(), "Numbers");
        assert_eq!(format!("{renamed}"), "Numbers: sequence of Int");

        let error = declaration.rename("bad name").unwrap_err();
        assert!(matches!(
            error,
            CollectionError::InvalidIdentifier { kind: "container name", .. }
        ));
    }

    #[rstest]
    fn test_invalid_element_type() {
        let error =
            ContainerDeclaration::new("", ContainerKind::Set(OrderPolicy::Sorted)).unwrap_err();
        assert!(matches!(
            error,
            CollectionError::InvalidIdentifier { kind: "element type", .. }
        ));
    }

    #[rstest]
    fn test_registry_rejects_duplicates_and_keeps_order() {
        let mut registry = ContainerRegistry::new();
        let sorted = ContainerDeclaration::new("Int", ContainerKind::Set(OrderPolicy::Sorted)).unwrap();
        let slice = ContainerDeclaration::new("Int", ContainerKind::Sequence).unwrap();
        let unordered =
            ContainerDeclaration::new("Int", ContainerKind::Set(OrderPolicy::Unordered)).unwrap();

        registry.register(sorted.clone()).unwrap();
        registry.register(slice.clone()).unwrap();
        let error = registry.register(unordered.clone()).unwrap_err();
        assert_eq!(format!("{error}"), "container \"IntSet\" is already declared");

        registry.register(unordered.rename("IntBag").unwrap()).unwrap();
        let names: Vec<&str> = registry
            .iter()
            .map(ContainerDeclaration::container_name)
            .collect();
        assert_eq!(names, vec!["IntSet", "IntSlice", "IntBag"]);
        assert_eq!(registry.get("IntSlice"), Some(&slice));
        assert_eq!(registry.get("Missing"), None);
        assert_eq!(registry.declarations_for("Int").count(), 3);
        assert_eq!(registry.declarations_for("Float").count(), 0);
    }
}
